#![cfg(feature = "async")]

use rfpixel::{Cell, ColorKey, Command, Editor, NotificationLevel, Outcome};
use std::path::PathBuf;

fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("rfpixel-{}-{}", std::process::id(), name));
    std::fs::write(&p, bytes).expect("write temp file");
    p
}

#[tokio::test]
async fn load_image_file_applies_after_read() {
    let img = image::RgbImage::from_pixel(32, 32, image::Rgb([0, 250, 250]));
    let mut png = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut png, image::ImageFormat::Png)
        .unwrap();
    let path = temp_file("cyan.png", &png.into_inner());

    let editor = Editor::new(None).await.unwrap();
    let out = editor.load_image_file(&path).await.unwrap();
    assert_eq!(out, Outcome::Changed { cells: 1024 });
    let grid = editor.grid().await.unwrap();
    assert_eq!(grid.get(Cell::new(31, 31)), ColorKey::CYAN);

    editor.close().await.unwrap();
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn load_non_image_file_notifies() {
    let path = temp_file("notes.txt", b"just some text");
    let editor = Editor::new(None).await.unwrap();
    editor.apply(Command::SelectColor { color: ColorKey::RED }).await.unwrap();
    editor.apply(Command::Paint { row: 0, col: 0 }).await.unwrap();

    match editor.load_image_file(&path).await.unwrap() {
        Outcome::Notify(n) => assert_eq!(n.level, NotificationLevel::Error),
        other => panic!("unexpected outcome {:?}", other),
    }
    let grid = editor.grid().await.unwrap();
    assert_eq!(grid.get(Cell::new(0, 0)), ColorKey::RED);

    editor.close().await.unwrap();
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let editor = Editor::new(None).await.unwrap();
    let res = editor.load_image_file("/definitely/not/here.png").await;
    assert!(matches!(res, Err(rfpixel::Error::IoError(_))));
}

#[tokio::test]
async fn screenshot_from_worker() {
    let editor = Editor::new(None).await.unwrap();
    let shot = editor.screenshot(2).await.unwrap();
    assert_eq!(shot.width, 64);
}
