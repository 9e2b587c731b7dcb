use rfpixel::rendering::raster::rasterize;
use rfpixel::{Command, EditorConfig, EditorSession};

#[test]
fn smoke_rasterize_session_grid() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.apply(Command::RenderText { text: "PIXEL".into() });
    let shot = rasterize(s.grid(), 8).unwrap();
    assert_eq!(shot.width, 256);
    assert_eq!(shot.height, 256);
    assert!(!shot.is_empty());
}

#[test]
fn smoke_imported_garbage_fails_to_render() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.apply(Command::Import { code: ".db 0x00, 0xFF".into() });
    assert!(rasterize(s.grid(), 1).is_err());
}
