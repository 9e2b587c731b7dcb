use std::fs;
use std::path::PathBuf;

use rfpixel::{ColorKey, Command, EditorConfig, EditorSession};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn check_golden(name: &str, digest: &str) {
    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "golden mismatch for {}", name);
}

fn render(text: &str) -> EditorSession {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.apply(Command::SelectColor { color: ColorKey::WHITE });
    s.apply(Command::RenderText { text: text.to_string() });
    s
}

#[test]
fn golden_hello_world() {
    let s = render("HELLO WORLD");
    assert_eq!(s.grid().count(ColorKey::WHITE), 103);
    check_golden("hello_world.sha256", &s.grid().digest());
}

#[test]
fn golden_wrapped_lines() {
    let s = render("hello world hello world");
    assert_eq!(s.grid().count(ColorKey::WHITE), 206);
    check_golden("wrap.sha256", &s.grid().digest());
}
