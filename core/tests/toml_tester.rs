#[test]
fn test_shortcut_collection() {
    use lnkcore::{core::parse_toml_file, parse_shortcut};
    use std::{fs::read, path::PathBuf};

    let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_location.push("tests/test_data/shortcuts.toml");

    let results = parse_toml_file(&test_location.display().to_string()).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[1].ends_with("documents.lnk"));

    let info = parse_shortcut(&read(&results[0]).unwrap()).unwrap();
    assert_eq!(info.path, "C:\\Program Files\\App\\app.exe");
    assert_eq!(info.name, "App");
    assert_eq!(info.working_directory, "C:\\Program Files\\App");
    assert_eq!(info.arguments, "--flag");

    let info = parse_shortcut(&read(&results[1]).unwrap()).unwrap();
    assert_eq!(info.path, "C:\\Users\\Public\\Documents");
    assert_eq!(info.icon_location, "C:\\Windows\\System32\\shell32.dll");

    let info = parse_shortcut(&read(&results[2]).unwrap()).unwrap();
    assert_eq!(info.path, "\\\\fileserver\\team\\reports\\q3.xlsx");
    assert_eq!(info.name, "Q3 report");
}
