use classifier::{ClassifyError, LabelTable};
use std::fs;

#[test]
fn test_parse_one_label_per_line() {
    let table = LabelTable::parse("background\ntench\r\ngoldfish\n").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0), Some("background"));
    assert_eq!(table.get(1), Some("tench"));
    assert_eq!(table.get(2), Some("goldfish"));
    assert_eq!(table.get(3), None);
}

#[test]
fn test_parse_keeps_blank_lines_for_alignment() {
    let table = LabelTable::parse("a\n\nc").unwrap();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec!["a", "", "c"]);
}

#[test]
fn test_parse_empty_is_resource_error() {
    assert!(matches!(LabelTable::parse(""), Err(ClassifyError::ResourceLoad(_))));
    assert!(matches!(LabelTable::parse(" \n\n"), Err(ClassifyError::ResourceLoad(_))));
}

#[test]
fn test_load_missing_file() {
    let result = LabelTable::load("/nonexistent/labels.txt");
    match result {
        Err(ClassifyError::ResourceLoad(msg)) => assert!(msg.contains("/nonexistent/labels.txt")),
        other => panic!("expected resource load error, got {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("classifier-labels-{}.txt", std::process::id()));
    fs::write(&path, "cat\ndog\n").unwrap();

    let table = LabelTable::load(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1), Some("dog"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_clones_share_labels() {
    let table = LabelTable::parse("a\nb").unwrap();
    let clone = table.clone();
    assert_eq!(table, clone);
}
