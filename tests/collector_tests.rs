use std::fs;
use tempfile::tempdir;
use treebench_report::collector::{collect_to_file, combine_files, list_result_files};
use treebench_report::utils::CollectError;

#[test]
fn test_output_length_and_order() {
    let dir = tempdir().unwrap();
    let files = [
        ("cartesianTree_Performance_3000.txt", "3000,30,0.03,0.02\n"),
        ("cartesianTree_Performance_10000.txt", "10000,40,0.3,0.2\n"),
        ("cartesianTree_Performance_2000.txt", "2000,25,0.02,0.01"),
    ];
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("final_results.txt");
    let combined = collect_to_file(dir.path(), &out).unwrap();

    let written = fs::read(&out).unwrap();
    let expected_len: usize = files.iter().map(|(_, c)| c.len() + 1).sum();
    assert_eq!(written.len(), expected_len);

    // byte order: "10000" < "2000" < "3000"
    assert_eq!(
        String::from_utf8(written).unwrap(),
        "10000,40,0.3,0.2\n\n2000,25,0.02,0.01\n3000,30,0.03,0.02\n\n"
    );
    assert_eq!(combined.file_count(), 3);
}

#[test]
fn test_list_is_not_recursive() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("b_dir")).unwrap();
    fs::write(dir.path().join("b_dir/inner.txt"), "ignored").unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();

    let files = list_result_files(dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.txt"));
    assert!(files[1].ends_with("b_dir"));
}

#[test]
fn test_directory_entry_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    fs::create_dir(dir.path().join("b_dir")).unwrap();

    match combine_files(dir.path()) {
        Err(CollectError::ReadFile { path, .. }) => assert!(path.ends_with("b_dir")),
        other => panic!("expected ReadFile error, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("binary"), [0xff, 0xfe, 0x00]).unwrap();

    assert!(matches!(
        combine_files(dir.path()),
        Err(CollectError::ReadFile { .. })
    ));
}

#[test]
fn test_unwritable_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();

    // output path is an existing directory
    let result = collect_to_file(dir.path(), dir.path());
    assert!(matches!(result, Err(CollectError::Write { .. })));
}
