use std::fs;

use hanzi_prep::run;

#[test]
fn clean_writes_trimmed_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "あ你好katakana:ア hiragana:あ Hangul:가 endか\n").unwrap();

    run::clean(input, Some(output.clone())).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "你好katakana: hiragana: Hangul: end");
}

#[test]
fn clean_missing_input_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let err = run::clean(missing.clone(), None).unwrap_err();
    assert!(err.to_string().contains(&missing.display().to_string()));
}

#[test]
fn clean_rejects_non_utf8_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("binary.txt");
    fs::write(&input, [0xFFu8, 0xFE, 0x00, 0x80]).unwrap();

    let err = run::clean(input.clone(), None).unwrap_err();
    assert!(format!("{err:#}").contains(&input.display().to_string()));
}
