// File: tests/cli_args.rs
// Tests for command-line parsing.
use std::env;
use std::fs;
use std::path::PathBuf;
use vimdict::cli::{Options, ParsedArgs, UsageError, parse_args};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn scratch_dir(suffix: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("vimdict_cli_{}_{}", suffix, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_doc_dir_is_required() {
    assert_eq!(parse_args(&[]), Err(UsageError::MissingDocRoot));
}

#[test]
fn test_help_flag_wins() {
    assert_eq!(parse_args(&args(&["-h"])), Ok(ParsedArgs::Help));
    assert_eq!(parse_args(&args(&["--help"])), Ok(ParsedArgs::Help));
    // Even alongside arguments that would otherwise be rejected.
    assert_eq!(
        parse_args(&args(&["/nonexistent", "--help", "extra"])),
        Ok(ParsedArgs::Help)
    );
}

#[test]
fn test_bare_help_word_is_a_positional() {
    // 'help' without dashes is a doc directory candidate, not a help request.
    let result = parse_args(&args(&["help"]));
    assert!(
        matches!(result, Err(UsageError::NotADirectory(_))),
        "got {:?}",
        result
    );
}

#[test]
fn test_run_options_with_defaults() {
    let dir = scratch_dir("defaults");
    let parsed = parse_args(&args(&[dir.to_str().unwrap()])).unwrap();
    assert_eq!(
        parsed,
        ParsedArgs::Run(Options {
            doc_root: dir.clone(),
            output_dir: PathBuf::from("."),
            config_path: None,
        })
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_output_and_config_options() {
    let dir = scratch_dir("flags");
    let parsed = parse_args(&args(&[
        "-o",
        "/tmp/dicts",
        "--config",
        "custom.toml",
        dir.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(
        parsed,
        ParsedArgs::Run(Options {
            doc_root: dir.clone(),
            output_dir: PathBuf::from("/tmp/dicts"),
            config_path: Some(PathBuf::from("custom.toml")),
        })
    );

    // Long and short spellings are interchangeable.
    let long = parse_args(&args(&["--output", "/tmp/dicts", dir.to_str().unwrap()])).unwrap();
    match long {
        ParsedArgs::Run(options) => assert_eq!(options.output_dir, PathBuf::from("/tmp/dicts")),
        other => panic!("expected run options, got {:?}", other),
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_is_not_a_directory() {
    let dir = scratch_dir("file");
    let file = dir.join("eval.txt");
    fs::write(&file, ":let\n").unwrap();

    let err = parse_args(&args(&[file.to_str().unwrap()])).unwrap_err();
    assert_eq!(err, UsageError::NotADirectory(file.clone()));
    assert!(err.to_string().contains("is not a directory"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unknown_option_is_rejected() {
    let err = parse_args(&args(&["--frobnicate", "/tmp"])).unwrap_err();
    assert_eq!(err, UsageError::UnknownOption("--frobnicate".to_string()));
    assert_eq!(err.to_string(), "unknown option '--frobnicate'");
}

#[test]
fn test_option_missing_its_value() {
    let dir = scratch_dir("novalue");
    let err = parse_args(&args(&[dir.to_str().unwrap(), "-o"])).unwrap_err();
    assert_eq!(err, UsageError::MissingValue("--output"));
    assert_eq!(err.to_string(), "option '--output' expects a value");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_second_positional_is_rejected() {
    let dir = scratch_dir("extra");
    let err = parse_args(&args(&[dir.to_str().unwrap(), "other"])).unwrap_err();
    assert_eq!(err, UsageError::UnexpectedArgument("other".to_string()));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_doc_dir_message() {
    assert_eq!(
        UsageError::MissingDocRoot.to_string(),
        "missing required <vim_doc_dir> argument"
    );
}
