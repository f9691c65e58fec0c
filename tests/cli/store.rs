//! Tests for `tkmanager store`.

use crate::support::*;

#[test]
fn test_store_then_read() {
    let t = Test::init();
    assert_roundtrip(&t, "github", "ghp_1234567890");
}

#[test]
fn test_store_in_group() {
    let t = Test::init();

    let output = t.store_in("api", "web", "sk-1");
    assert_success(&output);
    assert_stdout_contains(&output, "WEB");

    let output = t.read_in("API", "Web");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "sk-1");
}

#[test]
fn test_store_existing_name_fails_without_force() {
    let t = Test::init();
    assert_success(&t.store("github", "first"));
    let before = t.store_bytes();

    let output = t.store("GitHub", "second");
    assert_exit_code(&output, exit::TOKEN_OVERWRITE);
    assert_stderr_contains(&output, "--force");
    assert_eq!(t.store_bytes(), before);

    let output = t.read("github");
    assert_eq!(stdout(&output).trim(), "first");
}

#[test]
fn test_store_force_overwrites() {
    let t = Test::init();
    assert_success(&t.store("github", "first"));

    let output = t
        .cmd()
        .args(["store", "github", "second", "--force"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.read("github");
    assert_eq!(stdout(&output).trim(), "second");
}

#[test]
fn test_same_name_in_different_groups() {
    let t = Test::with_tokens(&[("api", "DEFAULT", "one"), ("api", "WEB", "two")]);

    assert_eq!(stdout(&t.read("api")).trim(), "one");
    assert_eq!(stdout(&t.read_in("api", "web")).trim(), "two");
}

#[test]
fn test_store_reads_piped_secret() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["store", "github"])
        .write_stdin("ghp_from_pipe\n")
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(stdout(&t.read("github")).trim(), "ghp_from_pipe");
}

#[test]
fn test_store_keeps_every_line_of_piped_secret() {
    let t = Test::init();
    let pem = "-----BEGIN KEY-----\nAAAA\n-----END KEY-----";

    let output = t
        .cmd()
        .args(["store", "pem"])
        .write_stdin(format!("{}\n", pem))
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.read("pem");
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{}\n", pem));
}

#[test]
fn test_store_piped_secret_drops_only_final_crlf() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["store", "json"])
        .write_stdin("{\r\n  \"a\": 1\r\n}\r\n")
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(stdout(&t.read("json")), "{\r\n  \"a\": 1\r\n}\n");
}

#[test]
fn test_store_empty_secret_fails() {
    let t = Test::init();

    let output = t.cmd().args(["store", "github"]).output().unwrap();
    assert_exit_code(&output, exit::VALIDATION);

    let output = t.store("github", "");
    assert_exit_code(&output, exit::VALIDATION);
}

#[test]
fn test_store_blank_name_fails() {
    let t = Test::init();

    let output = t.store("   ", "secret");
    assert_exit_code(&output, exit::VALIDATION);
}

#[test]
fn test_store_with_expiration() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["store", "github", "ghp_1", "--expires", "4102444800"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t
        .cmd()
        .args(["read", "github", "--expires"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "ghp_1 : 4102444800");
}

#[test]
fn test_store_with_rfc3339_expiration() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["store", "github", "ghp_1", "-e", "2100-01-01T00:00:00Z"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.cmd().args(["read", "github", "-e"]).output().unwrap();
    assert_eq!(stdout(&output).trim(), "ghp_1 : 4102444800");
}

#[test]
fn test_store_invalid_expiration_fails() {
    let t = Test::init();
    let before = t.store_bytes();

    let output = t
        .cmd()
        .args(["store", "github", "ghp_1", "--expires", "next tuesday"])
        .output()
        .unwrap();
    assert_exit_code(&output, exit::VALIDATION);
    assert_eq!(t.store_bytes(), before);
}

#[test]
fn test_store_without_file_fails() {
    let t = Test::new();

    let output = t.store("github", "ghp_1");
    assert_exit_code(&output, exit::FILE_NOT_FOUND);
    assert_stderr_contains(&output, "make-file");
    assert!(!t.store_path().exists());
}

#[test]
fn test_unicode_secret_roundtrip() {
    let t = Test::init();
    assert_roundtrip(&t, "unicode", "Hello 世界 🌍 Привет");
}

#[test]
fn test_long_secret_roundtrip() {
    let t = Test::init();
    let long = "x".repeat(10_000);
    assert_roundtrip(&t, "long", &long);
}
