//! Tests for `tkmanager delete`.

use crate::support::*;

#[test]
fn test_delete_token() {
    let t = Test::with_tokens(STANDARD_TOKENS);

    let output = t.delete_in("GitHub", "default");
    assert_success(&output);
    assert_stdout_contains(&output, "deleted");

    let output = t.read("github");
    assert_exit_code(&output, exit::TOKEN_NOT_FOUND);

    // Siblings survive
    assert_eq!(stdout(&t.read("gitlab")).trim(), "glpat-abcdef");
}

#[test]
fn test_delete_last_token_removes_group() {
    let t = Test::with_tokens(STANDARD_TOKENS);

    assert_success(&t.delete_in("db", "prod"));

    let output = t.list();
    assert_stdout_excludes(&output, "PROD");
    let output = t.read_in("db", "prod");
    assert_exit_code(&output, exit::GROUP_NOT_FOUND);
}

#[test]
fn test_delete_missing_token_leaves_file_unchanged() {
    let t = Test::with_tokens(STANDARD_TOKENS);
    let before = t.store_bytes();

    let output = t.delete_in("bitbucket", "default");
    assert_exit_code(&output, exit::TOKEN_NOT_FOUND);
    assert_eq!(t.store_bytes(), before);
}

#[test]
fn test_delete_in_missing_group_is_token_not_found() {
    let t = Test::with_tokens(STANDARD_TOKENS);

    let output = t.delete_in("github", "nope");
    assert_exit_code(&output, exit::TOKEN_NOT_FOUND);
}

#[test]
fn test_delete_without_yes_when_piped() {
    let t = Test::with_tokens(STANDARD_TOKENS);

    let output = t.cmd().args(["delete", "github"]).output().unwrap();
    assert_success(&output);
    assert_exit_code(&t.read("github"), exit::TOKEN_NOT_FOUND);
}
