//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    let bin = env!("CARGO_BIN_EXE_textmod");
    let mut cmd = Command::new(bin);
    cmd.env_remove("TEXTMOD_ICON");
    cmd.env_remove("TEXTMOD_UNDERLINE_CHAR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run with `stdin` piped in, from a temp dir so dotenv() won't load a .env.
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin()
        .args(args)
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn run(args: &[&str]) -> Output {
    run_with_stdin(args, "")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json_of(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout_of(output)).expect("valid JSON on stdout")
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = run(&["--help"]);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("underline"));
    assert!(stdout.contains("one-liner"));
}

#[test]
fn cli_version_succeeds() {
    let stdout = stdout_of(&run(&["--version"]));
    assert!(stdout.contains("textmod"));
}

#[test]
fn underline_argument() {
    let stdout = stdout_of(&run(&["underline", "Hello\n  World"]));
    assert_eq!(stdout, "Hello\n-----\n  World\n  -----\n");
}

#[test]
fn underline_custom_char_from_stdin() {
    let stdout = stdout_of(&run_with_stdin(&["underline", "--char", "=", "-"], "ab\n"));
    assert_eq!(stdout, "ab\n==\n");
}

#[test]
fn underline_char_from_env() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["underline", "ab"])
        .env("TEXTMOD_UNDERLINE_CHAR", "~")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    assert_eq!(stdout_of(&output), "ab\n~~\n");
}

#[test]
fn invalid_underline_char_env_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["underline", "ab"])
        .env("TEXTMOD_UNDERLINE_CHAR", "==")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("TEXTMOD_UNDERLINE_CHAR"),
        "expected config error message, got: {}",
        stderr
    );
}

#[test]
fn remove_newlines_reads_stdin_without_argument() {
    let stdout = stdout_of(&run_with_stdin(&["remove-newlines"], "a\nb\nc"));
    assert_eq!(stdout, "a b c");
}

#[test]
fn remove_redundant_space_modes() {
    let keep = stdout_of(&run(&["remove-redundant-space", "a   b\n   c   d"]));
    assert_eq!(keep, "a b\n   c d");
    let drop = stdout_of(&run(&[
        "remove-redundant-space",
        "--no-keep-indent",
        "a   b\n   c   d",
    ]));
    assert_eq!(drop, "a b\nc d");
}

#[test]
fn sentences_breaks_lines() {
    let stdout = stdout_of(&run(&["sentences", "Hello. World; Foo: Bar"]));
    assert_eq!(stdout, "Hello.\nWorld;\nFoo:\nBar");
}

#[test]
fn one_liner_flattens() {
    let stdout = stdout_of(&run_with_stdin(&["one-liner"], "Hi   there.\n  Bye\n"));
    assert_eq!(stdout, "Hi there. Bye ");
}

#[test]
fn json_item_for_single_transformation() {
    let value = json_of(&run(&["--json", "one-liner", "Hi   there.\n  Bye"]));
    let items = value["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item["uid"], "one_liner");
    assert_eq!(item["arg"], "Hi there. Bye");
    assert_eq!(item["title"], "Hi there. Bye");
    assert_eq!(item["subtitle"], "Remove all newlines and redundant spaces");
    assert_eq!(item["valid"], true);
    assert_eq!(item["icon"]["path"], "icon.png");
}

#[test]
fn json_icon_from_env() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["remove-newlines", "--json", "a"])
        .env("TEXTMOD_ICON", "icons/nl.png")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    let value = json_of(&output);
    assert_eq!(value["items"][0]["icon"]["path"], "icons/nl.png");
}

#[test]
fn all_lists_every_transformation() {
    let value = json_of(&run(&["all", "Hello. World"]));
    let uids: Vec<&str> = value["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["uid"].as_str().expect("uid string"))
        .collect();
    assert_eq!(
        uids,
        [
            "underline",
            "remove_newlines",
            "remove_redundant_space",
            "limit_newlines_to_sentences",
            "one_liner",
        ]
    );
    assert_eq!(value["items"][3]["arg"], "Hello.\nWorld");
    assert_eq!(value["items"][0]["title"], "---- Hello. World ----");
}

#[test]
fn completions_bash() {
    let stdout = stdout_of(&run(&["completions", "bash"]));
    assert!(stdout.contains("textmod"));
}
