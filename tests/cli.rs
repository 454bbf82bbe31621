use std::process::{Command, Output};

const ASK: &str = env!("CARGO_BIN_EXE_ask");
const ASK_GEMINI: &str = env!("CARGO_BIN_EXE_ask-gemini");

/// Runs `bin` in an empty directory with no API keys in the environment.
fn run_without_keys(bin: &str, args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();

    Command::new(bin)
        .args(args)
        .current_dir(dir.path())
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn ask_without_words_exits_with_status_one() {
    let output = run_without_keys(ASK, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: no arguments provided"));
    assert!(output.stdout.is_empty());
}

#[test]
fn ask_checks_arguments_before_the_api_key() {
    let output = run_without_keys(ASK, &["-s"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: no arguments provided"));
    assert!(!stderr(&output).contains("OPENROUTER_API_KEY"));
}

#[test]
fn ask_without_api_key_fails_before_calling_out() {
    let output = run_without_keys(ASK, &["hello"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("OPENROUTER_API_KEY"));
    assert!(!stderr(&output).contains("Failed to call"));
    assert!(output.stdout.is_empty());
}

#[test]
fn ask_gemini_without_words_exits_with_status_one() {
    let output = run_without_keys(ASK_GEMINI, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: no arguments provided"));
    assert!(!stderr(&output).contains("GOOGLE_API_KEY"));
}

#[test]
fn ask_gemini_without_api_key_fails_before_calling_out() {
    let output = run_without_keys(ASK_GEMINI, &["-s", "list", "files"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("GOOGLE_API_KEY"));
    assert!(!stderr(&output).contains("Failed to call"));
    assert!(output.stdout.is_empty());
}
