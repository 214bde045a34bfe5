use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

const ACTION: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_flashdeck"))
}

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("fd_{}_{}_{}", prefix, std::process::id(), nanos));
    std::fs::create_dir_all(dir.join("config")).expect("create temp dir");
    dir
}

/// Run the binary with `script` on stdin and an isolated config home.
fn run_session(dir: &Path, args: &[&str], script: &str) -> std::process::Output {
    let mut child = Command::new(bin())
        .args(args)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("FLASHDECK_CONFIG")
        .env_remove("FLASHDECK_IMPORT")
        .env_remove("FLASHDECK_EXPORT")
        .env("FLASHDECK_LOG", "off")
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn flashdeck");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("wait for flashdeck")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn test_exit_prints_bye() {
    let dir = temp_dir("exit");
    let output = run_session(&dir, &[], "exit\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{}\nBye bye!\n", ACTION));
}

#[test]
fn test_add_ask_hardest_and_export_on_exit() {
    let dir = temp_dir("flow");
    let script = "add\ncat\na pet\nask\n2\nwrong\nwrong\nhardest card\nexit\n";
    let output = run_session(&dir, &["--export", "saved.txt"], script);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("The pair (\"cat\":\"a pet\") has been added."));
    assert_eq!(
        stdout.matches("Wrong answer. The correct one is \"a pet\".").count(),
        2
    );
    assert!(stdout.contains("The hardest card is \"cat\". You have 2 errors answering it."));
    assert!(stdout.ends_with("Bye bye!\n1 cards have been saved.\n"));

    let saved = std::fs::read_to_string(dir.join("saved.txt")).expect("read export");
    assert_eq!(saved, "cat\na pet\n2\n");
}

#[test]
fn test_import_flag_loads_cards() {
    let dir = temp_dir("import");
    std::fs::write(dir.join("deck.txt"), "France\nParis\n3\nJapan\nTokyo\n0\n").expect("write deck");

    let output = run_session(&dir, &["-i", "deck.txt"], "hardest card\nexit\n");
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("2 cards have been loaded.\n"));
    assert!(stdout.contains("The hardest card is \"France\". You have 3 errors answering it."));
}

#[test]
fn test_missing_import_file_continues() {
    let dir = temp_dir("missing");
    let output = run_session(&dir, &["--import", "nope.txt"], "exit\n");

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("File not found.\n{}\nBye bye!\n", ACTION)
    );
}

#[test]
fn test_wrong_command() {
    let dir = temp_dir("wrong");
    let output = run_session(&dir, &[], "jump\nexit\n");

    assert_eq!(
        stdout_of(&output),
        format!("{a}\nWrong command.\n{a}\nBye bye!\n", a = ACTION)
    );
}

#[test]
fn test_log_saves_dialogue() {
    let dir = temp_dir("log");
    let output = run_session(&dir, &[], "remove\ncat\nlog\nsession.log\nexit\n");

    assert!(stdout_of(&output).contains("The log has been saved."));
    let log = std::fs::read_to_string(dir.join("session.log")).expect("read log");
    assert_eq!(
        log,
        format!(
            "{a}\nremove\nThe card:\ncat\nCan't remove \"cat\": there is no such card.\n\n{a}\nlog\nFile name:\nsession.log\n",
            a = ACTION
        )
    );
}

#[test]
fn test_export_paths_from_config() {
    let dir = temp_dir("config");
    let config_dir = dir.join("config").join("flashdeck");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(
        config_dir.join("config.toml"),
        "[files]\nexport = \"from_config.txt\"\n",
    )
    .expect("write config");

    let output = run_session(&dir, &[], "add\ndog\nan animal\nexit\n");

    assert!(output.status.success());
    let saved = std::fs::read_to_string(dir.join("from_config.txt")).expect("read export");
    assert_eq!(saved, "dog\nan animal\n0\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = temp_dir("badcfg");
    let output = Command::new(bin())
        .env("FLASHDECK_CONFIG", dir.join("absent.toml"))
        .env("FLASHDECK_LOG", "off")
        .stdin(Stdio::null())
        .output()
        .expect("run flashdeck");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_completions() {
    let output = Command::new(bin())
        .args(["completions", "bash"])
        .output()
        .expect("run flashdeck");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("flashdeck"));
}
