use assert_cmd::Command;
use serde_json::Value;

pub fn cmd() -> Command {
    Command::cargo_bin("adops").expect("adops binary builds")
}

pub fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}
