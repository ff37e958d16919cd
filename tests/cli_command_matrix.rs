use assert_cmd::Command;

fn run_help(args: &[&str]) {
    let mut cmd = Command::cargo_bin("adops").expect("adops binary builds");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    run_help(&["cpm"]);
    run_help(&["ctr"]);
    run_help(&["check"]);
    run_help(&["session"]);
}
