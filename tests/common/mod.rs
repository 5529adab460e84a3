use assert_cmd::Command;

pub fn roster_cmd() -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env_remove("ROSTER_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
