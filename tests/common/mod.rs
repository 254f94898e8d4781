use assert_cmd::Command;

pub fn tagtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagtrack").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
