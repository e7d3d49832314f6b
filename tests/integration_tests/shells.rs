use crate::common::TestEnv;
use insta_cmd::assert_cmd_snapshot;

#[test]
fn test_shells_lists_supported() {
    let env = TestEnv::new();
    let mut cmd = env.command();
    cmd.arg("shells");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    bash
    zsh

    ----- stderr -----
    ");
}
