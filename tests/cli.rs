use assert_cmd::Command;
use predicates::prelude::*;

fn rasterpad_cmd() -> Command {
    Command::cargo_bin("rasterpad").expect("binary exists")
}

#[test]
fn rasterpad_help_prints_usage() {
    rasterpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Raster drawing pad for Wayland desktops",
        ))
        .stdout(predicate::str::contains("--backing"));
}

#[test]
fn version_mentions_binary_name() {
    rasterpad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rasterpad"));
}

#[test]
fn invalid_backing_is_rejected() {
    rasterpad_cmd()
        .args(["--backing", "vector"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown backing 'vector'"));
}

#[test]
fn invalid_color_is_rejected() {
    rasterpad_cmd()
        .args(["--color", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color"));
}

#[test]
fn requires_wayland_env() {
    rasterpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--tool", "circle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn schema_dump_lists_config_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drawing\""))
        .stdout(predicate::str::contains("\"keybindings\""));
}
