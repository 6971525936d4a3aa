use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("eiwomisa-bridge"))
}

#[test]
fn help_lists_the_bridge_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            contains("--port")
                .and(contains("--serial"))
                .and(contains("--baud"))
                .and(contains("--protocol")),
        );
}

#[test]
fn version_exits_zero() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("eiwomisa-bridge"));
}

#[test]
fn bad_argument_exits_one_with_a_hint() {
    cmd()
        .arg("--port")
        .arg("not-a-number")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Try 'eiwomisa-bridge --help'"));
}

#[test]
fn debug_and_silent_conflict() {
    cmd()
        .arg("--debug")
        .arg("--silent")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn unreachable_serial_device_is_fatal_after_the_retry() {
    // Ephemeral UDP port so parallel tests never collide; the open fails,
    // sleeps 5 seconds, fails again, and the process exits 1 before the
    // receive loop starts.
    cmd()
        .arg("-p")
        .arg("0")
        .arg("-s")
        .arg("/dev/nonexistent-ttyS99")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error:").and(contains("failed to open serial device")));
}
