use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("gateway-factory"));

    cmd.assert().success().stdout(
        "Implement SHIFT4 logic\nImplement Wells Fargo logic\nImplement Protobase logic\n",
    );

    Ok(())
}

#[test]
fn test_cli_selected_kinds_in_given_order() {
    let mut cmd = Command::new(cargo_bin!("gateway-factory"));
    cmd.arg("protobase").arg("SHIFT4");

    cmd.assert()
        .success()
        .stdout("Implement Protobase logic\nImplement SHIFT4 logic\n");
}

#[test]
fn test_cli_without_falls_back_silently() {
    let mut cmd = Command::new(cargo_bin!("gateway-factory"));
    cmd.env_remove("RUST_LOG").arg("--without").arg("wellsfargo");

    cmd.assert()
        .success()
        .stdout("Implement SHIFT4 logic\nImplement Protobase logic\n")
        .stdout(predicate::str::contains("Wells Fargo").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_accepts_numeric_codes() {
    let mut cmd = Command::new(cargo_bin!("gateway-factory"));
    cmd.arg("3").arg("1");

    cmd.assert()
        .success()
        .stdout("Implement Wells Fargo logic\nImplement Protobase logic\n");
}

#[test]
fn test_cli_rejects_unknown_code() {
    let mut cmd = Command::new(cargo_bin!("gateway-factory"));
    cmd.arg("9");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown gateway code: 9"));
}

#[test]
fn test_cli_rejects_unknown_kind() {
    let mut cmd = Command::new(cargo_bin!("gateway-factory"));
    cmd.arg("stripe");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown gateway kind: stripe"));
}

#[test]
fn test_cli_wait_consumes_a_line() {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("gateway-factory"));
    cmd.arg("--wait").arg("shift4");

    cmd.write_stdin("\n")
        .assert()
        .success()
        .stdout("Implement SHIFT4 logic\n");
}
