//! Exit code integration tests for the `oc-dbus-match` binary.
//!
//! The binary's contract with callers:
//!
//! | Code | Name      | Description                       |
//! |------|-----------|-----------------------------------|
//! |  0   | Ok        | Rule accepted                     |
//! |  1   | Syntax    | Usage error or validation failure |
//! |  2   | EmptyRule | The rule string was empty         |

use assert_cmd::Command;

fn oc_dbus_match() -> Command {
    Command::cargo_bin("oc-dbus-match").expect("binary builds")
}

#[test]
fn accepted_rule_exits_zero() {
    oc_dbus_match()
        .arg("type='method_call',member='Frob'")
        .assert()
        .success();
}

#[test]
fn missing_operand_exits_one() {
    oc_dbus_match().assert().code(1);
}

#[test]
fn surplus_operand_exits_one() {
    oc_dbus_match()
        .args(["type='signal'", "stray"])
        .assert()
        .code(1);
}

#[test]
fn empty_rule_exits_two() {
    oc_dbus_match().arg("").assert().code(2);
}

#[test]
fn validation_failures_exit_one() {
    let cases = [
        "bogus='x'",
        "type='bogus'",
        "arg64='x'",
        "path='relative'",
        "member=",
        "type='signal',,member='Frob'",
    ];

    for rule in cases {
        oc_dbus_match().arg(rule).assert().code(1);
    }
}
