use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const HELLO: &str = r#"(module
    (import "env" "ugo_builtin_println" (func $println (param i32) (result i32)))
    (import "env" "ugo_builtin_exit" (func $exit (param i32) (result i32)))
    (func (export "main") (result i32)
        (drop (call $println (i32.const 1)))
        (drop (call $println (i32.const -2)))
        (drop (call $exit (i32.const 3)))
        (i32.const 0)))"#;

fn ugo_run(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ugo-run").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write_wasm(dir: &Path, name: &str, wat: &str) {
    let wasm = wat::parse_str(wat).unwrap();
    std::fs::write(dir.join(name), wasm).unwrap();
}

#[test]
fn runs_a_out_wasm_by_default() {
    let temp = TempDir::new().unwrap();
    write_wasm(temp.path(), "a.out.wasm", HELLO);

    ugo_run(temp.path())
        .assert()
        .success()
        .stdout("1\n-2\nexit: 3\n");
}

#[test]
fn runs_the_file_given_on_the_command_line() {
    let temp = TempDir::new().unwrap();
    write_wasm(temp.path(), "hello.wasm", HELLO);

    ugo_run(temp.path())
        .arg("hello.wasm")
        .assert()
        .success()
        .stdout("1\n-2\nexit: 3\n");
}

#[test]
fn invokes_a_different_export() {
    let temp = TempDir::new().unwrap();
    write_wasm(
        temp.path(),
        "a.out.wasm",
        r#"(module
            (import "env" "ugo_builtin_println" (func $println (param i32) (result i32)))
            (func (export "main") (result i32) (call $println (i32.const 1)))
            (func (export "other") (result i32) (call $println (i32.const 2))))"#,
    );

    ugo_run(temp.path())
        .arg("--invoke")
        .arg("other")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn missing_module_is_reported_on_stdout() {
    let temp = TempDir::new().unwrap();

    ugo_run(temp.path())
        .assert()
        .success()
        .stdout(contains("failed to run `./a.out.wasm`"))
        .stdout(contains("unable to read"));
}

#[test]
fn invalid_module_is_reported_on_stdout() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a.out.wasm"), b"not a module").unwrap();

    ugo_run(temp.path())
        .assert()
        .success()
        .stdout(contains("failed to run `./a.out.wasm`"));
}

#[test]
fn unresolved_imports_are_reported_on_stdout() {
    let temp = TempDir::new().unwrap();
    write_wasm(
        temp.path(),
        "a.out.wasm",
        r#"(module
            (import "env" "ugo_builtin_read" (func (result i32)))
            (func (export "main") (result i32) (i32.const 0)))"#,
    );

    ugo_run(temp.path())
        .assert()
        .success()
        .stdout(contains("failed to run `./a.out.wasm`"))
        .stdout(contains("ugo_builtin_read"));
}

#[test]
fn logs_go_to_stderr() {
    let temp = TempDir::new().unwrap();
    write_wasm(temp.path(), "a.out.wasm", HELLO);

    ugo_run(temp.path())
        .env("RUST_LOG", "ugo_runtime=debug")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("1\n-2\nexit: 3\n")
        .stderr(contains("Instantiated the module"));
}

#[test]
fn verbose_flag_enables_logging_without_rust_log() {
    let temp = TempDir::new().unwrap();
    write_wasm(temp.path(), "a.out.wasm", HELLO);

    ugo_run(temp.path())
        .arg("-v")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("1\n-2\nexit: 3\n")
        .stderr(contains("Read the module"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("ugo-run")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(format!("ugo-run {}", env!("CARGO_PKG_VERSION"))));
}
