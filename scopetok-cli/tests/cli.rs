use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SOURCE: &str = "package main\n\nfunc main() {\n\tx := 1\n}\n";

fn cursor_after(needle: &str) -> String {
    (SOURCE.find(needle).expect("needle present") + needle.len()).to_string()
}

fn temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("config to be written");
    file
}

#[test]
fn tokenizer_prints_the_declaration_window() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.arg("--pos").arg(cursor_after("x := 1")).write_stdin(SOURCE);

    cmd.assert()
        .success()
        .stdout("[\"func\", ID_S, \"(\", \")\", \"{\", ID_S, \":=\", ID_LIT_INT]\n");
}

#[test]
fn tokenizer_block_granularity_and_full_names() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.args(["--granularity", "block", "--full", "--pos"])
        .arg(cursor_after("x := 1"))
        .write_stdin(SOURCE);

    cmd.assert()
        .success()
        .stdout("[ID_S, \"x\", \":=\", ID_LIT_INT]\n");
}

#[test]
fn tokenizer_json_output() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.args(["--format", "json", "--granularity", "block", "--pos"])
        .arg(cursor_after("x := 1"))
        .write_stdin(SOURCE);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[\"ID_S\",").and(predicate::str::ends_with("]\n")));
}

#[test]
fn tokenizer_idents() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.arg("--idents").write_stdin("package p\nfunc f(a, b int) { a = b + a; return nil }\n");

    cmd.assert().success().stdout("p,f,a,b,int\n");
}

#[test]
fn tokenizer_falls_back_on_broken_documents() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.args(["--pos", "8"]).write_stdin("if x := ");

    cmd.assert().success().stdout("[\"if\", ID_S, \":=\"]\n");
}

#[test]
fn tokenizer_clamps_negative_positions() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.args(["--pos", "-5"]).write_stdin(SOURCE);

    cmd.assert().success().stdout("[]\n");
}

#[test]
fn configuration_file_is_layered_over_defaults() {
    let config = temp_config("[scope]\ngranularity = \"block\"\n");
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.arg("--config")
        .arg(config.path())
        .arg("--pos")
        .arg(cursor_after("x := 1"))
        .write_stdin(SOURCE);

    cmd.assert().success().stdout("[ID_S, \":=\", ID_LIT_INT]\n");
}

#[test]
fn user_configuration_is_read_from_home() {
    let home = tempfile::tempdir().expect("temp dir");
    let dir = home.path().join(".config").join("scopetok");
    std::fs::create_dir_all(&dir).expect("config dir");
    std::fs::write(dir.join("config.toml"), "[output]\nmode = \"full\"\n").expect("user config");

    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.env("HOME", home.path())
        .args(["--granularity", "block", "--pos"])
        .arg(cursor_after("x := 1"))
        .write_stdin(SOURCE);

    cmd.assert().success().stdout("[ID_S, \"x\", \":=\", ID_LIT_INT]\n");
}

#[test]
fn configuration_flag_overrides_user_configuration() {
    let home = tempfile::tempdir().expect("temp dir");
    let dir = home.path().join(".config").join("scopetok");
    std::fs::create_dir_all(&dir).expect("config dir");
    std::fs::write(dir.join("config.toml"), "[scope]\ngranularity = \"block\"\n").expect("user config");
    let config = temp_config("[scope]\ngranularity = \"declaration\"\n");

    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.env("HOME", home.path())
        .arg("--config")
        .arg(config.path())
        .arg("--pos")
        .arg(cursor_after("x := 1"))
        .write_stdin(SOURCE);

    cmd.assert()
        .success()
        .stdout("[\"func\", ID_S, \"(\", \")\", \"{\", ID_S, \":=\", ID_LIT_INT]\n");
}

#[test]
fn missing_configuration_is_reported_on_stdout() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.args(["--config", "/nonexistent/scopetok.toml"]).write_stdin(SOURCE);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("!ERR: invalid configuration"));
}

#[test]
fn debug_logs_go_to_stderr() {
    let mut cmd = cargo_bin_cmd!("tokenizer");
    cmd.args(["--log-level", "debug", "--pos", "3"]).write_stdin(SOURCE);

    cmd.assert()
        .success()
        .stdout("[ID_S]\n")
        .stderr(predicate::str::contains("debug:"));
}

#[test]
fn suggester_prints_static_suggestions() {
    let mut cmd = cargo_bin_cmd!("suggester");
    cmd.arg("--pos").arg(cursor_after("x := 1")).write_stdin(SOURCE);

    cmd.assert().success().stdout("if,for");
}

#[test]
fn suggester_reads_suggestions_from_configuration() {
    let config = temp_config("[suggester]\nstatic_suggestions = [\"return\", \"defer\", \"go\"]\n");
    let mut cmd = cargo_bin_cmd!("suggester");
    cmd.arg("--config").arg(config.path()).write_stdin(SOURCE);

    cmd.assert().success().stdout("return,defer,go");
}
