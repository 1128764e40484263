use std::fs;
use std::process::{Command, Output};

const SPEC: &str = r#"
[[switch]]
short = "A"
long = "a-switch"
nargs = "+"
allow_duplicates = true

[[switch]]
short = "B"
nargs = 1
transform = "uppercase"

[[positional]]
name = "X"
"#;

fn run_spanarg(spec: &str, tokens: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("spec.toml");
    fs::write(&spec_path, spec).unwrap();

    let mut args = vec![
        "--spec".to_string(),
        spec_path.to_string_lossy().to_string(),
        "--format".to_string(),
        "lines".to_string(),
        "--".to_string(),
    ];
    args.extend(tokens.iter().map(|t| t.to_string()));

    Command::new(env!("CARGO_BIN_EXE_spanarg"))
        .args(&args)
        .output()
        .unwrap()
}

#[test]
fn prints_bindings_as_lines() {
    let out = run_spanarg(
        SPEC,
        &["11", "-A", "1", "2", "--a-switch", "3", "-B", "a", "b", "--", "-A"],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout.contains("a-switch=1 2 3\n"), "stdout was: {stdout}");
    assert!(stdout.contains("B=A\n"), "stdout was: {stdout}");
    assert!(stdout.contains("X=11\n"), "stdout was: {stdout}");
    assert!(stdout.contains("1=b\n"), "stdout was: {stdout}");
    assert!(stdout.contains("2=-A\n"), "stdout was: {stdout}");
}

#[test]
fn reports_parse_errors_with_exit_code_one() {
    let out = run_spanarg(SPEC, &["11", "-B", "x", "-B", "y"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("más de una vez"), "stderr was: {stderr}");
}

#[test]
fn reports_missing_spec_file() {
    let out = Command::new(env!("CARGO_BIN_EXE_spanarg"))
        .args(["--spec", "/nonexistent/spanarg/spec.toml", "--", "x"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("No se encontró el archivo"), "stderr was: {stderr}");
}
