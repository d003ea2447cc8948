use assert_cmd::Command;
use assert_fs::prelude::*;
use std::fs;

fn locator() -> Command {
    Command::cargo_bin("file_locator").unwrap()
}

#[test]
fn copy_mode_end_to_end() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("report.TXT").write_str("a").unwrap();
    temp.child("Report_old.txt").write_str("b").unwrap();
    temp.child("image.png").write_str("c").unwrap();

    let output = locator()
        .args(["--term", "report", "--mode", "copy", "--no-wait", "--base-dir"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total de arquivos encontrados: 2"), "{stdout}");
    assert!(stdout.contains("Log oculto salvo em:"));
    assert!(stdout.contains("Pasta de destino:"));
    assert!(!stdout.contains("Log visível"));
    assert_eq!(
        stdout.contains("não pôde ser marcada como oculta"),
        !cfg!(any(windows, target_os = "macos")),
        "the summary mentions a log folder left visible: {stdout}"
    );

    temp.child("report/report.TXT").assert("a");
    temp.child("report/Report_old.txt").assert("b");
    assert!(!temp.path().join("log.txt").exists());
    assert_eq!(fs::read_dir(temp.path().join("log")).unwrap().count(), 1);
}

#[test]
fn log_only_via_piped_menu_answer() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("notes.md").write_str("n").unwrap();

    let output = locator()
        .args(["--no-wait", "--base-dir"])
        .arg(temp.path())
        .write_stdin("NOTES\nwhat\n1\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Opção inválida!"), "{stdout}");
    assert!(stdout.contains("Log visível salvo em:"));
    assert!(!temp.path().join("NOTES").exists());
    let visible = fs::read_to_string(temp.path().join("log.txt")).unwrap();
    assert!(visible.contains("Termo buscado (ignore case): NOTES\n"));
    assert!(visible.contains("  • Nome: notes.md\n"));
}

#[test]
fn cancel_creates_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("report.txt").write_str("a").unwrap();

    let output = locator()
        .arg("--base-dir")
        .arg(temp.path())
        .write_stdin("report\nesc\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Operação cancelada pelo usuário."));

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["report.txt"]);
}

#[test]
fn waits_for_enter_after_summary() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = locator()
        .args(["--term", "zzz", "--mode", "log-only", "--base-dir"])
        .arg(temp.path())
        .write_stdin("\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total de arquivos encontrados: 0"));
    assert!(stdout.contains("Pressione ENTER para sair..."));
}

#[test]
fn missing_base_dir_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = locator()
        .args(["--term", "x", "--mode", "copy", "--no-wait", "--base-dir"])
        .arg(temp.path().join("missing"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Base directory is not usable"), "{stderr}");
    let user_lines: Vec<&str> = stderr.lines().filter(|l| l.starts_with("erro: ")).collect();
    assert_eq!(user_lines.len(), 1, "fatal error printed once: {stderr}");
    assert!(user_lines[0].contains("Base directory is not usable"), "{stderr}");
    assert!(!stderr.contains("Error:"), "{stderr}");
    assert!(!stderr.contains('\x1b'), "no color codes off a terminal: {stderr}");
    assert!(!temp.path().join("missing").exists());
}
