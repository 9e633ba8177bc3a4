use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CATALOG_PATH, CLEAN_CATALOG, CliTest, run};

fn catalog(contexts: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"bg_BG\">\n{}</TS>\n",
        contexts
    )
}

const FILE_DIALOG: &str = r#"<context>
    <name>QFileDialog</name>
    <message>
        <source>Open %1</source>
        <translation>Отваряне</translation>
    </message>
    <message>
        <source>Save</source>
        <translation type="unfinished"></translation>
    </message>
</context>
"#;

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_errors_fail_the_run() -> Result<()> {
    let test = CliTest::with_catalog(&catalog(FILE_DIALOG))?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"Open %1\"  placeholder-mismatch"));
    assert!(stdout.contains("  --> ./nls/qt_bg.ts:7:1"));
    assert!(stdout.contains("= note: in QFileDialog: missing %1"));
    assert!(stdout.contains("warning: \"Save\"  unfinished"));
    assert!(stdout.contains("  --> ./nls/qt_bg.ts:11:1"));
    assert!(stdout.contains("✘ 2 problems (1 error, 1 warning)"));

    // Issues are listed in file order.
    let error_at = stdout.find("placeholder-mismatch").unwrap();
    let warning_at = stdout.find("unfinished").unwrap();
    assert!(error_at < warning_at);

    Ok(())
}

#[test]
fn test_warnings_do_not_fail_the_run() -> Result<()> {
    let test = CliTest::with_catalog(&catalog(FILE_DIALOG))?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.arg("unfinished");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("placeholder-mismatch"));
    assert!(stdout.contains("= note: in QFileDialog: not translated"));
    assert!(stdout.contains("✘ 1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let test = CliTest::with_catalog(&catalog(FILE_DIALOG))?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.args(["duplicate-key", "empty-source"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_unknown_rule_is_rejected() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    let (code, _, stderr) = run({
        let mut cmd = test.check_command();
        cmd.arg("hardcoded");
        cmd
    })?;

    assert_eq!(code, 2);
    assert!(stderr.contains("invalid value 'hardcoded'"));

    Ok(())
}

#[test]
fn test_duplicate_key() -> Result<()> {
    let test = CliTest::with_catalog(&catalog(
        r#"<context>
    <name>QDialog</name>
    <message>
        <source>Close</source>
        <translation>Затваряне</translation>
    </message>
    <message>
        <source>Close</source>
        <translation>Затвори</translation>
    </message>
</context>
"#,
    ))?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"Close\"  duplicate-key"));
    assert!(stdout.contains("  --> ./nls/qt_bg.ts:11:1"));
    assert!(stdout.contains("in QDialog: first defined at line 7"));

    Ok(())
}

#[test]
fn test_numerus_form_count() -> Result<()> {
    let test = CliTest::with_catalog(&catalog(
        r#"<context>
    <name>QFileSystemModel</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
        </translation>
    </message>
</context>
"#,
    ))?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"%n file(s)\"  numerus-forms"));
    assert!(stdout.contains("expected 2 numerus forms, found 1"));

    Ok(())
}

#[test]
fn test_config_ignore_contexts() -> Result<()> {
    let test = CliTest::with_catalog(&catalog(FILE_DIALOG))?;
    test.write_file(".tscatrc.json", r#"{ "ignoreContexts": ["QFileDialog"] }"#)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("✓ Checked 1 catalog - no issues found"));

    Ok(())
}

#[test]
fn test_config_includes() -> Result<()> {
    let test = CliTest::with_file("translations/app_bg.ts", &catalog(FILE_DIALOG))?;
    test.write_file(CATALOG_PATH, CLEAN_CATALOG)?;
    test.write_file(".tscatrc.json", r#"{ "includes": ["translations"] }"#)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("./translations/app_bg.ts:7:1"));
    assert!(!stdout.contains("nls/"));

    Ok(())
}

#[test]
fn test_typescript_sources_are_not_catalogs() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;
    test.write_file("nls/index.ts", "export const language = 'bg';\n")?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog"));

    Ok(())
}

#[test]
fn test_explicit_catalog_argument() -> Result<()> {
    let test = CliTest::with_file("other/custom_bg.ts", &catalog(FILE_DIALOG))?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.args(["--catalog", "other/custom_bg.ts"]);
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.contains("--> other/custom_bg.ts:7:1"));

    Ok(())
}

#[test]
fn test_language_mismatch_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("nls/qt_de.ts", CLEAN_CATALOG)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("language-mismatch"));
    assert!(stdout.contains("  --> ./nls/qt_de.ts\n"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_catalog("<TS version=\"2.1\">\n<context>\n")?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("  --> ./nls/qt_bg.ts\n"));
    assert!(stderr.contains("1 catalog(s) could not be parsed (use -v for details)"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_internal_error() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;
    test.write_file(".tscatrc.json", r#"{ "suspiciousPatterns": ["("] }"#)?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("suspiciousPatterns"));

    Ok(())
}

#[test]
fn test_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    let (code, _, stderr) = run({
        let mut cmd = test.check_command();
        cmd.arg("-v");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stderr.contains("Note: No .tscatrc.json found, using default configuration"));

    Ok(())
}
