use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_CATALOG, CliTest, run};

const NUMERUS_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="bg_BG">
<context>
    <name>QFileSystemModel</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
            <numerusform>%n файла</numerusform>
        </translation>
    </message>
    <message>
        <source>Internal error</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Open</source>
        <comment>verb</comment>
        <translation>Отваряне</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_lookup_translated() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    assert_cmd_snapshot!(test.lookup_command("QMessageBox", "Show Details..."), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ./nls/qt_bg.ts (bg_BG): Подробности…

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_substitutes_arguments() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    let (code, stdout, _) = run({
        let mut cmd = test.lookup_command("QMessageBox", "Hide %1");
        cmd.args(["--arg", "Finder"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "./nls/qt_bg.ts (bg_BG): Скриване на Finder\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_catalog(NUMERUS_CATALOG)?;

    let (code, stdout, _) = run(test.lookup_command("QFileSystemModel", "Internal error"))?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "./nls/qt_bg.ts (bg_BG): Internal error\n  = note: fallback to source (translation unfinished)\n"
    );

    let (_, stdout, _) = run(test.lookup_command("QFileSystemModel", "Missing"))?;
    assert!(stdout.contains("Missing\n  = note: fallback to source (no entry)"));

    Ok(())
}

#[test]
fn test_lookup_comment_disambiguation() -> Result<()> {
    let test = CliTest::with_catalog(NUMERUS_CATALOG)?;

    let (_, with_comment, _) = run({
        let mut cmd = test.lookup_command("QFileSystemModel", "Open");
        cmd.args(["--comment", "verb"]);
        cmd
    })?;
    assert_eq!(with_comment, "./nls/qt_bg.ts (bg_BG): Отваряне\n");

    // The comment is part of the key.
    let (_, without_comment, _) = run(test.lookup_command("QFileSystemModel", "Open"))?;
    assert_eq!(
        without_comment,
        "./nls/qt_bg.ts (bg_BG): Open\n  = note: fallback to source (no entry)\n"
    );

    // An unknown comment falls back to the comment-less entry.
    let clean = CliTest::with_catalog(CLEAN_CATALOG)?;
    let (_, fallback, _) = run({
        let mut cmd = clean.lookup_command("QMessageBox", "Show Details...");
        cmd.args(["--comment", "tooltip"]);
        cmd
    })?;
    assert_eq!(fallback, "./nls/qt_bg.ts (bg_BG): Подробности…\n");

    Ok(())
}

#[test]
fn test_lookup_numerus() -> Result<()> {
    let test = CliTest::with_catalog(NUMERUS_CATALOG)?;

    let (code, one, _) = run({
        let mut cmd = test.lookup_command("QFileSystemModel", "%n file(s)");
        cmd.args(["-n", "1"]);
        cmd
    })?;
    assert_eq!(code, 0);
    assert_eq!(one, "./nls/qt_bg.ts (bg_BG): 1 файл\n");

    let (_, many, _) = run({
        let mut cmd = test.lookup_command("QFileSystemModel", "%n file(s)");
        cmd.args(["--count", "12"]);
        cmd
    })?;
    assert_eq!(many, "./nls/qt_bg.ts (bg_BG): 12 файла\n");

    Ok(())
}

#[test]
fn test_lookup_numerus_without_plural_rule_is_skipped() -> Result<()> {
    let test = CliTest::with_catalog(&NUMERUS_CATALOG.replace("bg_BG", "xx"))?;

    let (code, stdout, _) = run({
        let mut cmd = test.lookup_command("QFileSystemModel", "%n file(s)");
        cmd.args(["-n", "3"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "./nls/qt_bg.ts: skipped (no plural rule for its language)\n"
    );

    // A configured form count makes the language usable.
    test.write_file(".tscatrc.json", r#"{ "pluralForms": { "xx": 2 } }"#)?;
    let (_, stdout, _) = run({
        let mut cmd = test.lookup_command("QFileSystemModel", "%n file(s)");
        cmd.args(["-n", "3"]);
        cmd
    })?;
    assert_eq!(stdout, "./nls/qt_bg.ts (xx): 3 файла\n");

    Ok(())
}

#[test]
fn test_lookup_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.lookup_command("QMessageBox", "OK"))?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "warning: no catalogs found\n");

    Ok(())
}

#[test]
fn test_lookup_requires_context() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    let (code, _, stderr) = run({
        let mut cmd = test.command();
        cmd.args(["lookup", "OK"]);
        cmd
    })?;

    assert_eq!(code, 2);
    assert!(stderr.contains("--context"));

    Ok(())
}
