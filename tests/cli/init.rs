use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CLEAN_CATALOG, CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!(["nls"]));
    assert_eq!(parsed["ignores"], serde_json::json!([]));
    assert_eq!(parsed["ignoreContexts"], serde_json::json!([]));
    assert!(
        parsed["suspiciousPatterns"].is_array(),
        "Config should have 'suspiciousPatterns' field"
    );
    assert!(
        parsed["pluralForms"].is_object(),
        "Config should have 'pluralForms' field"
    );

    assert!(
        content.contains("\n  \"includes\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tscatrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".tscatrc.json").exists());

    let content = test.read_file(".tscatrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .tscatrc.json already exists
    ");

    // Existing file is left alone.
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("nls/qt_bg.ts", CLEAN_CATALOG)?;

    let (code, stdout, stderr) = run(test.check_command())?;
    assert_eq!(
        code, 0,
        "Check command should work with initialized config. stderr: {}",
        stderr
    );
    assert!(stdout.contains("Checked 1 catalog"));

    Ok(())
}
