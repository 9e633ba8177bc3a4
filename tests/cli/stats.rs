use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_CATALOG, CliTest, run};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;

    assert_cmd_snapshot!(test.command().arg("stats"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Catalog         Language  Contexts  Messages  Finished  Unfinished  Obsolete  Numerus    Done
    ./nls/qt_bg.ts  bg_BG            1         2         2           0         0        0  100.0%

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_stats_counts_unfinished_and_numerus() -> Result<()> {
    let test = CliTest::with_catalog(&CLEAN_CATALOG.replace(
        "</context>",
        r#"    <message numerus="yes">
        <source>%n file(s)</source>
        <translation type="unfinished">
            <numerusform></numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>"#,
    ))?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("stats");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.ends_with(
        "./nls/qt_bg.ts  bg_BG            1         3         2           1         0        1  66.7%\n"
    ));

    Ok(())
}

#[test]
fn test_stats_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_catalog(CLEAN_CATALOG)?;
    test.write_file("nls/qt_de.ts", "<TS version=\"2.1\" language=\"de\">\n<context>\n")?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("stats");
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("  --> ./nls/qt_de.ts\n"));
    assert!(stdout.contains("./nls/qt_bg.ts  bg_BG"));
    assert!(stderr.contains("1 catalog(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_stats_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("stats");
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "warning: no catalogs found\n");

    Ok(())
}
