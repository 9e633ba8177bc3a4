//! Checks against the shipped Bulgarian Qt catalog.

use std::{fs, path::PathBuf};

use pretty_assertions::assert_eq;
use tscat::{
    catalog::{
        CatalogStats, FallbackReason, LookupOutcome, PluralRule, catalog_to_string,
        parse_catalog_file, parse_catalog_str,
    },
    core::CheckContext,
    issues::{Issue, Rule, Severity},
    rules::run_rules,
};

fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("nls")
        .join("qt_bg.ts")
}

fn load() -> tscat::catalog::Catalog {
    parse_catalog_file(&catalog_path()).unwrap()
}

fn check_issues() -> Vec<Issue> {
    let ctx = CheckContext::load(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).as_path(),
        &[catalog_path()],
        false,
    )
    .unwrap();
    run_rules(&ctx, &[])
}

#[test]
fn test_header() {
    let catalog = load();
    assert_eq!(catalog.version.as_deref(), Some("2.1"));
    assert_eq!(catalog.language.as_deref(), Some("bg_BG"));
    assert_eq!(catalog.source_language, None);
}

#[test]
fn test_lookup_finished_entry() {
    let lookup = load().translate("QMessageBox", "Show Details...", None);
    assert_eq!(lookup.text, "Подробности…");
    assert_eq!(lookup.outcome, LookupOutcome::Translated);
}

#[test]
fn test_lookup_keeps_accelerator() {
    let lookup = load().translate("QColorDialog", "&Red:", None);
    assert_eq!(lookup.text, "&Червено:");
    assert_eq!(lookup.outcome, LookupOutcome::Translated);
}

#[test]
fn test_lookup_unfinished_falls_back_to_source() {
    let lookup = load().translate("QSslSocket", "Internal error", None);
    assert_eq!(lookup.text, "Internal error");
    assert_eq!(lookup.fallback_reason(), Some(FallbackReason::Unfinished));
}

#[test]
fn test_numerus_lookup_falls_back_with_count() {
    let source = "announced %n section(s), each %1 byte(s), exceed file size";
    let catalog = load();

    let one = catalog.translate_plural("QLibrary", source, None, 1, PluralRule::OneOther);
    assert_eq!(
        one.text,
        "announced 1 section(s), each %1 byte(s), exceed file size"
    );
    assert_eq!(one.fallback_reason(), Some(FallbackReason::Unfinished));

    let many = catalog.translate_plural("QLibrary", source, None, 4, PluralRule::OneOther);
    assert_eq!(
        many.text,
        "announced 4 section(s), each %1 byte(s), exceed file size"
    );
}

#[test]
fn test_plural_rule_for_catalog_language() {
    assert_eq!(PluralRule::for_locale("bg_BG"), Some(PluralRule::OneOther));
}

#[test]
fn test_source_lines() {
    let catalog = load();
    let line_of = |context: &str, source: &str| {
        catalog
            .messages()
            .find(|(ctx, m)| *ctx == context && m.source == source)
            .map(|(_, m)| m.line)
    };

    assert_eq!(line_of("QMessageBox", "Show Details..."), Some(2552));
    assert_eq!(line_of("QColorDialog", "&Red:"), Some(312));
    assert_eq!(line_of("QSslSocket", "Internal error"), Some(6902));
    assert_eq!(
        line_of(
            "QLibrary",
            "announced %n section(s), each %1 byte(s), exceed file size"
        ),
        Some(2249)
    );
}

#[test]
fn test_round_trip_is_byte_identical() {
    let content = fs::read_to_string(catalog_path()).unwrap();
    let catalog = parse_catalog_str(&content, "nls/qt_bg.ts").unwrap();
    assert!(catalog_to_string(&catalog) == content);
}

#[test]
fn test_reparse_preserves_entries() {
    let catalog = load();
    let reparsed = parse_catalog_str(&catalog_to_string(&catalog), "nls/qt_bg.ts").unwrap();

    let entries = |c: &tscat::catalog::Catalog| {
        c.messages()
            .map(|(ctx, m)| {
                (
                    ctx.to_string(),
                    m.source.clone(),
                    m.comment.clone(),
                    m.translation.clone(),
                )
            })
            .collect::<Vec<_>>()
    };
    assert!(entries(&catalog) == entries(&reparsed));
}

#[test]
fn test_stats() {
    let stats = CatalogStats::from_catalog(&load());
    assert_eq!(stats.contexts, 123);
    assert_eq!(stats.messages, 1775);
    assert_eq!(stats.finished, 1453);
    assert_eq!(stats.unfinished, 322);
    assert_eq!(stats.retired, 0);
    assert_eq!(format!("{:.1}", stats.completion()), "81.9");
}

#[test]
fn test_catalog_has_no_errors() {
    let issues = check_issues();
    let errors: Vec<&Issue> = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .collect();
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_warnings_per_rule() {
    let issues = check_issues();
    let count = |rule: Rule| issues.iter().filter(|i| i.rule() == rule).count();

    assert_eq!(count(Rule::Unfinished), 322);
    assert_eq!(count(Rule::SuspiciousText), 1);
    assert_eq!(count(Rule::NumerusForms), 2);
    assert_eq!(count(Rule::DuplicateKey), 0);
    assert_eq!(count(Rule::PlaceholderMismatch), 0);
    assert_eq!(count(Rule::LanguageMismatch), 0);
    assert_eq!(issues.len(), 325);
}

#[test]
fn test_unfinished_numerus_entry_is_flagged() {
    let issues = check_issues();
    let numerus: Vec<&Issue> = issues
        .iter()
        .filter(|i| i.rule() == Rule::NumerusForms)
        .collect();

    assert_eq!(numerus.len(), 2);
    for issue in numerus {
        assert_eq!(issue.severity(), Severity::Warning);
        let Issue::NumerusForms(issue) = issue else {
            unreachable!()
        };
        assert_eq!(issue.context.context_name, "QLibrary");
        assert_eq!(issue.context.line(), 2249);
    }
}

#[test]
fn test_garbled_direct2d_entry_is_flagged() {
    let issues = check_issues();
    let suspicious = issues
        .iter()
        .find_map(|i| match i {
            Issue::SuspiciousText(issue) => Some(issue),
            _ => None,
        })
        .unwrap();
    assert_eq!(suspicious.context.context_name, "QWindowsDirect2DIntegration");
    assert!(suspicious.matches.iter().any(|m| m == "{2d?}"));
}
