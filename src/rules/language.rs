//! `language` attribute checked against the catalog's file name.

use std::path::Path;

use crate::{
    catalog::{Catalog, model::split_locale},
    core::CheckContext,
    issues::LanguageMismatchIssue,
};

pub fn check_language_issues(ctx: &CheckContext) -> Vec<LanguageMismatchIssue> {
    ctx.catalogs().iter().filter_map(check_language).collect()
}

/// Reports a missing `language` attribute, or one whose language code
/// differs from the locale in the file name (`qt_bg.ts` gives `bg`).
pub fn check_language(catalog: &Catalog) -> Option<LanguageMismatchIssue> {
    let expected = locale_from_file_name(&catalog.file_path);
    let declared = catalog.language.clone().filter(|l| !l.trim().is_empty());

    let mismatch = match (&declared, &expected) {
        (None, _) => true,
        (Some(declared), Some(expected)) => !same_language(declared, expected),
        (Some(_), None) => false,
    };

    mismatch.then(|| LanguageMismatchIssue {
        file_path: catalog.file_path.clone(),
        declared,
        expected,
    })
}

/// Locale part of a catalog file name: `qt_bg.ts` gives `bg`,
/// `qtbase_pt_BR.ts` gives `pt_BR`, `bg_BG.ts` gives `bg_BG`.
pub fn locale_from_file_name(path: &str) -> Option<String> {
    let stem = Path::new(path).file_stem()?.to_str()?;
    if looks_like_locale(stem) {
        return Some(stem.to_string());
    }
    let (_, rest) = stem.split_once('_')?;
    looks_like_locale(rest).then(|| rest.to_string())
}

fn looks_like_locale(candidate: &str) -> bool {
    let (language, territory) = split_locale(candidate);
    let language_ok =
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_lowercase());
    // Territories (`BG`, `419`) and scripts (`Latn`) start uppercase or with a digit.
    let territory_ok = territory.is_none_or(|t| {
        t.len() <= 4
            && t.chars().all(|c| c.is_ascii_alphanumeric())
            && t.starts_with(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit())
    });
    language_ok && territory_ok
}

fn same_language(a: &str, b: &str) -> bool {
    split_locale(a).0.eq_ignore_ascii_case(split_locale(b).0)
}
