//! Qt positional placeholders: `%1`..`%99`, their localized `%L1` forms,
//! and the numerus count `%n` / `%Ln`.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(L?)([1-9][0-9]?|n)").unwrap());

/// The set of arguments referenced by `text`, normalized without the `L`
/// flag: `"%L1 of %2 (%n)"` gives `{"%1", "%2", "%n"}`.
pub fn placeholder_set(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| format!("%{}", &caps[2]))
        .collect()
}

/// Positional placeholders only (`%n` excluded).
pub fn numbered_placeholder_set(text: &str) -> BTreeSet<String> {
    let mut set = placeholder_set(text);
    set.remove("%n");
    set
}

/// Replace `%1`.. with `args[0]`.. Placeholders without a matching
/// argument are left untouched.
pub fn substitute(text: &str, args: &[&str]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[2];
            token
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index - 1))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Replace `%n` and `%Ln` with the count.
pub fn substitute_count(text: &str, count: u64) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            if &caps[2] == "n" {
                count.to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
