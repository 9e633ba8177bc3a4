//! Plural rules: how many numerus forms a language uses and which form a
//! count selects.
//!
//! The table follows the numerus rules Qt Linguist ships for each language.

use super::model::split_locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Japanese, Korean, Turkish, ...).
    Single,
    /// `n == 1 ? 0 : 1` (English, Bulgarian, German, ...).
    OneOther,
    /// `n <= 1 ? 0 : 1` (French, Brazilian Portuguese).
    ZeroOneOther,
    /// Russian, Ukrainian, Croatian, Serbian, Bosnian.
    Slavic,
    /// Czech, Slovak: 1 / 2-4 / other.
    Czech,
    Polish,
    Slovenian,
    Lithuanian,
    Arabic,
    /// Form count from configuration for a language without a built-in rule.
    /// Selects the first form for 1 and the last form otherwise.
    Custom { forms: usize },
}

impl PluralRule {
    /// Rule for a locale such as `bg_BG`, `pt_BR` or `ko`.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let (language, territory) = split_locale(locale);
        let language = language.to_ascii_lowercase();
        let territory = territory.map(str::to_ascii_uppercase);

        if language == "pt" && territory.as_deref() == Some("BR") {
            return Some(Self::ZeroOneOther);
        }

        let rule = match language.as_str() {
            "bg" | "en" | "de" | "it" | "es" | "ca" | "nl" | "sv" | "da" | "nb" | "nn" | "no"
            | "el" | "fi" | "et" | "pt" | "eu" | "gl" | "he" | "ka" => Self::OneOther,
            "fr" | "hy" | "br" | "fil" => Self::ZeroOneOther,
            "ja" | "zh" | "ko" | "id" | "ms" | "fa" | "tr" | "hu" | "vi" | "th" => {
                Self::Single
            }
            "ru" | "uk" | "be" | "hr" | "sr" | "bs" => Self::Slavic,
            "cs" | "sk" => Self::Czech,
            "pl" => Self::Polish,
            "sl" => Self::Slovenian,
            "lt" => Self::Lithuanian,
            "ar" => Self::Arabic,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of numerus forms a translation must carry.
    pub fn forms(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::OneOther | Self::ZeroOneOther => 2,
            Self::Slavic | Self::Czech | Self::Polish | Self::Lithuanian => 3,
            Self::Slovenian => 4,
            Self::Arabic => 6,
            Self::Custom { forms } => (*forms).max(1),
        }
    }

    /// Index of the numerus form used for `n`.
    pub fn select(&self, n: u64) -> usize {
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            Self::Single => 0,
            Self::OneOther => usize::from(n != 1),
            Self::ZeroOneOther => usize::from(n > 1),
            Self::Slavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
            Self::Custom { forms } => {
                if n == 1 {
                    0
                } else {
                    forms.saturating_sub(1)
                }
            }
        }
    }
}
