use serde::Serialize;

use super::model::{Catalog, TranslationStatus};

/// Completion counts for one catalog. Retired entries are counted
/// separately and left out of the completion ratio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
    pub numerus: usize,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut stats = Self {
            contexts: catalog.contexts().len(),
            ..Default::default()
        };
        for (_, message) in catalog.messages() {
            stats.messages += 1;
            if message.numerus {
                stats.numerus += 1;
            }
            match message.status() {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => stats.retired += 1,
            }
        }
        stats
    }

    /// Finished share of active entries, in percent.
    pub fn completion(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}
