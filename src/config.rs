use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

/// Marker sequences translation tools leave behind in garbled text,
/// e.g. `{2d?}`.
pub const DEFAULT_SUSPICIOUS_PATTERNS: &[&str] = &[r"\{[^{}]{1,4}\?\}"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Files, directories or glob patterns searched for catalogs.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Contexts whose messages are skipped by every rule.
    #[serde(default)]
    pub ignore_contexts: Vec<String>,
    #[serde(default = "default_suspicious_patterns")]
    pub suspicious_patterns: Vec<String>,
    /// Numerus form counts for languages without a built-in plural rule,
    /// or overriding one (`{"eo": 2}`).
    #[serde(default)]
    pub plural_forms: BTreeMap<String, usize>,
}

fn default_includes() -> Vec<String> {
    vec!["nls".to_string()]
}

fn default_suspicious_patterns() -> Vec<String> {
    DEFAULT_SUSPICIOUS_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_contexts: Vec::new(),
            suspicious_patterns: default_suspicious_patterns(),
            plural_forms: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`/`includes`,
    /// invalid regexes in `suspiciousPatterns`, or a zero plural form count.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.suspicious_patterns {
            Regex::new(pattern).with_context(|| {
                format!("Invalid regex in 'suspiciousPatterns': \"{}\"", pattern)
            })?;
        }

        for (language, forms) in &self.plural_forms {
            if *forms == 0 {
                bail!("Plural form count for '{}' must be at least 1", language);
            }
        }

        Ok(())
    }

    /// Compiled `suspiciousPatterns`. Call after `validate`.
    pub fn suspicious_regexes(&self) -> Result<Vec<Regex>> {
        self.suspicious_patterns
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("Invalid regex: \"{}\"", p)))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
