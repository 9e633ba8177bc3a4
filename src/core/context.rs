use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;
use regex::Regex;

use crate::{
    catalog::{
        Catalog, Lookup, PluralRule, model::split_locale, parse_catalog_file, scan_catalog_files,
    },
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    issues::ParseErrorIssue,
};

/// Everything a command needs to run: configuration, the catalogs found
/// on disk and the ones that failed to parse.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--root`, `--catalog`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    pub config: Config,

    /// Project root directory (config search start, include paths base).
    pub root_dir: PathBuf,

    /// Catalog files, discovered or given on the command line.
    pub files: BTreeSet<String>,

    pub verbose: bool,

    /// Successfully parsed catalogs, sorted by file path.
    catalogs: Vec<Catalog>,

    parse_errors: Vec<ParseErrorIssue>,

    /// Compiled `suspiciousPatterns`.
    suspicious_patterns: Vec<Regex>,

    ignore_contexts: HashSet<String>,
}

impl CheckContext {
    /// Create a context from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        Self::load(&root_dir, &common_args.catalogs, common_args.verbose)
    }

    /// Create a context rooted at `root_dir`. When `catalogs` is non-empty
    /// those files are used instead of scanning the configured includes.
    pub fn load(root_dir: &Path, catalogs: &[PathBuf], verbose: bool) -> Result<Self> {
        let config_result = load_config(root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let suspicious_patterns = config.suspicious_regexes()?;

        let files: BTreeSet<String> = if catalogs.is_empty() {
            let scan_result =
                scan_catalog_files(root_dir, &config.includes, &config.ignores, verbose);
            if scan_result.skipped_count > 0 {
                eprintln!(
                    "Warning: {} path(s) skipped due to access errors{}",
                    scan_result.skipped_count,
                    if verbose { "" } else { " (use -v for details)" }
                );
            }
            scan_result.files
        } else {
            catalogs
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect()
        };

        // Parallel reading and parsing; collection stays sequential so the
        // catalog order follows the sorted file set.
        let parse_results: Vec<_> = files
            .par_iter()
            .map(|file_path| (file_path.clone(), parse_catalog_file(Path::new(file_path))))
            .collect();

        let mut parsed = Vec::new();
        let mut parse_errors = Vec::new();
        for (file_path, result) in parse_results {
            match result {
                Ok(catalog) => parsed.push(catalog),
                Err(e) => {
                    if verbose {
                        eprintln!("Warning: {} - {:#}", file_path, e);
                    }
                    parse_errors.push(ParseErrorIssue {
                        file_path,
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        let ignore_contexts = config.ignore_contexts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            files,
            verbose,
            catalogs: parsed,
            parse_errors,
            suspicious_patterns,
            ignore_contexts,
        })
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Catalogs that could not be read or parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    pub fn suspicious_patterns(&self) -> &[Regex] {
        &self.suspicious_patterns
    }

    /// True if messages of this context are skipped by the rules.
    pub fn is_ignored_context(&self, context_name: &str) -> bool {
        self.ignore_contexts.contains(context_name)
    }

    /// Plural rule for a catalog's language, honouring `pluralForms`.
    pub fn plural_rule(&self, catalog: &Catalog) -> Option<PluralRule> {
        plural_rule_for(&self.config, catalog.language.as_deref()?)
    }

    /// Singular lookup, or numerus lookup when `count` is given. `None` when
    /// a count is given but the catalog's language has no plural rule.
    pub fn lookup(
        &self,
        catalog: &Catalog,
        context: &str,
        source: &str,
        comment: Option<&str>,
        count: Option<u64>,
    ) -> Option<Lookup> {
        match count {
            Some(n) => {
                let rule = self.plural_rule(catalog)?;
                Some(catalog.translate_plural(context, source, comment, n, rule))
            }
            None => Some(catalog.translate(context, source, comment)),
        }
    }
}

/// Built-in rule for `language`, replaced by a configured form count when
/// one is set for the full locale or its language part.
pub fn plural_rule_for(config: &Config, language: &str) -> Option<PluralRule> {
    let builtin = PluralRule::for_locale(language);
    let configured = config
        .plural_forms
        .get(language)
        .or_else(|| config.plural_forms.get(split_locale(language).0));

    match (configured, builtin) {
        (Some(&forms), Some(rule)) if rule.forms() == forms => Some(rule),
        (Some(&forms), _) => Some(PluralRule::Custom { forms }),
        (None, builtin) => builtin,
    }
}
