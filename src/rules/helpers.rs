use rayon::prelude::*;

use crate::{
    catalog::Catalog,
    core::{CheckContext, MessageContext},
};

/// Run `check` over every catalog in parallel. Issues whose message sits in
/// an ignored context are dropped.
pub fn check_catalogs<T, F, C>(ctx: &CheckContext, check: F, context_of: C) -> Vec<T>
where
    T: Send,
    F: Fn(&Catalog) -> Vec<T> + Sync,
    C: Fn(&T) -> &MessageContext + Sync,
{
    let per_catalog: Vec<Vec<T>> = ctx
        .catalogs()
        .par_iter()
        .map(|catalog| {
            check(catalog)
                .into_iter()
                .filter(|issue| !ctx.is_ignored_context(&context_of(issue).context_name))
                .collect()
        })
        .collect();
    per_catalog.into_iter().flatten().collect()
}
