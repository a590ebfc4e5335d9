use court_config::CourtConfig;

use crate::cli::GlobalFlags;

/// Page size for team queries: `--limit` first, then `general.default_limit`.
/// Zero is passed through; the query builder treats it as "no rows".
#[must_use]
pub fn page_limit(flags: &GlobalFlags, config: &CourtConfig) -> u32 {
    flags.limit.unwrap_or(config.general.default_limit)
}
