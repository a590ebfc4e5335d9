//! Query-string decoding.

use court_db::query::QueryParams;

/// Split and percent-decode `a=1&b=two+words`. `+` decodes to a space, keys
/// without `=` get an empty value, and pairs that fail to decode are skipped.
/// Later duplicates win.
#[must_use]
pub fn parse(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

/// Split a request target into path and query.
#[must_use]
pub fn split_target(target: &str) -> (&str, &str) {
    target.split_once('?').unwrap_or((target, ""))
}
