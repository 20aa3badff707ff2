/// Prune fragment (#hash) from URL text.
/// Returns (`text_without_fragment`, `fragment_without_hash`).
/// Optimization: uses SIMD-accelerated memchr for fast '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from URL text.
/// Returns (`text_without_query`, `query_without_question_mark`).
/// Everything after the first '?' counts as the query, further '?' included.
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_fragment() {
        assert_eq!(prune_fragment("https://a.dev/p#/page"), ("https://a.dev/p", Some("/page")));
        assert_eq!(prune_fragment("https://a.dev/p"), ("https://a.dev/p", None));
        assert_eq!(prune_fragment("#x"), ("", Some("x")));
    }

    #[test]
    fn test_prune_query() {
        assert_eq!(prune_query("/page?a=1&b=2"), ("/page", Some("a=1&b=2")));
        assert_eq!(prune_query("/page"), ("/page", None));
        // Only the first '?' delimits; the rest belongs to the query
        assert_eq!(prune_query("/page?a=1?b=2"), ("/page", Some("a=1?b=2")));
        assert_eq!(prune_query("?"), ("", Some("")));
    }
}
