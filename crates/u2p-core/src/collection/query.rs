//! Query-string parsing: ordered pairs, duplicates preserved.

use super::item::QueryParam;

/// Splits a raw query string into ordered key/value pairs.
///
/// `None` or an empty string yields an empty list. Each `&`-separated pair
/// splits on its first `=`; a pair with no `=` keeps `value == None`.
/// Duplicate keys stay as separate entries in input order (no merging).
pub fn parse_query(raw: Option<&str>) -> Vec<QueryParam> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Vec::new(),
    };

    raw.split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => QueryParam {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => QueryParam {
                key: pair.to_string(),
                value: None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: Option<&str>) -> QueryParam {
        QueryParam {
            key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn absent_or_empty_is_empty() {
        assert!(parse_query(None).is_empty());
        assert!(parse_query(Some("")).is_empty());
    }

    #[test]
    fn ordered_pairs() {
        assert_eq!(
            parse_query(Some("a=1&b=2")),
            vec![pair("a", Some("1")), pair("b", Some("2"))]
        );
    }

    #[test]
    fn duplicate_keys_kept() {
        assert_eq!(
            parse_query(Some("a=1&a=2")),
            vec![pair("a", Some("1")), pair("a", Some("2"))]
        );
    }

    #[test]
    fn pair_without_equals_has_no_value() {
        assert_eq!(
            parse_query(Some("flag&x=1")),
            vec![pair("flag", None), pair("x", Some("1"))]
        );
    }

    #[test]
    fn empty_value_is_not_absent() {
        assert_eq!(parse_query(Some("a=")), vec![pair("a", Some(""))]);
    }

    #[test]
    fn value_may_contain_equals() {
        // Only the first `=` separates key from value.
        assert_eq!(
            parse_query(Some("t=a=b")),
            vec![pair("t", Some("a=b"))]
        );
    }
}
