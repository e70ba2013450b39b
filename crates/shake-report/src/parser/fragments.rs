//! Decoding of the FRAGS column (`offset:length,offset:length,...`).

use super::schema::Fragment;
use crate::utils::config::{FRAGMENT_PAIR_SEPARATOR, FRAGMENT_SEPARATOR};

/// Parse a fragment list into fragments, preserving order
///
/// **Public** - used by the record parser for 9-column reports
///
/// An empty field is a file with no listed fragments.
///
/// # Errors
/// A description of the first bad token; the caller turns it into a
/// `MalformedFragmentList` entry.
pub fn parse_fragment_list(field: &str) -> Result<Vec<Fragment>, String> {
    if field.is_empty() {
        return Ok(Vec::new());
    }

    field
        .split(FRAGMENT_SEPARATOR)
        .enumerate()
        .map(|(index, token)| {
            parse_fragment(token).map_err(|e| format!("fragment {}: {}", index + 1, e))
        })
        .collect()
}

/// Parse a single `offset:length` token
///
/// **Private** - internal helper for parse_fragment_list
fn parse_fragment(token: &str) -> Result<Fragment, String> {
    let mut parts = token.split(FRAGMENT_PAIR_SEPARATOR);
    let (Some(offset), Some(length), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected offset:length, found '{}'", token));
    };

    let offset = offset
        .parse::<u64>()
        .map_err(|e| format!("invalid offset '{}': {}", offset, e))?;
    let length = length
        .parse::<u64>()
        .map_err(|e| format!("invalid length '{}': {}", length, e))?;

    if length == 0 {
        return Err(format!("zero-length fragment at offset {}", offset));
    }

    Ok(Fragment::new(offset, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_in_order() {
        let frags = parse_fragment_list("120:4,200:1,512:16").unwrap();
        assert_eq!(
            frags,
            vec![
                Fragment::new(120, 4),
                Fragment::new(200, 1),
                Fragment::new(512, 16)
            ]
        );
    }

    #[test]
    fn test_empty_field() {
        assert!(parse_fragment_list("").unwrap().is_empty());
    }

    #[test]
    fn test_single_fragment() {
        assert_eq!(parse_fragment_list("0:8").unwrap(), vec![Fragment::new(0, 8)]);
    }

    #[test]
    fn test_rejects_bad_tokens() {
        for bad in [
            "10", "10:5:3", "a:5", "10:b", "10:5,", ",10:5", "-1:5", "10:-5", "10:0", " 10:5",
        ] {
            assert!(parse_fragment_list(bad).is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn test_error_names_the_token() {
        let err = parse_fragment_list("1:1,oops").unwrap_err();
        assert!(err.contains("fragment 2"));
        assert!(err.contains("oops"));
    }
}
