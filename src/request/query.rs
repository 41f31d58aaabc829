//! Shared parser for the legacy `key=value&key=value` parameter format.

// crates.io
use percent_encoding::percent_decode_str;
// self
use crate::{_prelude::*, error::QueryParseError};

/// Parses a legacy ampersand-joined `key=value` list into a map.
///
/// Every legacy caller goes through this one routine so the decoding and duplicate policies
/// stay uniform:
///
/// - segments split on the first `=`; a segment without one fails, as does an empty key;
/// - keys and values are percent-decoded after splitting, with `+` decoding to a space;
///   stray `%` sequences that are not valid escapes pass through verbatim, but decoded bytes
///   must form valid UTF-8;
/// - a key repeated after decoding fails rather than silently keeping either value;
/// - empty segments produced by doubled or trailing `&` are skipped.
///
/// The parse is all-or-nothing: the first offending segment fails the whole input.
pub fn parse_key_value_list(input: &str) -> Result<HashMap<String, String>, QueryParseError> {
	let mut parameters = HashMap::new();

	for segment in input.split('&') {
		let segment = segment.trim();

		if segment.is_empty() {
			continue;
		}

		let Some((key, value)) = segment.split_once('=') else {
			return Err(QueryParseError::MissingDelimiter { segment: segment.to_owned() });
		};

		if key.is_empty() {
			return Err(QueryParseError::EmptyKey { segment: segment.to_owned() });
		}

		let key = decode_component(key, segment)?;
		let value = decode_component(value, segment)?;

		if parameters.contains_key(&key) {
			return Err(QueryParseError::DuplicateKey { key });
		}

		parameters.insert(key, value);
	}

	Ok(parameters)
}

fn decode_component(raw: &str, segment: &str) -> Result<String, QueryParseError> {
	let unplussed = raw.replace('+', " ");

	percent_decode_str(&unplussed)
		.decode_utf8()
		.map(|decoded| decoded.into_owned())
		.map_err(|_| QueryParseError::InvalidEncoding { segment: segment.to_owned() })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn entry(key: &str, value: &str) -> (String, String) {
		(key.to_owned(), value.to_owned())
	}

	#[test]
	fn parses_ampersand_joined_pairs() {
		let parsed = parse_key_value_list("a=1&b=2").expect("Well-formed input should parse.");

		assert_eq!(parsed, HashMap::from_iter([entry("a", "1"), entry("b", "2")]));
	}

	#[test]
	fn empty_input_yields_an_empty_map() {
		assert!(parse_key_value_list("").expect("Empty input should parse.").is_empty());
	}

	#[test]
	fn skips_empty_segments() {
		let parsed =
			parse_key_value_list("a=1&&b=2&").expect("Doubled separators should be tolerated.");

		assert_eq!(parsed.len(), 2);
	}

	#[test]
	fn preserves_equals_inside_values() {
		let parsed = parse_key_value_list("claims=a==b").expect("Values may contain `=`.");

		assert_eq!(parsed.get("claims").map(String::as_str), Some("a==b"));
	}

	#[test]
	fn rejects_segments_without_a_delimiter() {
		let err = parse_key_value_list("a")
			.expect_err("A segment without `=` should fail the whole parse.");

		assert_eq!(err, QueryParseError::MissingDelimiter { segment: "a".into() });
	}

	#[test]
	fn rejects_empty_keys() {
		let err = parse_key_value_list("=1").expect_err("An empty key should be rejected.");

		assert_eq!(err, QueryParseError::EmptyKey { segment: "=1".into() });
	}

	#[test]
	fn rejects_duplicate_keys() {
		let err = parse_key_value_list("a=1&a=2").expect_err("Repeated keys should be rejected.");

		assert_eq!(err, QueryParseError::DuplicateKey { key: "a".into() });
	}

	#[test]
	fn detects_duplicates_after_decoding() {
		let err = parse_key_value_list("%61=1&a=2")
			.expect_err("Keys that collide once decoded should be rejected.");

		assert_eq!(err, QueryParseError::DuplicateKey { key: "a".into() });
	}

	#[test]
	fn percent_decodes_keys_and_values() {
		let parsed = parse_key_value_list("name=John%20Doe&mode=read+write")
			.expect("Encoded input should parse.");

		assert_eq!(parsed.get("name").map(String::as_str), Some("John Doe"));
		assert_eq!(parsed.get("mode").map(String::as_str), Some("read write"));
	}

	#[test]
	fn literal_plus_survives_when_escaped() {
		let parsed = parse_key_value_list("expr=1%2B1").expect("Escaped `+` should parse.");

		assert_eq!(parsed.get("expr").map(String::as_str), Some("1+1"));
	}

	#[test]
	fn rejects_non_utf8_escapes() {
		let err = parse_key_value_list("a=%FF")
			.expect_err("Escapes that decode to invalid UTF-8 should be rejected.");

		assert!(matches!(err, QueryParseError::InvalidEncoding { .. }));
	}
}
