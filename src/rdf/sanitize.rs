//! Reduction of IRIs and literal values to graph-safe identifiers.
//!
//! The leading `http://host/path/` (or `.../ns#`) namespace is stripped once,
//! then every character outside `[A-Za-z0-9_-]` becomes `_`. The output never
//! contains `:`, `/` or `#`, so a second pass is a no-op.

use std::sync::LazyLock;

use regex::Regex;

static NAMESPACE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^http://\S+[/#]").expect("namespace pattern is valid"));

/// Maps a term value to an identifier usable as a node or edge key. May be empty.
pub fn sanitize_id(value: &str) -> String {
	let local = match NAMESPACE.find(value) {
		Some(prefix) => &value[prefix.end()..],
		None => value,
	};
	local
		.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
				c
			} else {
				'_'
			}
		})
		.collect()
}

/// Human-readable form of an identifier: underscores become spaces.
pub fn display_label(id: &str) -> String {
	id.replace('_', " ")
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn strips_hash_namespace() {
		assert_eq!(sanitize_id("http://example.org/ns#Alice"), "Alice");
	}

	#[test]
	fn strips_deep_path_namespace() {
		let id = sanitize_id("http://example.org/path/to/Bob_Smith");
		assert_eq!(id, "Bob_Smith");
		assert_eq!(display_label(&id), "Bob Smith");
	}

	#[test]
	fn replaces_unsafe_characters() {
		assert_eq!(sanitize_id("Jane Doe (CEO)"), "Jane_Doe__CEO_");
		assert_eq!(sanitize_id("urn:isbn:0451450523"), "urn_isbn_0451450523");
		assert_eq!(sanitize_id("caf\u{e9}"), "caf_");
	}

	#[test]
	fn only_plain_http_prefixes_are_stripped() {
		assert_eq!(
			sanitize_id("https://example.org/Alice"),
			"https___example_org_Alice"
		);
		// Not anchored at the start of the value.
		assert_eq!(sanitize_id("see http://ex.org/x"), "see_http___ex_org_x");
	}

	#[test]
	fn namespace_only_sanitizes_to_empty() {
		assert_eq!(sanitize_id("http://example.org/"), "");
		assert_eq!(sanitize_id("http://example.org/vocab#"), "");
		assert_eq!(sanitize_id(""), "");
	}

	#[test]
	fn whitespace_stops_the_namespace_match() {
		assert_eq!(sanitize_id("http://a.org/b c/d"), "b_c_d");
	}

	proptest! {
		#[test]
		fn sanitize_is_idempotent(value in "\\PC{0,40}") {
			let once = sanitize_id(&value);
			prop_assert_eq!(sanitize_id(&once), once.clone());
		}

		#[test]
		fn sanitized_ids_use_safe_alphabet(value in "(http://[a-z./#]{1,12})?\\PC{0,20}") {
			let id = sanitize_id(&value);
			prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
		}
	}
}
