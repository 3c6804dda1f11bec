//! Serialization of the triple list back to Turtle text.
//!
//! Output uses the sanitized identifiers, not the source IRIs, so one
//! export/import cycle loses the original namespaces. Re-importing resolves
//! each `<id>` against the new document URL, and sanitizing that yields `id`
//! again.

use std::fmt::Write as _;

use super::Triple;

/// MIME type of exported documents.
pub const TURTLE_MIME: &str = "text/turtle";

/// Renders one `<subject> <predicate> <object> .` line per triple.
pub fn to_turtle(triples: &[Triple]) -> String {
	let mut out = String::with_capacity(triples.len() * 48);
	for t in triples {
		let _ = writeln!(out, "<{}> <{}> <{}> .", t.subject, t.predicate, t.object);
	}
	out
}
