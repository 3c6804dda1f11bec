//! Turtle parsing into sanitized triples.

use std::collections::HashSet;

use log::debug;
use oxrdf::{Subject, Term};
use oxttl::TurtleParser;

use super::{RdfError, Result, Triple};

/// Statements read from one Turtle document, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedDocument {
	/// Sanitized triples that survived the skip policy.
	pub triples: Vec<Triple>,
	/// Distinct statements in the source document.
	pub statements: usize,
	/// Statements dropped because a field sanitized to empty.
	pub dropped: usize,
}

/// Parses `text` as Turtle, resolving relative IRIs against `base_iri`.
///
/// Repeated identical statements are read once, as an RDF store would hold
/// them. Any syntax error aborts the whole document.
pub fn parse_turtle(text: &str, base_iri: &str) -> Result<ParsedDocument> {
	let parser = TurtleParser::new()
		.with_base_iri(base_iri)
		.map_err(|e| RdfError::InvalidBase {
			iri: base_iri.to_string(),
			message: e.to_string(),
		})?;

	let mut seen = HashSet::new();
	let mut doc = ParsedDocument::default();
	for statement in parser.for_slice(text.as_bytes()) {
		let statement = statement.map_err(|e| RdfError::Syntax(e.to_string()))?;
		if !seen.insert(statement.clone()) {
			continue;
		}
		doc.statements += 1;

		let subject = subject_value(&statement.subject);
		let object = term_value(&statement.object);
		match Triple::from_terms(&subject, statement.predicate.as_str(), &object) {
			Some(triple) => doc.triples.push(triple),
			None => {
				debug!("skipping degenerate statement {statement}");
				doc.dropped += 1;
			}
		}
	}
	Ok(doc)
}

fn subject_value(subject: &Subject) -> String {
	match subject {
		Subject::NamedNode(node) => node.as_str().to_string(),
		Subject::BlankNode(node) => node.as_str().to_string(),
		#[allow(unreachable_patterns)]
		other => other.to_string(),
	}
}

/// The bare value of a term: IRI text, blank node id, or literal lexical form.
fn term_value(term: &Term) -> String {
	match term {
		Term::NamedNode(node) => node.as_str().to_string(),
		Term::BlankNode(node) => node.as_str().to_string(),
		Term::Literal(literal) => literal.value().to_string(),
		#[allow(unreachable_patterns)]
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: &str = "http://example.org/data/people.ttl";

	#[test]
	fn parses_full_iris() {
		let doc = parse_turtle(
			"<http://ex.org/Alice> <http://ex.org/knows> <http://ex.org/Bob> .",
			BASE,
		)
		.unwrap();
		assert_eq!(doc.triples, vec![Triple::new("Alice", "knows", "Bob")]);
		assert_eq!(doc.statements, 1);
		assert_eq!(doc.dropped, 0);
	}

	#[test]
	fn expands_prefixes_and_keeps_declaration_order() {
		let ttl = r#"
			@prefix ex: <http://example.org/ns#> .
			ex:Alice ex:knows ex:Bob ;
			         ex:name "Alice Smith" .
			ex:Bob ex:knows ex:Carol .
		"#;
		let doc = parse_turtle(ttl, BASE).unwrap();
		assert_eq!(
			doc.triples,
			vec![
				Triple::new("Alice", "knows", "Bob"),
				Triple::new("Alice", "name", "Alice_Smith"),
				Triple::new("Bob", "knows", "Carol"),
			]
		);
	}

	#[test]
	fn resolves_relative_iris_against_the_document_url() {
		let doc = parse_turtle("<Alice> <knows> <Bob> .", BASE).unwrap();
		assert_eq!(doc.triples, vec![Triple::new("Alice", "knows", "Bob")]);
	}

	#[test]
	fn reads_duplicate_statements_once() {
		let ttl = "<http://ex.org/A> <http://ex.org/p> <http://ex.org/B> .\n\
		           <http://ex.org/A> <http://ex.org/p> <http://ex.org/B> .";
		let doc = parse_turtle(ttl, BASE).unwrap();
		assert_eq!(doc.statements, 1);
		assert_eq!(doc.triples.len(), 1);
	}

	#[test]
	fn counts_dropped_statements() {
		let ttl = "<http://ex.org/A> <http://ex.org/p> <http://ex.org/> .\n\
		           <http://ex.org/A> <http://ex.org/p> <http://ex.org/B> .";
		let doc = parse_turtle(ttl, BASE).unwrap();
		assert_eq!(doc.statements, 2);
		assert_eq!(doc.dropped, 1);
		assert_eq!(doc.triples, vec![Triple::new("A", "p", "B")]);
	}

	#[test]
	fn blank_nodes_become_nodes() {
		let doc = parse_turtle("_:b1 <http://ex.org/p> <http://ex.org/B> .", BASE).unwrap();
		assert_eq!(doc.triples.len(), 1);
		assert!(!doc.triples[0].subject.is_empty());
		assert_eq!(doc.triples[0].object, "B");
	}

	#[test]
	fn rejects_malformed_turtle() {
		let err = parse_turtle("<http://ex.org/A> <http://ex.org/p> .", BASE).unwrap_err();
		assert!(matches!(err, RdfError::Syntax(_)));
	}

	#[test]
	fn rejects_unusable_base() {
		let err = parse_turtle("", "not a url").unwrap_err();
		assert!(matches!(err, RdfError::InvalidBase { .. }));
	}
}
