//! RDF ingestion and serialization.
//!
//! Turtle text goes in through [`store`], each statement is reduced to graph-safe
//! identifiers by [`sanitize`], and the resulting [`Triple`] list is written back
//! out by [`export`].

pub mod export;
pub mod sanitize;
pub mod store;
mod triple;

pub use sanitize::{display_label, sanitize_id};
pub use triple::{Field, Triple};

/// Errors raised while reading Turtle.
#[derive(Debug, thiserror::Error)]
pub enum RdfError {
	/// The document URL could not be used as a base IRI.
	#[error("invalid base IRI {iri:?}: {message}")]
	InvalidBase {
		/// The rejected IRI.
		iri: String,
		/// Why the parser rejected it.
		message: String,
	},

	/// The document is not well-formed Turtle.
	#[error("Turtle syntax error: {0}")]
	Syntax(String),
}

/// Result type for RDF operations.
pub type Result<T> = std::result::Result<T, RdfError>;
