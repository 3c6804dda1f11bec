//! Fetch → parse pipeline for a user-supplied Turtle URL.
//!
//! The URL check is deliberately shallow: it only guards against obviously
//! wrong input before a network request is made. Everything that can go wrong
//! afterwards surfaces as an [`IngestError`] for the session to report.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::rdf::RdfError;
use crate::rdf::store::{ParsedDocument, parse_turtle};

/// Ways a load can fail.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
	/// Input rejected before any request was made.
	#[error("Please enter a valid .ttl file URL (must start with http and end with .ttl): {0:?}")]
	InvalidUrl(String),

	/// The server answered with a non-success status.
	#[error(
		"HTTP status: {status} {status_text}\nError fetching TTL file. Please check the URL/CORS and try again."
	)]
	Status {
		/// HTTP status code.
		status: u16,
		/// HTTP status reason.
		status_text: String,
	},

	/// The request never produced a response.
	#[error("Network error fetching TTL file: {0}")]
	Transport(String),

	/// The response body could not be read as text.
	#[error("Could not read response body: {0}")]
	Decode(String),

	/// The body is not valid Turtle.
	#[error(transparent)]
	Parse(#[from] RdfError),
}

/// Result type for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Checks that `input` looks like a Turtle URL and returns it trimmed.
pub fn validate_url(input: &str) -> Result<String> {
	let url = input.trim();
	if !url.is_empty() && url.starts_with("http") && url.ends_with(".ttl") {
		Ok(url.to_string())
	} else {
		Err(IngestError::InvalidUrl(input.to_string()))
	}
}

/// A response as seen by the pipeline, detached from the browser types.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedDocument {
	/// Address the document was fetched from.
	pub url: String,
	/// HTTP status code.
	pub status: u16,
	/// HTTP status reason.
	pub status_text: String,
	/// Response text, empty on failure.
	pub body: String,
}

impl FetchedDocument {
	/// Whether the status is 2xx.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Turns a fetched response into triples, using its URL as the Turtle base.
pub fn ingest_document(doc: &FetchedDocument) -> Result<ParsedDocument> {
	if !doc.is_success() {
		return Err(IngestError::Status {
			status: doc.status,
			status_text: doc.status_text.clone(),
		});
	}
	let parsed = parse_turtle(&doc.body, &doc.url)?;
	info!(
		"parsed {}: {} statements, {} triples kept, {} dropped",
		doc.url,
		parsed.statements,
		parsed.triples.len(),
		parsed.dropped
	);
	Ok(parsed)
}

/// Issues a single unauthenticated GET for `url`.
pub async fn fetch_document(url: &str) -> Result<FetchedDocument> {
	let window = web_sys::window().ok_or_else(|| IngestError::Transport("no window".into()))?;
	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| IngestError::Transport(format!("{e:?}")))?;
	let response: Response = response
		.dyn_into()
		.map_err(|e| IngestError::Transport(format!("unexpected fetch result {e:?}")))?;

	let (status, status_text) = (response.status(), response.status_text());
	if !response.ok() {
		warn!("fetch {url} failed with HTTP {status}");
		return Ok(FetchedDocument {
			url: url.to_string(),
			status,
			status_text,
			body: String::new(),
		});
	}

	let text = response
		.text()
		.map_err(|e| IngestError::Decode(format!("{e:?}")))?;
	let body = JsFuture::from(text)
		.await
		.map_err(|e| IngestError::Decode(format!("{e:?}")))?
		.as_string()
		.ok_or_else(|| IngestError::Decode("body is not text".into()))?;

	Ok(FetchedDocument {
		url: url.to_string(),
		status,
		status_text,
		body,
	})
}

/// Fetches and parses `url`.
pub async fn load(url: &str) -> Result<ParsedDocument> {
	let doc = fetch_document(url).await?;
	ingest_document(&doc)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rdf::Triple;

	fn response(status: u16, body: &str) -> FetchedDocument {
		FetchedDocument {
			url: "http://example.org/people.ttl".into(),
			status,
			status_text: if status == 200 { "OK" } else { "Not Found" }.into(),
			body: body.into(),
		}
	}

	#[test]
	fn accepts_http_ttl_urls() {
		assert_eq!(
			validate_url("  https://example.org/data.ttl ").unwrap(),
			"https://example.org/data.ttl"
		);
		assert!(validate_url("http://example.org/a.ttl").is_ok());
	}

	#[test]
	fn rejects_other_shapes() {
		for bad in ["", "   ", "ftp://example.org/a.ttl", "http://example.org/a.rdf", "a.ttl"] {
			assert!(matches!(validate_url(bad), Err(IngestError::InvalidUrl(_))), "{bad}");
		}
	}

	#[test]
	fn not_found_is_a_status_error() {
		let err = ingest_document(&response(404, "")).unwrap_err();
		assert!(matches!(err, IngestError::Status { status: 404, .. }));
		assert!(err.to_string().contains("404"));
	}

	#[test]
	fn success_parses_body() {
		let doc = ingest_document(&response(
			200,
			"<http://ex.org/Alice> <http://ex.org/knows> <http://ex.org/Bob> .",
		))
		.unwrap();
		assert_eq!(doc.triples, vec![Triple::new("Alice", "knows", "Bob")]);
	}

	#[test]
	fn malformed_body_is_a_parse_error() {
		let err = ingest_document(&response(200, "this is not turtle")).unwrap_err();
		assert!(matches!(err, IngestError::Parse(RdfError::Syntax(_))));
	}
}
