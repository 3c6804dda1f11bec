//! The editable statement type shared by the graph builder, editor, and export.

use serde::{Deserialize, Serialize};

use super::sanitize::sanitize_id;

/// A subject-predicate-object statement whose fields are sanitized identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
	/// Resource the statement is about.
	pub subject: String,
	/// Relationship name.
	pub predicate: String,
	/// Value or resource the subject relates to.
	pub object: String,
}

/// One column of a [`Triple`], addressed by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	/// The subject column.
	Subject,
	/// The predicate column.
	Predicate,
	/// The object column.
	Object,
}

impl Field {
	/// Columns in table order.
	pub const ALL: [Field; 3] = [Field::Subject, Field::Predicate, Field::Object];

	/// Column heading shown by the editor.
	pub fn title(self) -> &'static str {
		match self {
			Field::Subject => "Subject",
			Field::Predicate => "Predicate",
			Field::Object => "Object",
		}
	}
}

impl Triple {
	/// Stores the fields as given, without sanitizing.
	pub fn new(
		subject: impl Into<String>,
		predicate: impl Into<String>,
		object: impl Into<String>,
	) -> Self {
		Self {
			subject: subject.into(),
			predicate: predicate.into(),
			object: object.into(),
		}
	}

	/// Builds a triple from raw term values, or `None` if any field sanitizes to empty.
	pub fn from_terms(subject: &str, predicate: &str, object: &str) -> Option<Self> {
		let triple = Self::new(
			sanitize_id(subject),
			sanitize_id(predicate),
			sanitize_id(object),
		);
		triple.is_complete().then_some(triple)
	}

	/// Re-sanitizes every field; identifiers that are already clean are unchanged.
	pub fn sanitized(&self) -> Option<Self> {
		Self::from_terms(&self.subject, &self.predicate, &self.object)
	}

	/// Whether every field is non-empty.
	pub fn is_complete(&self) -> bool {
		!self.subject.is_empty() && !self.predicate.is_empty() && !self.object.is_empty()
	}

	/// Value of one field.
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Subject => &self.subject,
			Field::Predicate => &self.predicate,
			Field::Object => &self.object,
		}
	}

	/// Replaces one field. The value is sanitized on save, not here.
	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		let slot = match field {
			Field::Subject => &mut self.subject,
			Field::Predicate => &mut self.predicate,
			Field::Object => &mut self.object,
		};
		*slot = value.into();
	}
}
