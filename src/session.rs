//! Authoritative triple list, derived graph, and the edit/load lifecycle.
//!
//! [`Workspace`] owns the single triple list and the snapshot built from it.
//! Loads are sequenced so only the most recently started one is applied, and
//! every change to the triples rebuilds the snapshot from scratch.

use log::{debug, error, info, warn};

use crate::components::force_graph::GraphSnapshot;
use crate::graph::GraphBuilder;
use crate::ingest::{self, IngestError};
use crate::rdf::store::ParsedDocument;
use crate::rdf::{Field, Triple, export};

/// Identifies one load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
	/// Position of this load in issue order, starting at 1.
	pub fn sequence(self) -> u64 {
		self.0
	}
}

/// Hands out increasing tickets and remembers the newest.
#[derive(Clone, Debug, Default)]
pub struct LoadSequencer {
	issued: u64,
}

impl LoadSequencer {
	/// Issues a ticket that supersedes every earlier one.
	pub fn issue(&mut self) -> LoadTicket {
		self.issued += 1;
		LoadTicket(self.issued)
	}

	/// Whether `ticket` is the newest one issued.
	pub fn is_current(&self, ticket: LoadTicket) -> bool {
		ticket.0 == self.issued
	}
}

/// What the user-facing status line shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
	/// Nothing has been loaded yet.
	#[default]
	Idle,
	/// A fetch for `url` is in flight.
	Loading {
		/// Address being fetched.
		url: String,
	},
	/// The triples and graph came from `url`.
	Loaded {
		/// Address the triples were read from.
		url: String,
	},
	/// A load failed; triples and graph have been cleared.
	Failed(String),
	/// Input was rejected before loading; existing state is untouched.
	Rejected(String),
}

/// Editable copy of the triple list, detached from the rendered graph until saved.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
	rows: Vec<Triple>,
	original: Vec<Triple>,
	generation: u64,
}

impl EditSession {
	/// The buffered rows, edits included.
	pub fn rows(&self) -> &[Triple] {
		&self.rows
	}

	/// Number of rows in the buffer.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether the buffer has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Current value of one cell.
	pub fn cell(&self, row: usize, field: Field) -> Option<&str> {
		self.rows.get(row).map(|t| t.get(field))
	}

	/// Replaces one cell. Rows outside the table are ignored.
	pub fn set_cell(&mut self, row: usize, field: Field, value: impl Into<String>) {
		if let Some(triple) = self.rows.get_mut(row) {
			triple.set(field, value);
		}
	}

	/// Whether any cell differs from the list the session was opened on.
	pub fn is_dirty(&self) -> bool {
		self.rows != self.original
	}
}

/// Why an edit could not be saved.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
	/// A load is in flight and will replace the triples.
	#[error("a graph is still loading")]
	LoadInProgress,
	/// The triples were replaced after the editor was opened.
	#[error("the triples changed since the editor was opened")]
	Stale,
}

/// The single owner of the triple list and graph snapshot.
#[derive(Clone, Debug, Default)]
pub struct Workspace {
	triples: Option<Vec<Triple>>,
	snapshot: Option<GraphSnapshot>,
	status: LoadStatus,
	sequencer: LoadSequencer,
	pending: Option<LoadTicket>,
	generation: u64,
}

impl Workspace {
	/// An empty workspace with nothing loaded.
	pub fn new() -> Self {
		Self::default()
	}

	/// The authoritative triple list, if one is loaded.
	pub fn triples(&self) -> Option<&[Triple]> {
		self.triples.as_deref()
	}

	/// The graph built from the current triples.
	pub fn snapshot(&self) -> Option<&GraphSnapshot> {
		self.snapshot.as_ref()
	}

	/// What the status line reports.
	pub fn status(&self) -> &LoadStatus {
		&self.status
	}

	/// Whether a started load has not finished yet.
	///
	/// Tracked apart from [`LoadStatus`] so a rejected input shown while a load
	/// is in flight does not lift the guard.
	pub fn is_loading(&self) -> bool {
		self.pending.is_some()
	}

	/// Editing and export are offered once triples exist and no load is pending.
	pub fn can_edit(&self) -> bool {
		self.triples.is_some() && !self.is_loading()
	}

	/// Validates `input` and starts a load, or records the rejection.
	pub fn request_load(&mut self, input: &str) -> Option<(LoadTicket, String)> {
		match ingest::validate_url(input) {
			Ok(url) => Some((self.begin_load(&url), url)),
			Err(e) => {
				warn!("{e}");
				self.status = LoadStatus::Rejected(e.to_string());
				None
			}
		}
	}

	/// Starts a load of `url`, superseding any load still in flight.
	pub fn begin_load(&mut self, url: &str) -> LoadTicket {
		let ticket = self.sequencer.issue();
		self.pending = Some(ticket);
		info!("load #{} started: {url}", ticket.sequence());
		self.status = LoadStatus::Loading {
			url: url.to_string(),
		};
		ticket
	}

	/// Applies a finished load if it is still the newest one.
	///
	/// Returns `false` when the result was superseded and discarded. A failure
	/// clears both the triples and the graph.
	pub fn finish_load(
		&mut self,
		ticket: LoadTicket,
		url: &str,
		result: ingest::Result<ParsedDocument>,
		builder: GraphBuilder,
	) -> bool {
		if !self.sequencer.is_current(ticket) {
			debug!("discarding superseded load #{} for {url}", ticket.sequence());
			return false;
		}
		self.pending = None;
		match result {
			Ok(doc) => {
				self.replace_triples(doc.triples, builder);
				self.status = LoadStatus::Loaded {
					url: url.to_string(),
				};
			}
			Err(e) => self.fail(&e),
		}
		true
	}

	fn fail(&mut self, e: &IngestError) {
		error!("error fetching or parsing TTL: {e}");
		self.triples = None;
		self.snapshot = None;
		self.generation += 1;
		self.status = LoadStatus::Failed(e.to_string());
	}

	/// Snapshots the current triples into a separate editable buffer.
	pub fn open_editor(&self) -> EditSession {
		let rows = self.triples.clone().unwrap_or_default();
		EditSession {
			original: rows.clone(),
			rows,
			generation: self.generation,
		}
	}

	/// Replaces the triples with the edited rows and rebuilds the graph.
	///
	/// Cells are re-sanitized; rows left with an empty field are dropped.
	/// Returns how many rows were dropped.
	pub fn save_edits(
		&mut self,
		edits: EditSession,
		builder: GraphBuilder,
	) -> Result<usize, SaveError> {
		if self.is_loading() {
			return Err(SaveError::LoadInProgress);
		}
		if edits.generation != self.generation {
			return Err(SaveError::Stale);
		}
		let total = edits.rows.len();
		let triples: Vec<Triple> = edits.rows.iter().filter_map(Triple::sanitized).collect();
		let dropped = total - triples.len();
		info!("saved {} edited triples ({dropped} dropped)", triples.len());
		self.replace_triples(triples, builder);
		Ok(dropped)
	}

	/// Serialized triple list, if one is loaded.
	pub fn export(&self) -> Option<String> {
		self.triples.as_deref().map(export::to_turtle)
	}

	/// One-line summary for the header.
	pub fn status_line(&self) -> String {
		match &self.status {
			LoadStatus::Idle => "Enter a Turtle (.ttl) URL to begin.".to_string(),
			LoadStatus::Loading { .. } => "Loading graph...".to_string(),
			LoadStatus::Loaded { url } => {
				let triples = self.triples.as_ref().map_or(0, Vec::len);
				let (nodes, links) = self
					.snapshot
					.as_ref()
					.map_or((0, 0), |g| (g.nodes.len(), g.links.len()));
				format!("{nodes} nodes, {links} edges from {triples} triplets ({url})")
			}
			LoadStatus::Failed(message) => format!("Error loading graph: {message}"),
			LoadStatus::Rejected(message) => message.clone(),
		}
	}

	fn replace_triples(&mut self, triples: Vec<Triple>, builder: GraphBuilder) {
		self.snapshot = Some(builder.build(&triples));
		self.triples = Some(triples);
		self.generation += 1;
	}
}
