//! End-to-end checks of the load → graph → edit → export pipeline.

#![allow(unused_crate_dependencies)]

use turtle_graph::ForceGraphState;
use turtle_graph::graph::GraphBuilder;
use turtle_graph::ingest::{self, FetchedDocument, IngestError};
use turtle_graph::rdf::store::parse_turtle;
use turtle_graph::rdf::{Field, Triple, export};
use turtle_graph::session::{LoadStatus, Workspace};

const URL: &str = "http://ex.org/people.ttl";

fn builder() -> GraphBuilder {
	GraphBuilder::new(7)
}

fn document(status: u16, body: &str) -> FetchedDocument {
	FetchedDocument {
		url: URL.to_string(),
		status,
		status_text: if status == 200 { "OK" } else { "Not Found" }.to_string(),
		body: body.to_string(),
	}
}

fn load(ws: &mut Workspace, doc: &FetchedDocument) {
	let (ticket, url) = ws.request_load(&doc.url).expect("url is valid");
	assert!(ws.finish_load(ticket, &url, ingest::ingest_document(doc), builder()));
}

fn loaded(ttl: &str) -> Workspace {
	let mut ws = Workspace::new();
	load(&mut ws, &document(200, ttl));
	ws
}

#[test]
fn single_statement_becomes_two_nodes_and_one_edge() {
	let ws = loaded("<http://ex.org/Alice> <http://ex.org/knows> <http://ex.org/Bob> .");

	assert_eq!(ws.triples().unwrap(), [Triple::new("Alice", "knows", "Bob")]);
	let graph = ws.snapshot().unwrap();
	let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, ["Alice", "Bob"]);
	assert_eq!(graph.links.len(), 1);
	assert_eq!(graph.links[0].key, "Alice->Bob");
	assert_eq!(graph.links[0].label, "knows");
}

#[test]
fn distinct_objects_get_distinct_edges() {
	let ws = loaded(
		"@prefix ex: <http://ex.org/> .
		ex:Alice ex:knows ex:Bob .
		ex:Alice ex:knows ex:Carol .",
	);
	let graph = ws.snapshot().unwrap();
	assert_eq!(graph.nodes.len(), 3);
	assert_eq!(graph.links.len(), 2);
}

#[test]
fn shared_pair_keeps_first_predicate_only() {
	let ws = loaded(
		"@prefix ex: <http://ex.org/> .
		ex:Alice ex:knows ex:Bob .
		ex:Alice ex:likes ex:Bob .",
	);
	let graph = ws.snapshot().unwrap();
	assert_eq!(graph.nodes.len(), 2);
	assert_eq!(graph.links.len(), 1);
	assert_eq!(graph.link("Alice", "Bob").unwrap().label, "knows");
	assert_eq!(graph.collapsed, 1);
	// Still editable and exportable.
	assert_eq!(ws.triples().unwrap().len(), 2);
	assert!(ws.export().unwrap().contains("<Alice> <likes> <Bob> ."));
}

#[test]
fn edited_object_replaces_the_old_edge() {
	let mut ws = loaded("<http://ex.org/Alice> <http://ex.org/knows> <http://ex.org/Bob> .");

	let mut edits = ws.open_editor();
	edits.set_cell(0, Field::Object, "Carol");
	assert_eq!(ws.save_edits(edits, builder()), Ok(0));

	let graph = ws.snapshot().unwrap();
	assert!(graph.link("Alice", "Bob").is_none());
	assert!(graph.link("Alice", "Carol").is_some());
	assert!(graph.node("Bob").is_none());
}

#[test]
fn not_found_leaves_nothing_behind() {
	let mut ws = loaded("<http://ex.org/Alice> <http://ex.org/knows> <http://ex.org/Bob> .");

	let missing = document(404, "");
	let result = ingest::ingest_document(&missing);
	assert!(matches!(result, Err(IngestError::Status { status: 404, .. })));

	load(&mut ws, &missing);
	assert!(ws.triples().is_none());
	assert!(ws.snapshot().is_none());
	assert!(matches!(ws.status(), LoadStatus::Failed(m) if m.contains("404")));
	assert!(!ws.can_edit());
}

#[test]
fn export_then_reimport_keeps_identifiers_but_not_namespaces() {
	let ws = loaded(
		"@prefix ex: <http://ex.org/ns#> .
		ex:Alice ex:knows <http://ex.org/path/to/Bob_Smith> .",
	);
	let text = ws.export().unwrap();
	assert_eq!(text, "<Alice> <knows> <Bob_Smith> .\n");
	assert_eq!(export::TURTLE_MIME, "text/turtle");

	let again = parse_turtle(&text, "http://elsewhere.org/updated_graph.ttl").unwrap();
	assert_eq!(again.triples, ws.triples().unwrap());
	assert!(!text.contains("ex.org"));
}

#[test]
fn rejected_url_makes_no_request_and_keeps_graph() {
	let mut ws = loaded("<http://ex.org/Alice> <http://ex.org/knows> <http://ex.org/Bob> .");
	assert!(ws.request_load("ftp://ex.org/people.txt").is_none());
	assert!(matches!(ws.status(), LoadStatus::Rejected(_)));
	assert_eq!(ws.snapshot().unwrap().nodes.len(), 2);
}

#[test]
fn self_referencing_statement_renders_without_crashing() {
	let ws = loaded(
		"@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
		rdfs:Class a rdfs:Class .",
	);
	let graph = ws.snapshot().unwrap();
	assert_eq!(graph.nodes.len(), 1);
	assert_eq!(graph.link("Class", "Class").unwrap().label, "type");

	let mut surface = ForceGraphState::new(graph, 800.0, 600.0, true);
	for _ in 0..5 {
		surface.tick(0.016);
	}
	assert_eq!(surface.edges().len(), 1);
}
