//! turtle-graph: interactive knowledge graph editor for Turtle documents.
//!
//! Fetches a `.ttl` document, flattens its statements into sanitized triples,
//! and renders them as a force-directed graph. The triples can be edited in a
//! table and exported back to Turtle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, debug, error, info, warn};

pub mod components;
pub mod config;
pub mod download;
pub mod graph;
pub mod ingest;
pub mod rdf;
pub mod session;

pub use components::force_graph::{
	ForceGraphCanvas, ForceGraphState, GraphLink, GraphNode, GraphSnapshot,
};
pub use config::AppConfig;

use components::editor::TripleEditor;
use components::force_graph::SurfaceEvent;
use components::loader::UrlLoader;
use graph::GraphBuilder;
use session::{EditSession, Workspace};

/// Seed used for every build when `deterministic_layout` is set.
pub const FIXED_LAYOUT_SEED: u64 = 0x7475_7274_6c65;

/// Initialize logging and panic hooks for the WASM target.
///
/// Everything is enabled until the configured level is applied with
/// [`log::set_max_level`].
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Trace);
	console_error_panic_hook::set_once();
	info!("turtle-graph: logging initialized");
}

fn layout_seed(deterministic: bool) -> u64 {
	if deterministic {
		FIXED_LAYOUT_SEED
	} else {
		(js_sys::Math::random() * u64::MAX as f64) as u64
	}
}

/// Main application component.
///
/// Holds the [`Workspace`] in a signal; the canvas follows its snapshot and
/// the editor overlay works on a detached [`EditSession`].
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
	provide_meta_context();

	let AppConfig {
		initial_url,
		theme,
		simulate,
		deterministic_layout,
		export_file_name,
		..
	} = config;
	let theme = theme.theme();
	let builder = move || GraphBuilder::new(layout_seed(deterministic_layout));

	let workspace = RwSignal::new(Workspace::new());
	let url = RwSignal::new(initial_url.clone().unwrap_or_default());
	let editor = RwSignal::new(None::<EditSession>);
	let save_error = RwSignal::new(None::<String>);

	// Memo so status-only changes do not reset the simulation.
	let snapshot = Memo::new(move |_| workspace.with(|w| w.snapshot().cloned()));
	let status = move || workspace.with(Workspace::status_line);
	let busy = Signal::derive(move || workspace.with(Workspace::is_loading));
	let can_edit = move || workspace.with(Workspace::can_edit);

	let start_load = Callback::new(move |input: String| {
		let Some((ticket, url)) = workspace.try_update(|w| w.request_load(&input)).flatten()
		else {
			return;
		};
		spawn_local(async move {
			let result = ingest::load(&url).await;
			let applied = workspace
				.try_update(|w| w.finish_load(ticket, &url, result, builder()))
				.unwrap_or(false);
			if applied {
				save_error.set(None);
			}
		});
	});

	let open_editor = move |_: web_sys::MouseEvent| {
		save_error.set(None);
		editor.set(Some(workspace.with_untracked(Workspace::open_editor)));
	};

	let on_save = Callback::new(move |edits: EditSession| {
		match workspace.try_update(|w| w.save_edits(edits, builder())) {
			Some(Ok(dropped)) => {
				if dropped > 0 {
					warn!("dropped {dropped} rows with an empty field");
				}
				editor.set(None);
			}
			Some(Err(e)) => {
				warn!("save refused: {e}");
				save_error.set(Some(e.to_string()));
			}
			None => {}
		}
	});

	let on_close = Callback::new(move |()| {
		debug!("editor closed");
		editor.set(None);
	});

	let on_export = move |_: web_sys::MouseEvent| {
		let Some(text) = workspace.with_untracked(Workspace::export) else {
			return;
		};
		if let Err(e) = download::offer_download(&text, &export_file_name) {
			error!("export failed: {e:?}");
		}
	};

	let on_interaction = Callback::new(|event: SurfaceEvent| {
		if let SurfaceEvent::NodeRelease { id } = event {
			debug!("released {id}");
		}
	});

	if let Some(initial) = initial_url {
		start_load.run(initial);
	}

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme.name />
		<Title text="Knowledge Graph Editor" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas
				data=snapshot
				fullscreen=true
				theme=theme
				simulate=simulate
				on_interaction=on_interaction
			/>
			<div class="graph-overlay">
				<h1>"Knowledge Graph"</h1>
				<UrlLoader url=url on_load=start_load busy=busy />
				<p class="subtitle">{status}</p>
				<Show when=can_edit>
					<div class="graph-actions">
						<button on:click=open_editor>"Edit Triplets"</button>
						<button on:click=on_export.clone()>"Export TTL"</button>
					</div>
				</Show>
			</div>
			{move || {
				editor
					.get()
					.map(|session| {
						view! {
							<TripleEditor
								session=session
								on_save=on_save
								on_close=on_close
								error=save_error
							/>
						}
					})
			}}
		</div>
	}
}
