//! Overlay table for editing the triple list.
//!
//! The editor works on its own [`EditSession`] buffer; nothing reaches the
//! graph until the host applies the buffer handed to `on_save`.

use leptos::prelude::*;

use crate::rdf::Field;
use crate::session::EditSession;

/// Subject / predicate / object table over a detached copy of the triples.
///
/// Mount it fresh each time the editor opens so the buffer reflects the
/// triples at that moment. `error` shows the last refused save, if any.
#[component]
pub fn TripleEditor(
	session: EditSession,
	#[prop(into)] on_save: Callback<EditSession>,
	#[prop(into)] on_close: Callback<()>,
	#[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
	// Row count is fixed for the lifetime of the buffer.
	let rows = session.len();
	let buffer = RwSignal::new(session);

	let table = if rows == 0 {
		view! { <p class="empty">"No triplets available."</p> }.into_any()
	} else {
		view! {
			<table class="triple-table">
				<thead>
					<tr>
						{Field::ALL
							.into_iter()
							.map(|field| view! { <th>{field.title()}</th> })
							.collect_view()}
					</tr>
				</thead>
				<tbody>
					{(0..rows)
						.map(|row| {
							view! {
								<tr>
									{Field::ALL
										.into_iter()
										.map(|field| view! { <td>{cell(buffer, row, field)}</td> })
										.collect_view()}
								</tr>
							}
						})
						.collect_view()}
				</tbody>
			</table>
		}
		.into_any()
	};

	let save_label = move || {
		if buffer.with(EditSession::is_dirty) {
			"Save*"
		} else {
			"Save"
		}
	};

	view! {
		<div class="editor-overlay">
			<div class="editor-panel">
				<h2>"Edit Triplets"</h2>
				{table}
				{move || error.get().map(|message| view! { <p class="error">{message}</p> })}
				<div class="editor-actions">
					<button on:click=move |_| on_save.run(buffer.get_untracked())>{save_label}</button>
					<button on:click=move |_| on_close.run(())>"Close"</button>
				</div>
			</div>
		</div>
	}
}

fn cell(buffer: RwSignal<EditSession>, row: usize, field: Field) -> impl IntoView {
	view! {
		<input
			type="text"
			prop:value=move || {
				buffer.with(|s| s.cell(row, field).unwrap_or_default().to_string())
			}
			on:input=move |ev| {
				let value = event_target_value(&ev);
				buffer.update(|s| s.set_cell(row, field, value));
			}
		/>
	}
}
