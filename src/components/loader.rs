//! URL entry header.

use leptos::prelude::*;

/// Text box plus "Load Graph" button. Enter in the box also submits.
#[component]
pub fn UrlLoader(
	url: RwSignal<String>,
	#[prop(into)] on_load: Callback<String>,
	#[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
	let submit = move || on_load.run(url.get_untracked());

	view! {
		<div class="url-loader">
			<input
				type="url"
				placeholder="Enter TTL file URL"
				prop:value=move || url.get()
				on:input=move |ev| url.set(event_target_value(&ev))
				on:keydown=move |ev| {
					if ev.key() == "Enter" {
						submit();
					}
				}
			/>
			<button prop:disabled=move || busy.get() on:click=move |_| submit()>
				"Load Graph"
			</button>
		</div>
	}
}
