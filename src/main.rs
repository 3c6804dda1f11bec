//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use turtle_graph::{App, AppConfig, init_logging};

fn main() {
	init_logging();
	let config = AppConfig::load();
	log::set_max_level(config.level_filter());

	mount_to_body(move || {
		view! { <App config=config.clone() /> }
	})
}
