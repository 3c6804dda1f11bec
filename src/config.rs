//! Start-up configuration embedded in the host page.
//!
//! The page may carry a `<script id="app-config" type="application/json">`
//! element; any field left out takes its default.

use log::{LevelFilter, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::force_graph::Theme;

/// Element id the configuration is read from.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Which built-in canvas theme to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	/// Dark background.
	#[default]
	Dark,
	/// Light background.
	Light,
}

impl ThemeName {
	/// The theme this name selects.
	pub fn theme(self) -> Theme {
		match self {
			ThemeName::Dark => Theme::dark(),
			ThemeName::Light => Theme::light(),
		}
	}
}

/// Most verbose log level written to the console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	/// Errors only.
	Error,
	/// Warnings and errors.
	Warn,
	/// Informational messages and above.
	Info,
	/// Debug messages and above.
	#[default]
	Debug,
	/// Everything.
	Trace,
}

impl LogLevel {
	/// Equivalent `log` level.
	pub fn to_level(self) -> log::Level {
		match self {
			LogLevel::Error => log::Level::Error,
			LogLevel::Warn => log::Level::Warn,
			LogLevel::Info => log::Level::Info,
			LogLevel::Debug => log::Level::Debug,
			LogLevel::Trace => log::Level::Trace,
		}
	}
}

/// Settings read from the host page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Pre-filled into the URL box and loaded on start.
	pub initial_url: Option<String>,
	/// Canvas theme.
	pub theme: ThemeName,
	/// Console log verbosity.
	pub log_level: LogLevel,
	/// Run the force simulation after the initial layout.
	pub simulate: bool,
	/// Build every graph with the same seed instead of a fresh one.
	pub deterministic_layout: bool,
	/// File name offered when exporting.
	pub export_file_name: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			initial_url: None,
			theme: ThemeName::default(),
			log_level: LogLevel::default(),
			simulate: true,
			deterministic_layout: false,
			export_file_name: "updated_graph.ttl".to_string(),
		}
	}
}

impl AppConfig {
	/// Parses a JSON configuration object.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}

	/// Reads the page configuration, falling back to defaults.
	pub fn load() -> Self {
		let Some(text) = config_text() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!("loaded configuration from #{CONFIG_ELEMENT_ID}");
				config
			}
			Err(e) => {
				warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
				Self::default()
			}
		}
	}

	/// Log filter for the configured level.
	pub fn level_filter(&self) -> LevelFilter {
		self.log_level.to_level().to_level_filter()
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
	}

	#[test]
	fn reads_all_fields() {
		let config = AppConfig::from_json(
			r#"{
				"initial_url": "http://example.org/people.ttl",
				"theme": "light",
				"log_level": "warn",
				"simulate": false,
				"deterministic_layout": true,
				"export_file_name": "people.ttl"
			}"#,
		)
		.unwrap();
		assert_eq!(
			config.initial_url.as_deref(),
			Some("http://example.org/people.ttl")
		);
		assert_eq!(config.theme, ThemeName::Light);
		assert_eq!(config.level_filter(), LevelFilter::Warn);
		assert!(!config.simulate);
		assert!(config.deterministic_layout);
		assert_eq!(config.export_file_name, "people.ttl");
	}

	#[test]
	fn unknown_theme_is_an_error() {
		assert!(AppConfig::from_json(r#"{"theme": "neon"}"#).is_err());
	}
}
