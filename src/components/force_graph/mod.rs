//! Force-directed graph visualization component.
//!
//! Renders a [`GraphSnapshot`] on an HTML canvas with:
//! - Physics-based node positioning via force simulation, seeded from the
//!   snapshot's positions
//! - Pan, zoom, and single-node dragging
//! - Smooth neighborhood highlighting on hover
//! - Directed edges with predicate labels
//!
//! # Example
//!
//! ```ignore
//! use turtle_graph::components::force_graph::{ForceGraphCanvas, GraphSnapshot};
//!
//! let snapshot = RwSignal::new(Some(GraphSnapshot::default()));
//! view! { <ForceGraphCanvas data=snapshot fullscreen=true /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use state::{ForceGraphState, Interaction, SurfaceEvent};
pub use theme::Theme;
pub use types::{GraphLink, GraphNode, GraphSnapshot};
