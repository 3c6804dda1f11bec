//! Leptos component wrapping the force-directed graph canvas.
//!
//! The component owns a canvas element, translates mouse and wheel events into
//! [`Interaction`]s, and runs an animation loop via `requestAnimationFrame`
//! that advances the simulation and redraws each frame. Whenever the snapshot
//! signal changes the simulation state is rebuilt from scratch.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::scale::ScaleConfig;
use super::state::{ForceGraphState, Interaction, SurfaceEvent};
use super::theme::Theme;
use super::types::GraphSnapshot;

/// Bundles graph simulation state with its visual configuration.
struct GraphContext {
	state: ForceGraphState,
	scale: ScaleConfig,
	theme: Theme,
	simulate: bool,
}

impl GraphContext {
	fn rebuild(&mut self, snapshot: &GraphSnapshot) {
		self.state = ForceGraphState::new(
			snapshot,
			self.state.width,
			self.state.height,
			self.simulate,
		);
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

/// Pointer position relative to the canvas' top-left corner.
fn local_coords(canvas: Option<HtmlCanvasElement>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let rect = canvas?.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an interactive force-directed graph on a canvas element.
///
/// `data` carries the current snapshot; `None` draws an empty canvas. The
/// component sizes itself to its parent by default, `fullscreen` fills the
/// viewport and follows window resizes, and explicit `width`/`height` win over
/// both. Node presses, drags and releases are reported through `on_interaction`.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<Option<GraphSnapshot>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] theme: Option<Theme>,
	#[prop(default = true)] simulate: bool,
	#[prop(optional)] on_interaction: Option<Callback<SurfaceEvent>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let theme = theme.unwrap_or_default();
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window)
		} else {
			let parent = canvas.parent_element();
			(
				width.unwrap_or_else(|| {
					parent.as_ref().map_or(800.0, |p| p.client_width() as f64)
				}),
				height.unwrap_or_else(|| {
					parent.as_ref().map_or(600.0, |p| p.client_height() as f64)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("canvas has no 2d context");
				return;
			}
		};

		let snapshot = data.get_untracked().unwrap_or_default();
		*context_init.borrow_mut() = Some(GraphContext {
			state: ForceGraphState::new(&snapshot, w, h, simulate),
			scale: ScaleConfig::default(),
			theme: theme.clone(),
			simulate,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = viewport_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(0.016);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Replace the simulation wholesale on every new snapshot.
	let context_data = context.clone();
	Effect::new(move |_| {
		let snapshot = data.get().unwrap_or_default();
		if let Some(ref mut c) = *context_data.borrow_mut() {
			debug!(
				"canvas: new snapshot with {} nodes, {} links",
				snapshot.nodes.len(),
				snapshot.links.len()
			);
			c.rebuild(&snapshot);
		}
	});

	let dispatch = {
		let context = context.clone();
		Rc::new(move |input: Interaction| {
			let event = context
				.borrow_mut()
				.as_mut()
				.and_then(|c| c.state.handle(input, &c.scale));
			if let Some(event) = event {
				debug!("canvas: {event:?}");
				if let Some(cb) = on_interaction {
					cb.run(event);
				}
			}
		})
	};

	let dispatch_md = dispatch.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some((x, y)) = local_coords(canvas_ref.get(), &ev) {
			dispatch_md(Interaction::Press { x, y });
		}
	};

	let dispatch_mm = dispatch.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y)) = local_coords(canvas_ref.get(), &ev) {
			dispatch_mm(Interaction::Move { x, y });
		}
	};

	let dispatch_mu = dispatch.clone();
	let on_mouseup = move |_: MouseEvent| dispatch_mu(Interaction::Release);

	let dispatch_ml = dispatch.clone();
	let on_mouseleave = move |_: MouseEvent| dispatch_ml(Interaction::Leave);

	let dispatch_wh = dispatch;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some((x, y)) = local_coords(canvas_ref.get(), &ev) {
			dispatch_wh(Interaction::Zoom {
				x,
				y,
				delta_y: ev.delta_y(),
			});
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
