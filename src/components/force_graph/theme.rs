//! Visual theming for the force graph.
//!
//! Node and edge colors come from the graph snapshot; the theme decides
//! everything around them: background, label ink, and how dimmed elements look.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		self.lerp(Color::rgba(255, 255, 255, self.a), factor)
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		self.lerp(Color::rgba(0, 0, 0, self.a), factor)
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// CSS form: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses `#rrggbb`, `rgb(..)` or `rgba(..)`. Anything else is mid gray.
	pub fn parse(css: &str) -> Self {
		const FALLBACK: Color = Color::rgb(128, 128, 128);
		if let Some(hex) = css.strip_prefix('#').filter(|h| h.len() == 6 && h.is_ascii()) {
			let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(128);
			return Color::rgb(channel(0), channel(2), channel(4));
		}
		let Some(args) = css
			.strip_prefix("rgba(")
			.or_else(|| css.strip_prefix("rgb("))
			.and_then(|rest| rest.strip_suffix(')'))
		else {
			return FALLBACK;
		};
		let nums: Vec<&str> = args.split(',').map(str::trim).collect();
		let channel = |i: usize| nums.get(i).and_then(|s| s.parse::<u8>().ok()).unwrap_or(128);
		Color::rgba(
			channel(0),
			channel(1),
			channel(2),
			nums.get(3).and_then(|s| s.parse::<f64>().ok()).unwrap_or(1.0),
		)
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Edge color of the radial gradient, or the flat fill.
	pub color: Color,
	/// Center color of the radial gradient.
	pub color_secondary: Color,
	/// Radial gradient instead of a flat fill.
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Opacity applied to the snapshot's edge color at rest.
	pub alpha: f64,
	/// Ink for predicate labels.
	pub label_color: Color,
	/// Bend edges so opposite directions stay apart.
	pub curved: bool,
	/// Curve tension (0.0 = straight, 1.0 = very curved)
	pub curve_tension: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Shade nodes with a radial highlight.
	pub use_gradient: bool,
	/// Border/stroke width in screen pixels (0 = no border)
	pub border_width: f64,
	/// Node outline color.
	pub border_color: Color,
	/// Ink for node labels.
	pub label_color: Color,
	/// Color nodes fade towards when another node's neighborhood is highlighted.
	pub dimmed: Color,
	/// Ring drawn around the hovered node.
	pub ring_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme identifier, also set as the page's `data-theme`.
	pub name: &'static str,
	/// Canvas background.
	pub background: BackgroundStyle,
	/// Edge lines and labels.
	pub edge: EdgeStyle,
	/// Node fill, outline and labels.
	pub node: NodeStyle,
}

impl Theme {
	/// Dark canvas with soft gradient nodes (default)
	pub fn dark() -> Self {
		Self {
			name: "dark",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			edge: EdgeStyle {
				alpha: 0.7,
				label_color: Color::rgba(200, 210, 220, 0.75),
				curved: false,
				curve_tension: 0.0,
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(255, 255, 255, 0.9),
				dimmed: Color::rgb(60, 66, 74),
				ring_color: Color::rgb(255, 255, 255),
			},
		}
	}

	/// White canvas with flat nodes, close to a classic sigma.js look
	pub fn light() -> Self {
		Self {
			name: "light",
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: false,
				vignette: 0.0,
			},
			edge: EdgeStyle {
				alpha: 0.9,
				label_color: Color::rgba(60, 60, 60, 0.85),
				curved: false,
				curve_tension: 0.0,
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 1.0,
				border_color: Color::rgba(0, 0, 0, 0.25),
				label_color: Color::rgb(20, 20, 20),
				dimmed: Color::rgb(226, 226, 226),
				ring_color: Color::rgb(30, 30, 30),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}
