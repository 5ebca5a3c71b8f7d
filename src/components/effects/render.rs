//! DOM presentation for the animated layers.
//!
//! The models in `particles` and `floating` never touch the DOM; the layers
//! here own the visual nodes and copy model state onto their inline styles
//! once per frame.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::floating::{Extent, FloatingField};
use super::particles::ParticleField;
use super::theme::NeonPalette;

/// Collect every `HtmlElement` matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
	let _ = el.style().set_property(property, value);
}

/// One absolutely positioned dot per particle inside the particle container.
pub struct ParticleLayer {
	nodes: Vec<HtmlElement>,
}

impl ParticleLayer {
	/// Create a visual node for every particle and append it to `container`.
	pub fn mount(
		container: &Element,
		field: &ParticleField,
		palette: &NeonPalette,
	) -> Result<Self, JsValue> {
		let document = container
			.owner_document()
			.ok_or_else(|| JsValue::from_str("particle container is detached"))?;
		let mut nodes = Vec::with_capacity(field.len());

		for p in field.particles() {
			let el: HtmlElement = document.create_element("div")?.dyn_into()?;
			el.set_class_name("particle");
			el.style().set_css_text(&format!(
				"position: absolute; width: {size}px; height: {size}px; background: {color}; \
				 border-radius: 50%; left: {x}vw; top: {y}vh; filter: blur(1px); z-index: -1;",
				size = p.size,
				color = palette.particle(p.color).to_css(),
				x = p.x,
				y = p.y,
			));
			container.append_child(&el)?;
			nodes.push(el);
		}

		Ok(Self { nodes })
	}

	/// Copy positions and pulse scale onto the nodes.
	pub fn sync(&self, field: &ParticleField) {
		for (el, p) in self.nodes.iter().zip(field.particles()) {
			set_style(el, "left", &format!("{}vw", p.x));
			set_style(el, "top", &format!("{}vh", p.y));
			set_style(el, "transform", &format!("scale({})", p.scale));
		}
	}
}

/// The page's pre-existing floating elements, styled from the model.
pub struct FloatingLayer {
	nodes: Vec<HtmlElement>,
	window: Window,
}

impl FloatingLayer {
	/// Apply each shape's size, colors and starting position to its element.
	pub fn bind(
		nodes: Vec<HtmlElement>,
		window: Window,
		field: &FloatingField,
		palette: &NeonPalette,
	) -> Self {
		for (el, s) in nodes.iter().zip(field.shapes()) {
			set_style(el, "width", &format!("{}px", s.size));
			set_style(el, "height", &format!("{}px", s.size));
			set_style(el, "background", &palette.glow_gradient(s.style_index));
			set_style(
				el,
				"border",
				&format!("1px solid {}", palette.border(s.style_index).to_css()),
			);
			set_style(el, "left", &format!("{}vw", s.x));
			set_style(el, "top", &format!("{}vh", s.y));
			set_style(el, "transform", &format!("rotate({}deg)", s.rotation));
		}
		Self { nodes, window }
	}

	/// Number of bound elements.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Current rendered size of every element relative to the viewport.
	pub fn measure(&self) -> Vec<Extent> {
		let Some((vw, vh)) = viewport_size(&self.window).filter(|(w, h)| *w > 0.0 && *h > 0.0)
		else {
			return vec![Extent::default(); self.nodes.len()];
		};
		self.nodes
			.iter()
			.map(|el| {
				let rect = el.get_bounding_client_rect();
				Extent {
					width_pct: rect.width() / vw * 100.0,
					height_pct: rect.height() / vh * 100.0,
				}
			})
			.collect()
	}

	/// Copy position, rotation and opacity onto the elements.
	pub fn sync(&self, field: &FloatingField) {
		for (el, s) in self.nodes.iter().zip(field.shapes()) {
			set_style(el, "left", &format!("{}vw", s.x));
			set_style(el, "top", &format!("{}vh", s.y));
			set_style(el, "transform", &format!("rotate({}deg)", s.rotation));
			set_style(el, "opacity", &s.opacity.to_string());
		}
	}
}
