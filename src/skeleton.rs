//! Loading placeholders for lazily loaded images and for content that is still on its way.
//!
//! Images are marked up with `data-src` instead of `src`. [`install`] covers each of them with a
//! `skeleton-image` block, starts the download and removes the block once the image has loaded.

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

static LAZY_IMAGES: &str = "img[data-src]";
static GALLERY_IMAGES: &str = ".galeria-fotos-miniatura, .galeria-gatos-miniatura";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	Gallery,
	Table,
	/// A bare container, for layouts without a skeleton of their own.
	Blank,
}
impl Kind {
	pub fn from_name(name: &str) -> Self {
		match name {
			"gallery" => Self::Gallery,
			"table" => Self::Table,
			other => {
				log::debug!(target: "skeleton", "No skeleton for {other:?}, showing a blank one");
				Self::Blank
			}
		}
	}

	fn markup(&self) -> String {
		match self {
			Self::Gallery => {
				let tile = r#"<div class="enlace-foto"><div class="marco-foto"><div class="skeleton-thumbnail"></div></div><div class="enlace-foto-fecha"><div class="skeleton-text" style="width: 80px; height: 1em;"></div></div></div>"#;
				tile.repeat(9)
			}
			Self::Table => {
				let row = r#"<tr><td class="titulo"><div class="skeleton-text"></div></td><td class="autor"><div class="skeleton-text"></div></td><td class="fecha"><div class="skeleton-text"></div></td><td class="acciones"><div class="skeleton-text"></div></td></tr>"#;
				format!(r#"<table class="tabla-informes">{}</table>"#, row.repeat(6))
			}
			Self::Blank => String::new(),
		}
	}
}

/// Puts skeletons over every lazy image in the page and fades in gallery images that are already there.
pub fn install(document: &Document) {
	for image in select::<HtmlImageElement>(document, LAZY_IMAGES) {
		if let Err(err) = cover(document, image) {
			log::warn!(target: "skeleton", "{err:?}");
		}
	}
	for image in select::<HtmlImageElement>(document, GALLERY_IMAGES) {
		if image.complete() {
			let _ = image.style().set_property("opacity", "1");
		}
	}
}

fn select<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
	let Ok(nodes) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|idx| nodes.item(idx))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

fn cover(document: &Document, image: HtmlImageElement) -> Result<(), JsValue> {
	let Some(parent) = image.parent_element() else {
		return Ok(());
	};
	let skeleton: HtmlElement = document.create_element("div")?.unchecked_into();
	skeleton.set_class_name("skeleton-image");
	let style = skeleton.style();
	style.set_property("position", "absolute")?;
	style.set_property("top", "0")?;
	style.set_property("left", "0")?;
	style.set_property("width", "100%")?;
	style.set_property("height", "100%")?;

	let position = gloo_utils::window()
		.get_computed_style(&parent)?
		.map(|computed| computed.get_property_value("position"))
		.transpose()?;
	if position.as_deref() == Some("static") {
		if let Some(parent) = parent.dyn_ref::<HtmlElement>() {
			parent.style().set_property("position", "relative")?;
		}
	}
	parent.insert_before(&skeleton, Some(&image))?;

	EventListener::once(&image, "load", {
		let image = image.clone();
		move |_| {
			skeleton.remove();
			let _ = image.style().set_property("opacity", "1");
		}
	})
	.forget();

	if let Some(src) = image.get_attribute("data-src") {
		image.set_src(&src);
	}
	image.remove_attribute("data-src")?;
	Ok(())
}

/// Appends a placeholder of the given kind to `container` and returns it, to be passed to [`hide`].
pub fn show(container: &Element, kind: Kind) -> Result<Element, JsValue> {
	let document = gloo_utils::document();
	let placeholder = document.create_element("div")?;
	placeholder.set_class_name("skeleton-container");
	placeholder.set_inner_html(&kind.markup());
	container.append_child(&placeholder)?;
	Ok(placeholder)
}

/// Removes a placeholder created by [`show`]; does nothing if it was already taken out.
pub fn hide(placeholder: &Element) {
	if placeholder.parent_element().is_some() {
		placeholder.remove();
	}
}
