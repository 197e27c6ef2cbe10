use wasm_bindgen::prelude::*;

pub mod calendar;
pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod locale;
pub mod logging;
pub mod rpc;
pub mod skeleton;
pub mod util;

use components::{FeedingCalendar, FeedingCalendarProps};
use config::Config;

/// Elements the page marks as feeding calendar mount points.
static MOUNT_POINTS: &str = ".feeding-calendar[data-colonia-id]";

/// Renders a feeding calendar for `config` inside `element`.
pub fn mount(element: web_sys::Element, config: Config) -> yew::AppHandle<FeedingCalendar> {
	log::info!(target: "calendar", "Creating calendar app for colony {}", config.colony_id);
	yew::Renderer::<FeedingCalendar>::with_root_and_props(element, FeedingCalendarProps { config }).render()
}

/// Mounts a calendar in every mount point of the page, returning how many were mounted.
pub fn mount_all(document: &web_sys::Document) -> anyhow::Result<usize> {
	let nodes = document
		.query_selector_all(MOUNT_POINTS)
		.map_err(|err| anyhow::anyhow!("Failed to look up calendar mount points: {err:?}"))?;
	let mut mounted = 0;
	for node in (0..nodes.length()).filter_map(|idx| nodes.item(idx)) {
		let Ok(element) = node.dyn_into::<web_sys::Element>() else {
			continue;
		};
		match Config::from_element(&element) {
			Ok(config) => {
				// The app lives as long as the page does.
				let _ = mount(element, config);
				mounted += 1;
			}
			Err(err) => log::error!(target: "calendar", "Skipping calendar mount point: {err}"),
		}
	}
	Ok(mounted)
}

#[wasm_bindgen(start)]
pub fn start() {
	logging::init(log::LevelFilter::Info);
	let document = gloo_utils::document();
	when_ready(&document, move |document| {
		skeleton::install(document);
		match mount_all(document) {
			Ok(mounted) => log::debug!(target: "calendar", "Mounted {mounted} calendars"),
			Err(err) => log::error!(target: "calendar", "{err:?}"),
		}
	});
}

fn when_ready(document: &web_sys::Document, run: impl FnOnce(&web_sys::Document) + 'static) {
	if document.ready_state() != "loading" {
		run(document);
		return;
	}
	let target = document.clone();
	gloo_events::EventListener::once(document, "DOMContentLoaded", move |_| run(&target)).forget();
}

/// A calendar mounted from javascript.
#[wasm_bindgen]
pub struct CalendarApp {
	handle: yew::AppHandle<FeedingCalendar>,
}

#[wasm_bindgen]
impl CalendarApp {
	pub fn destroy(self) {
		self.handle.destroy();
	}
}

/// `createCalendarApp(element, options)` where `options` is a colony id or
/// `{ colonia_id, rpc_url?, language? }`.
#[wasm_bindgen(js_name = createCalendarApp)]
pub fn create_calendar_app(element: web_sys::Element, options: JsValue) -> Result<CalendarApp, JsError> {
	let config = Config::from_js(options)?;
	Ok(CalendarApp {
		handle: mount(element, config),
	})
}

#[wasm_bindgen(js_name = showSkeleton)]
pub fn show_skeleton(container: &web_sys::Element, kind: Option<String>) -> Result<web_sys::Element, JsValue> {
	let kind = kind.as_deref().map_or(skeleton::Kind::Gallery, skeleton::Kind::from_name);
	skeleton::show(container, kind)
}

#[wasm_bindgen(js_name = hideSkeleton)]
pub fn hide_skeleton(placeholder: &web_sys::Element) {
	skeleton::hide(placeholder);
}
