use crate::{data::ColonyId, locale::Locale};
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub static DEFAULT_RPC_URL: &str = "/rpc/";
static THEME_KEY: &str = "theme";

/// Everything a feeding calendar needs to know about the page it is mounted in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
	#[serde(alias = "colonia_id", alias = "coloniaId", alias = "colonyId")]
	pub colony_id: ColonyId,
	#[serde(default = "default_rpc_url", alias = "rpcUrl")]
	pub rpc_url: String,
	#[serde(default, alias = "language")]
	pub locale: Locale,
}

fn default_rpc_url() -> String {
	DEFAULT_RPC_URL.to_owned()
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("missing attribute data-{0}")]
	Missing(&'static str),
	#[error("invalid colony id {0:?}")]
	InvalidColony(String, #[source] std::num::ParseIntError),
	#[error("invalid calendar options: {0}")]
	Options(String),
}

impl Config {
	pub fn new(colony_id: impl Into<ColonyId>) -> Self {
		Self {
			colony_id: colony_id.into(),
			rpc_url: default_rpc_url(),
			locale: Locale::default(),
		}
	}

	/// Reads the options handed to `createCalendarApp`: either just the colony id or an options object.
	pub fn from_js(value: JsValue) -> Result<Self, Error> {
		if let Some(id) = value.as_f64() {
			if id < 0.0 || id.fract() != 0.0 {
				return Err(Error::Options(format!("{id} is not a colony id")));
			}
			return Ok(Self::new(id as u64));
		}
		if let Some(id) = value.as_string() {
			return Self::from_attributes(|name| (name == "colonia-id").then(|| id.clone()));
		}
		serde_wasm_bindgen::from_value(value).map_err(|err| Error::Options(err.to_string()))
	}

	/// Reads the `data-colonia-id`, `data-rpc-url` and `data-language` attributes of a mount point.
	pub fn from_element(element: &web_sys::Element) -> Result<Self, Error> {
		Self::from_attributes(|name| element.get_attribute(&format!("data-{name}")))
	}

	pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let colony = get("colonia-id").ok_or(Error::Missing("colonia-id"))?;
		let colony_id = colony.parse().map_err(|err| Error::InvalidColony(colony.clone(), err))?;
		let rpc_url = get("rpc-url").filter(|url| !url.trim().is_empty()).unwrap_or_else(default_rpc_url);
		let locale = get("language").map(Locale::from).unwrap_or_default();
		Ok(Self {
			colony_id,
			rpc_url,
			locale,
		})
	}
}

/// The site keeps its light/dark choice as a plain string in local storage.
pub fn is_dark_theme() -> bool {
	let stored = LocalStorage::raw().get_item(THEME_KEY).ok().flatten();
	stored.as_deref() == Some("dark")
}

#[cfg(test)]
mod test {
	use super::*;
	use std::collections::HashMap;

	fn attributes(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map = pairs
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect::<HashMap<_, _>>();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn attributes_with_defaults() {
		let config = Config::from_attributes(attributes(&[("colonia-id", "12")])).unwrap();
		assert_eq!(config, Config::new(12));
		assert_eq!(config.rpc_url, "/rpc/");
		assert_eq!(config.locale, Locale::Es);
	}

	#[test]
	fn attributes_override_defaults() {
		let config = Config::from_attributes(attributes(&[
			("colonia-id", " 7 "),
			("rpc-url", "/api/rpc/"),
			("language", "en"),
		]))
		.unwrap();
		assert_eq!(config.colony_id, ColonyId(7));
		assert_eq!(config.rpc_url, "/api/rpc/");
		assert_eq!(config.locale, Locale::En);
	}

	#[test]
	fn colony_is_required() {
		assert!(matches!(
			Config::from_attributes(attributes(&[])),
			Err(Error::Missing("colonia-id"))
		));
		assert!(matches!(
			Config::from_attributes(attributes(&[("colonia-id", "gatos-del-parque")])),
			Err(Error::InvalidColony(..))
		));
	}

	#[test]
	fn options_object_accepts_camel_case() {
		let config: Config = serde_json::from_str(r#"{ "coloniaId": 3, "rpcUrl": "/x/", "language": "en" }"#).unwrap();
		assert_eq!(config.colony_id, ColonyId(3));
		assert_eq!(config.rpc_url, "/x/");
		assert_eq!(config.locale, Locale::En);
	}

	#[test]
	fn options_and_attributes_agree_on_language_tags() {
		for (tag, locale) in [("en-US", Locale::En), ("EN", Locale::En), ("es-ES", Locale::Es), ("gl", Locale::Es)] {
			let options = serde_json::json!({ "colonia_id": 3, "language": tag });
			let from_options: Config = serde_json::from_value(options).unwrap();
			let from_attributes = Config::from_attributes(attributes(&[("colonia-id", "3"), ("language", tag)])).unwrap();
			assert_eq!(from_options.locale, locale, "options with {tag}");
			assert_eq!(from_attributes.locale, locale, "attributes with {tag}");
		}
	}
}
