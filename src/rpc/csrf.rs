use wasm_bindgen::JsCast;

static COOKIE_NAME: &str = "csrftoken";
static META_SELECTOR: &str = "[name=csrf-token]";

/// The session's CSRF token, attached to every request as `X-CSRFToken`.
/// Looks in the `csrftoken` cookie first and falls back to the `csrf-token` meta tag.
/// An empty token is returned when neither exists; the server will reject mutations.
pub fn token() -> String {
	let document = gloo_utils::document();
	let cookies = document
		.dyn_ref::<web_sys::HtmlDocument>()
		.and_then(|html| html.cookie().ok())
		.unwrap_or_default();
	if let Some(token) = from_cookies(&cookies) {
		return token.to_owned();
	}
	let Ok(Some(meta)) = document.query_selector(META_SELECTOR) else {
		return String::new();
	};
	meta.get_attribute("content").unwrap_or_default()
}

/// Finds the CSRF token in a `document.cookie` style string.
pub fn from_cookies(cookies: &str) -> Option<&str> {
	cookies.split(';').find_map(|cookie| {
		let (name, value) = cookie.trim().split_once('=')?;
		(name == COOKIE_NAME).then_some(value)
	})
}
