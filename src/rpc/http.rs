use super::{csrf, Channel, Envelope, Error, Reply};
use futures::future::LocalBoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::cell::Cell;
use url::Url;

/// Posts JSON-RPC envelopes to the server's rpc endpoint with the session's CSRF token.
#[derive(Debug)]
pub struct HttpChannel {
	client: reqwest::Client,
	endpoint: Url,
	next_id: Cell<u64>,
}
impl HttpChannel {
	pub fn new(endpoint: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint,
			next_id: Cell::new(1),
		}
	}

	/// Builds a channel for an endpoint that may be relative to the current page, like `/rpc/`.
	pub fn for_page(endpoint: &str) -> Result<Self, url::ParseError> {
		let base = gloo_utils::document().base_uri().ok().flatten();
		Ok(Self::new(resolve_endpoint(endpoint, base.as_deref())?))
	}

	fn take_id(&self) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id.wrapping_add(1));
		id
	}
}

impl Channel for HttpChannel {
	fn call<'a>(&'a self, method: &'a str, params: Value) -> LocalBoxFuture<'a, Result<Value, Error>> {
		Box::pin(async move {
			let envelope = Envelope::new(method, params, self.take_id());
			let response = self
				.client
				.post(self.endpoint.clone())
				.header(CONTENT_TYPE, "application/json")
				.header(ACCEPT, "application/json")
				.header("X-CSRFToken", csrf::token())
				.json(&envelope)
				.send()
				.await
				.map_err(|err| Error::Transport(err.to_string()))?;
			let status = response.status();
			if !status.is_success() {
				return Err(Error::Status {
					code: status.as_u16(),
					text: status.canonical_reason().unwrap_or_default().to_owned(),
				});
			}
			let text = response.text().await.map_err(|err| Error::Transport(err.to_string()))?;
			log::debug!(target: "rpc", "<- {method} {text}");
			Reply::parse(&text)?.into_result()
		})
	}
}

/// Resolves `endpoint` against the page's base url when it is not already absolute.
pub fn resolve_endpoint(endpoint: &str, base: Option<&str>) -> Result<Url, url::ParseError> {
	match (Url::parse(endpoint), base) {
		(Ok(url), _) => Ok(url),
		(Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => Url::parse(base)?.join(endpoint),
		(Err(err), _) => Err(err),
	}
}
