//! JSON-RPC 2.0 plumbing between the calendar and the colony server.
//!
//! Everything the calendar reads or mutates goes through a [`Channel`]. The browser build talks to
//! the server with [`HttpChannel`]; tests drive the calendar with an in-memory channel instead.

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod call;
pub use call::*;
pub mod csrf;
mod http;
pub use http::*;
pub mod methods;

/// The single endpoint every remote procedure call goes through.
pub trait Channel {
	/// Invokes `method` with `params`, resolving to the `result` member of the reply.
	fn call<'a>(&'a self, method: &'a str, params: Value) -> LocalBoxFuture<'a, Result<Value, Error>>;
}

impl<C> Channel for std::rc::Rc<C>
where
	C: Channel + ?Sized,
{
	fn call<'a>(&'a self, method: &'a str, params: Value) -> LocalBoxFuture<'a, Result<Value, Error>> {
		(**self).call(method, params)
	}
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("{0}")]
	Transport(String),
	#[error("HTTP {code}: {text}")]
	Status { code: u16, text: String },
	#[error("{message}")]
	Remote { code: Option<i64>, message: String },
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("failed to encode parameters: {0}")]
	Encode(String),
	#[error("reply is missing {0}")]
	Incomplete(&'static str),
}

#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
	pub jsonrpc: &'static str,
	pub method: &'a str,
	pub params: Value,
	pub id: u64,
}
impl<'a> Envelope<'a> {
	pub fn new(method: &'a str, params: Value, id: u64) -> Self {
		Self {
			jsonrpc: "2.0",
			method,
			params,
			id,
		}
	}
}

/// A decoded response body: either a result or an error object.
#[derive(Debug, Deserialize)]
pub struct Reply {
	#[serde(default)]
	result: Option<Value>,
	#[serde(default)]
	error: Option<Value>,
}
impl Reply {
	pub fn parse(text: &str) -> Result<Self, Error> {
		serde_json::from_str(text).map_err(|err| InvalidJson(text.to_owned(), err).into())
	}

	pub fn into_result(self) -> Result<Value, Error> {
		match self.error {
			None | Some(Value::Null) => Ok(self.result.unwrap_or(Value::Null)),
			Some(error) => Err(remote_error(error)),
		}
	}
}

fn remote_error(error: Value) -> Error {
	let code = error.get("code").and_then(Value::as_i64);
	let message = match error.get("message").and_then(Value::as_str) {
		Some(message) if !message.is_empty() => message.to_owned(),
		_ => error.to_string(),
	};
	Error::Remote { code, message }
}
