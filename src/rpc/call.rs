use super::{Channel, Error};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A typed remote procedure call waiting to be sent over a [`Channel`].
pub struct Call<T> {
	method: &'static str,
	params: Result<Value, serde_json::Error>,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Call<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Call")
			.field("method", &self.method)
			.field("params", &self.params)
			.finish()
	}
}
impl<T> Call<T>
where
	T: DeserializeOwned,
{
	pub fn new(method: &'static str) -> Self {
		Self {
			method,
			params: Ok(Value::Object(Default::default())),
			marker: Default::default(),
		}
	}

	pub fn with_params<P>(mut self, params: &P) -> Self
	where
		P: Serialize + ?Sized,
	{
		self.params = serde_json::to_value(params);
		self
	}

	pub async fn send<C>(self, channel: &C) -> Result<T, Error>
	where
		C: Channel + ?Sized,
	{
		let params = self.params.map_err(|err| Error::Encode(err.to_string()))?;
		log::debug!(target: "rpc", "-> {} {params}", self.method);
		let value = channel.call(self.method, params).await?;
		serde_json::from_value(value.clone()).map_err(|err| InvalidJson(value.to_string(), err).into())
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
