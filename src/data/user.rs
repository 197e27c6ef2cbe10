use derivative::Derivative;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);
impl From<u64> for UserId {
	fn from(value: u64) -> Self {
		Self(value)
	}
}
impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

/// A volunteer who can be put in charge of feeding a colony on a given day.
/// Two users are the same user if their ids match, regardless of the names the server sent along.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(PartialEq, Eq)]
pub struct User {
	pub id: UserId,
	#[derivative(PartialEq = "ignore")]
	pub username: String,
	#[derivative(PartialEq = "ignore")]
	#[serde(default)]
	pub full_name: Option<String>,
}
impl User {
	pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			username: username.into(),
			full_name: None,
		}
	}

	pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
		self.full_name = Some(full_name.into());
		self
	}

	pub fn display_name(&self) -> &str {
		match &self.full_name {
			Some(name) if !name.trim().is_empty() => name.as_str(),
			_ => self.username.as_str(),
		}
	}
}

/// Who is looking at the calendar, and what they are allowed to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewer {
	pub user_id: Option<UserId>,
	pub is_admin: bool,
}
impl Viewer {
	pub fn is(&self, user: &User) -> bool {
		self.user_id == Some(user.id)
	}
}
