mod assignment;
pub use assignment::*;

mod user;
pub use user::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColonyId(pub u64);
impl From<u64> for ColonyId {
	fn from(value: u64) -> Self {
		Self(value)
	}
}
impl std::fmt::Display for ColonyId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
impl std::str::FromStr for ColonyId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(s.trim().parse()?))
	}
}
