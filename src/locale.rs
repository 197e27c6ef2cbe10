use serde::Deserialize;
use time::{Month, Weekday};

/// The language the calendar is drawn in, picked from a language tag like `es` or `en-GB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
	#[default]
	Es,
	En,
}
impl Locale {
	/// Anything that is not english falls back to spanish, the site's language.
	pub fn from_tag(tag: &str) -> Self {
		match tag.trim().to_ascii_lowercase().starts_with("en") {
			true => Self::En,
			false => Self::Es,
		}
	}
}
impl std::str::FromStr for Locale {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from_tag(s))
	}
}
impl From<String> for Locale {
	fn from(tag: String) -> Self {
		Self::from_tag(&tag)
	}
}

impl Locale {
	pub fn month_name(&self, month: Month) -> &'static str {
		static ES: [&str; 12] = [
			"enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre", "octubre", "noviembre",
			"diciembre",
		];
		static EN: [&str; 12] = [
			"January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November",
			"December",
		];
		let idx = month as usize - 1;
		match self {
			Self::Es => ES[idx],
			Self::En => EN[idx],
		}
	}

	pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
		static ES: [&str; 7] = ["lu", "ma", "mi", "ju", "vi", "sá", "do"];
		static EN: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
		let idx = weekday.number_days_from_monday() as usize;
		match self {
			Self::Es => ES[idx],
			Self::En => EN[idx],
		}
	}

	/// The alert shown when the server refused or failed to update a day.
	/// Errors without any message are not worth interrupting the user for.
	pub fn update_failed(&self, error: &impl std::fmt::Display) -> Option<String> {
		let message = error.to_string();
		if message.is_empty() || message == "undefined" {
			return None;
		}
		Some(match self {
			Self::Es => format!("Error al actualizar el calendario: {message}"),
			Self::En => format!("Error updating the calendar: {message}"),
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parse_language_tags() {
		assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
		assert_eq!("en-GB".parse::<Locale>().unwrap(), Locale::En);
		assert_eq!("gl".parse::<Locale>().unwrap(), Locale::Es);
	}

	#[test]
	fn deserializes_language_tags() {
		let locale: Locale = serde_json::from_str(r#""en-US""#).unwrap();
		assert_eq!(locale, Locale::En);
		let locale: Locale = serde_json::from_str(r#""ES""#).unwrap();
		assert_eq!(locale, Locale::Es);
	}

	#[test]
	fn names() {
		assert_eq!(Locale::Es.month_name(Month::March), "marzo");
		assert_eq!(Locale::En.month_name(Month::December), "December");
		assert_eq!(Locale::Es.weekday_short(Weekday::Sunday), "do");
	}

	#[test]
	fn update_failed_message() {
		assert_eq!(
			Locale::Es.update_failed(&"No autorizado").as_deref(),
			Some("Error al actualizar el calendario: No autorizado")
		);
		assert_eq!(Locale::Es.update_failed(&""), None);
	}
}
