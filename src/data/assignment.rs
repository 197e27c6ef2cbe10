use super::{User, Viewer};
use time::{macros::format_description, Date};

time::serde::format_description!(pub ymd, Date, "[year]-[month]-[day]");

/// Formats a date the way the server expects it in `date_str` parameters.
pub fn format_date(date: Date) -> String {
	// Date formatting into a String cannot fail for the year range `Date` supports.
	date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// The volunteer responsible for feeding a colony on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
	pub date: Date,
	pub user: User,
}
impl Assignment {
	pub fn marker(&self, viewer: &Viewer) -> Marker {
		Marker {
			date: self.date,
			color: MarkerColor::for_user(&self.user, viewer),
			label: self.user.display_name().to_owned(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
	/// The day belongs to whoever is looking at the calendar.
	Own,
	Other,
}
impl MarkerColor {
	pub fn for_user(user: &User, viewer: &Viewer) -> Self {
		match viewer.is(user) {
			true => Self::Own,
			false => Self::Other,
		}
	}

	pub fn css(&self) -> &'static str {
		match self {
			Self::Own => "red",
			Self::Other => "blue",
		}
	}
}

/// What the calendar widget draws on an assigned day: a colored dot and a hover label.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
	pub date: Date,
	pub color: MarkerColor,
	pub label: String,
}
