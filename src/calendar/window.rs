use time::{error::ComponentRange, Date, Month, Weekday};

/// The span of days the calendar shows: the current month and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
	pub first: Date,
	pub last: Date,
}
impl DisplayWindow {
	pub fn around(today: Date) -> Result<Self, ComponentRange> {
		let first = Date::from_calendar_date(today.year(), today.month(), 1)?;
		let (year, month) = following(today.year(), today.month());
		let last = Date::from_calendar_date(year, month, time::util::days_in_year_month(year, month))?;
		Ok(Self { first, last })
	}

	pub fn contains(&self, date: Date) -> bool {
		self.first <= date && date <= self.last
	}

	/// Every `(year, month)` the window touches, in order.
	pub fn months(&self) -> Vec<(i32, Month)> {
		let mut months = Vec::with_capacity(2);
		let (mut year, mut month) = (self.first.year(), self.first.month());
		let end = (self.last.year(), self.last.month() as u8);
		while (year, month as u8) <= end {
			months.push((year, month));
			(year, month) = following(year, month);
		}
		months
	}
}

fn following(year: i32, month: Month) -> (i32, Month) {
	match month {
		Month::December => (year + 1, Month::January),
		month => (year, month.next()),
	}
}

/// Lays a month out as Monday-first weeks; cells outside the month are `None`.
pub fn weeks_of(year: i32, month: Month) -> Result<Vec<[Option<Date>; 7]>, ComponentRange> {
	let first = Date::from_calendar_date(year, month, 1)?;
	let mut weeks = Vec::with_capacity(6);
	let mut week = [None; 7];
	let mut column = first.weekday().number_days_from_monday() as usize;
	let mut day = Some(first);
	while let Some(date) = day.filter(|date| date.month() == month) {
		week[column] = Some(date);
		column += 1;
		if column == 7 {
			weeks.push(week);
			week = [None; 7];
			column = 0;
		}
		day = date.next_day();
	}
	if column > 0 {
		weeks.push(week);
	}
	Ok(weeks)
}

pub static WEEKDAYS: [Weekday; 7] = [
	Weekday::Monday,
	Weekday::Tuesday,
	Weekday::Wednesday,
	Weekday::Thursday,
	Weekday::Friday,
	Weekday::Saturday,
	Weekday::Sunday,
];
