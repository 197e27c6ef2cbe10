use time::{error::ComponentRange, Date};

pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// The viewer's current calendar day, in their local time zone.
#[cfg(target_family = "wasm")]
pub fn today() -> Result<Date, ComponentRange> {
	let now = js_sys::Date::new_0();
	let month = time::Month::try_from(now.get_month() as u8 + 1)?;
	Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8)
}

/// The current calendar day in UTC.
#[cfg(not(target_family = "wasm"))]
pub fn today() -> Result<Date, ComponentRange> {
	Ok(time::OffsetDateTime::now_utc().date())
}
