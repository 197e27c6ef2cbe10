use crate::{
	calendar::{self, Calendar},
	config::Config,
	locale::Locale,
	rpc::HttpChannel,
};
use std::rc::Rc;
use time::Date;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

pub type PageCalendar = Calendar<HttpChannel>;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
	Pending,
	Ready,
	/// Loading failed; the calendar is shown empty but stays usable.
	Failed(AttrValue),
}

/// A mounted calendar plus the bits of component state that mirror it.
#[derive(Clone)]
pub struct CalendarHandle {
	calendar: Rc<PageCalendar>,
	load: UseStateHandle<LoadState>,
	busy: UseStateHandle<bool>,
	redraw: UseForceUpdateHandle,
	is_mounted: Rc<dyn Fn() -> bool>,
}
impl std::ops::Deref for CalendarHandle {
	type Target = PageCalendar;

	fn deref(&self) -> &Self::Target {
		&self.calendar
	}
}
impl CalendarHandle {
	pub fn load_state(&self) -> &LoadState {
		&self.load
	}

	/// Input is disabled while the calendar loads or a click is waiting on the server.
	pub fn is_busy(&self) -> bool {
		*self.busy || *self.load == LoadState::Pending || self.calendar.is_loading()
	}

	pub fn reload(&self) {
		let handle = self.clone();
		self.load.set(LoadState::Pending);
		crate::util::spawn_local("calendar", async move {
			let result = handle.calendar.load().await;
			if !(handle.is_mounted)() {
				return Ok::<(), calendar::Error>(());
			}
			match result {
				Ok(()) => handle.load.set(LoadState::Ready),
				Err(err) => handle.load.set(LoadState::Failed(err.to_string().into())),
			}
			Ok(())
		});
	}

	/// Sends a day click to the calendar and redraws once the server answered.
	/// Failures other than a click arriving mid-flight are shown to the user in an alert.
	pub fn click(&self, date: Date, locale: Locale) {
		if self.is_busy() {
			return;
		}
		let handle = self.clone();
		self.busy.set(true);
		crate::util::spawn_local("calendar", async move {
			let result = handle.calendar.click_day(date).await;
			if (handle.is_mounted)() {
				handle.busy.set(false);
				handle.redraw.force_update();
			}
			match result {
				Ok(_) | Err(calendar::Error::Busy) => Ok(()),
				Err(calendar::Error::Rpc(err)) => match locale.update_failed(&err) {
					Some(message) => gloo_utils::window().alert_with_message(&message),
					None => Ok(()),
				},
			}
		});
	}
}

/// Creates the calendar for `config` and loads it, again whenever `config` changes.
/// Fails only if the rpc endpoint cannot be turned into a url.
#[hook]
pub fn use_calendar(config: &Config) -> Result<CalendarHandle, AttrValue> {
	let calendar = use_memo(config.clone(), |config| {
		HttpChannel::for_page(&config.rpc_url)
			.map(|channel| Rc::new(Calendar::new(config.colony_id, channel)))
			.map_err(|err| AttrValue::from(format!("invalid rpc url {:?}: {err}", config.rpc_url)))
	});
	let load = use_state_eq(|| LoadState::Pending);
	let busy = use_state_eq(|| false);
	let redraw = use_force_update();
	let is_mounted = use_is_mounted();

	let handle = match &*calendar {
		Ok(calendar) => Ok(CalendarHandle {
			calendar: calendar.clone(),
			load,
			busy,
			redraw,
			is_mounted,
		}),
		Err(err) => Err(err.clone()),
	};

	use_effect_with(config.clone(), {
		let handle = handle.clone();
		move |_| {
			match &handle {
				Ok(handle) => handle.reload(),
				Err(err) => log::error!(target: "calendar", "{err}"),
			}
			|| ()
		}
	});

	handle
}
