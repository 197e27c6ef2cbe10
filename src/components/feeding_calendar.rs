use super::MonthGrid;
use crate::{
	calendar::DisplayWindow,
	config::{self, Config},
	hooks::{use_calendar, LoadState},
};
use std::{collections::BTreeMap, rc::Rc};
use time::Date;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct FeedingCalendarProps {
	pub config: Config,
}

/// The feeding calendar of one colony: this month and the next, one dot per day somebody feeds on.
#[function_component]
pub fn FeedingCalendar(props: &FeedingCalendarProps) -> Html {
	let dark = use_state(config::is_dark_theme);
	let window = use_memo((), |_| match crate::util::today().and_then(DisplayWindow::around) {
		Ok(window) => Some(window),
		Err(err) => {
			log::error!(target: "calendar", "Cannot work out the current month: {err}");
			None
		}
	});
	let handle = match use_calendar(&props.config) {
		Ok(handle) => handle,
		Err(err) => {
			return html! { <div class="feeding-calendar has-text-danger">{err}</div> };
		}
	};
	let Some(window) = *window else {
		return html!();
	};

	let locale = props.config.locale;
	let disabled = handle.is_busy();
	let markers = Rc::new(
		handle
			.markers_within(&window)
			.into_iter()
			.map(|marker| (marker.date, marker))
			.collect::<BTreeMap<_, _>>(),
	);
	let on_day = {
		let handle = handle.clone();
		Callback::from(move |date: Date| handle.click(date, locale))
	};
	if let LoadState::Failed(err) = handle.load_state() {
		log::debug!(target: "calendar", "Showing an empty calendar after: {err}");
	}

	let classes = classes!(
		"feeding-calendar",
		(*dark).then_some("is-dark"),
		disabled.then_some("is-disabled")
	);
	html! {
		<div class={classes}>
			{window.months().into_iter().map(|(year, month)| html! {
				<MonthGrid
					key={format!("{year}-{}", month as u8)}
					{year} {month} {locale}
					markers={markers.clone()}
					on_day={on_day.clone()}
					{disabled}
				/>
			}).collect::<Html>()}
		</div>
	}
}
