use crate::{
	calendar::window::{weeks_of, WEEKDAYS},
	data::Marker,
	locale::Locale,
};
use std::{collections::BTreeMap, rc::Rc};
use time::{Date, Month};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct MonthGridProps {
	pub year: i32,
	pub month: Month,
	pub locale: Locale,
	pub markers: Rc<BTreeMap<Date, Marker>>,
	pub on_day: Callback<Date>,
	#[prop_or_default]
	pub disabled: bool,
}

#[function_component]
pub fn MonthGrid(props: &MonthGridProps) -> Html {
	let weeks = match weeks_of(props.year, props.month) {
		Ok(weeks) => weeks,
		Err(err) => {
			log::error!(target: "calendar", "Cannot lay out {:?} {}: {err}", props.month, props.year);
			return html!();
		}
	};
	let title = format!("{} {}", props.locale.month_name(props.month), props.year);
	html! {
		<div class="calendar-month">
			<div class="calendar-title">{title}</div>
			<table class="calendar-grid">
				<thead>
					<tr>
						{WEEKDAYS.iter().map(|weekday| html! {
							<th>{props.locale.weekday_short(*weekday)}</th>
						}).collect::<Html>()}
					</tr>
				</thead>
				<tbody>
					{weeks.iter().map(|week| html! {
						<tr>{week.iter().map(|cell| day_cell(props, *cell)).collect::<Html>()}</tr>
					}).collect::<Html>()}
				</tbody>
			</table>
		</div>
	}
}

fn day_cell(props: &MonthGridProps, cell: Option<Date>) -> Html {
	let Some(date) = cell else {
		return html! { <td class="calendar-day is-empty" /> };
	};
	let marker = props.markers.get(&date);
	let onclick = props.on_day.reform(move |_: MouseEvent| date);
	let classes = classes!("calendar-day", marker.map(|_| "feeding-date"));
	html! {
		<td class={classes} title={marker.map(|marker| marker.label.clone())}>
			<button type="button" disabled={props.disabled} {onclick}>
				<span class="day-number">{date.day().to_string()}</span>
				if let Some(marker) = marker {
					<span class="dot" style={format!("background-color: {};", marker.color.css())} />
				}
			</button>
		</td>
	}
}
