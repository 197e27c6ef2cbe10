//! The feeding-assignment calendar of one colony.
//!
//! [`Calendar`] owns the [`CalendarState`] for a mounted colony view. It is loaded once from the
//! server, and then mutated only by the replies to day clicks; the server is always the authority
//! on who ended up feeding on a day.

use crate::{
	data::{Assignment, ColonyId, Marker, User, Viewer},
	rpc::{
		self,
		methods::{self, AssignmentReply, FeedingDate, FeedingDates, FeedingUsers},
		Channel,
	},
};
use std::{cell::RefCell, collections::BTreeMap};
use time::Date;

mod decision;
pub use decision::*;
pub mod window;
pub use window::DisplayWindow;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("another calendar update is still in progress")]
	Busy,
	#[error(transparent)]
	Rpc(#[from] rpc::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
	/// The server put someone on the day.
	Assigned(Assignment),
	/// The server left the day without a volunteer.
	Cleared(Date),
	/// The click was not allowed to change anything; nothing was sent.
	Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
	pub colony_id: ColonyId,
	pub assignments: BTreeMap<Date, Assignment>,
	pub available_users: Vec<User>,
	pub viewer: Viewer,
	pub is_loading: bool,
}
impl CalendarState {
	pub fn new(colony_id: ColonyId) -> Self {
		Self {
			colony_id,
			assignments: BTreeMap::new(),
			available_users: Vec::new(),
			viewer: Viewer::default(),
			is_loading: false,
		}
	}

	pub fn assignment(&self, date: Date) -> Option<&Assignment> {
		self.assignments.get(&date)
	}

	pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
		self.assignments.values().map(|assignment| assignment.marker(&self.viewer))
	}

	/// What clicking `date` would ask of the server right now.
	pub fn decide(&self, date: Date) -> Decision {
		let current = self.assignment(date).map(|assignment| &assignment.user);
		next_target(&self.viewer, &self.available_users, current)
	}

	fn populate(&mut self, dates: FeedingDates, users: FeedingUsers) {
		self.viewer = users.viewer();
		self.available_users = users.users;
		self.assignments = dates
			.dates
			.into_iter()
			.filter_map(FeedingDate::into_assignment)
			.map(|assignment| (assignment.date, assignment))
			.collect();
	}

	fn clear(&mut self) {
		self.viewer = Viewer::default();
		self.available_users.clear();
		self.assignments.clear();
	}

	fn apply(&mut self, date: Date, assignee: Option<User>) -> ClickOutcome {
		match assignee {
			Some(user) => {
				let assignment = Assignment { date, user };
				self.assignments.insert(date, assignment.clone());
				ClickOutcome::Assigned(assignment)
			}
			None => {
				self.assignments.remove(&date);
				ClickOutcome::Cleared(date)
			}
		}
	}
}

/// Releases the loading flag when an operation finishes, however it finishes.
struct LoadingGuard<'a>(&'a RefCell<CalendarState>);
impl Drop for LoadingGuard<'_> {
	fn drop(&mut self) {
		self.0.borrow_mut().is_loading = false;
	}
}

pub struct Calendar<C> {
	channel: C,
	state: RefCell<CalendarState>,
}
impl<C> std::fmt::Debug for Calendar<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Calendar").field("state", &self.state).finish()
	}
}
impl<C> Calendar<C>
where
	C: Channel,
{
	pub fn new(colony_id: ColonyId, channel: C) -> Self {
		Self {
			channel,
			state: RefCell::new(CalendarState::new(colony_id)),
		}
	}

	pub fn colony_id(&self) -> ColonyId {
		self.state.borrow().colony_id
	}

	pub fn is_loading(&self) -> bool {
		self.state.borrow().is_loading
	}

	pub fn snapshot(&self) -> CalendarState {
		self.state.borrow().clone()
	}

	pub fn assignment(&self, date: Date) -> Option<Assignment> {
		self.state.borrow().assignment(date).cloned()
	}

	pub fn markers(&self) -> Vec<Marker> {
		self.state.borrow().markers().collect()
	}

	pub fn markers_within(&self, window: &DisplayWindow) -> Vec<Marker> {
		self.state
			.borrow()
			.markers()
			.filter(|marker| window.contains(marker.date))
			.collect()
	}

	fn begin(&self) -> Option<LoadingGuard<'_>> {
		let mut state = self.state.borrow_mut();
		if state.is_loading {
			return None;
		}
		state.is_loading = true;
		Some(LoadingGuard(&self.state))
	}

	/// Fetches the colony's assignments together with the eligible users and the viewer.
	/// The state is only filled in once both replies arrived; on failure the calendar is left empty.
	pub async fn load(&self) -> Result<(), Error> {
		let Some(_guard) = self.begin() else {
			return Err(Error::Busy);
		};
		let colony_id = self.colony_id();
		let fetched = futures::try_join!(
			methods::get_feeding_dates(colony_id).send(&self.channel),
			methods::get_colony_feeding_users(colony_id).send(&self.channel),
		);
		match fetched {
			Ok((dates, users)) => {
				let count = dates.dates.len();
				self.state.borrow_mut().populate(dates, users);
				log::debug!(target: "calendar", "Loaded {count} feeding dates for colony {colony_id}");
				Ok(())
			}
			Err(err) => {
				log::error!(target: "calendar", "Error loading feeding dates: {err}");
				self.state.borrow_mut().clear();
				Err(err.into())
			}
		}
	}

	/// Handles a click on `date`, asking the server to move the day to whoever comes next.
	///
	/// Only one click is processed at a time; a click arriving while another one is in flight fails
	/// with [`Error::Busy`]. The state changes only after the server confirmed what happened to the
	/// day, and it changes to exactly what the server declared.
	pub async fn click_day(&self, date: Date) -> Result<ClickOutcome, Error> {
		let Some(_guard) = self.begin() else {
			return Err(Error::Busy);
		};
		let (colony_id, decision) = {
			let state = self.state.borrow();
			(state.colony_id, state.decide(date))
		};
		let target = match decision {
			Decision::Send(target) => target,
			Decision::Ignore(reason) => {
				log::debug!(target: "calendar", "Ignoring click on {date}: {reason:?}");
				return Ok(ClickOutcome::Ignored(reason));
			}
		};
		let reply = methods::set_feeding_assignment(date, colony_id, target)
			.send(&self.channel)
			.await
			.and_then(AssignmentReply::assignee);
		let assignee = match reply {
			Ok(assignee) => assignee,
			Err(err) => {
				log::error!(target: "calendar", "Error toggling feeding date {date}: {err}");
				return Err(err.into());
			}
		};
		log::debug!(target: "calendar", "Set feeding assignment {date} ({target:?}): {assignee:?}");
		let outcome = self.state.borrow_mut().apply(date, assignee);
		Ok(outcome)
	}
}
