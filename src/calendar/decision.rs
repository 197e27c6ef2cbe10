use crate::data::{User, UserId, Viewer};

/// Who the viewer asks the server to put on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	User(UserId),
	/// Explicitly clear the day.
	Unassigned,
	/// Assign or release the viewer's own day; the server works out which from the session.
	ToggleOwn,
}
impl Target {
	/// `set_feeding_assignment` encodes the target in `user_id`: an id, `0` to clear, or `null` to toggle.
	pub fn wire_user_id(&self) -> Option<u64> {
		match self {
			Self::User(id) => Some(id.0),
			Self::Unassigned => Some(0),
			Self::ToggleOwn => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
	/// A volunteer clicked a day somebody else is feeding on.
	AssignedToOther,
	/// An admin clicked an empty day but nobody can be assigned to the colony.
	NoEligibleUsers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	Send(Target),
	Ignore(IgnoreReason),
}

/// What a click on a day currently fed by `current` should ask the server for.
///
/// Admins walk the eligible users in order: empty, first, second, ..., last, empty again.
/// An assignee that is no longer eligible restarts the walk at the first user.
/// Everyone else may only toggle their own days.
pub fn next_target(viewer: &Viewer, available_users: &[User], current: Option<&User>) -> Decision {
	if !viewer.is_admin {
		return match current {
			Some(user) if !viewer.is(user) => Decision::Ignore(IgnoreReason::AssignedToOther),
			_ => Decision::Send(Target::ToggleOwn),
		};
	}
	let Some(current) = current else {
		return match available_users.first() {
			Some(first) => Decision::Send(Target::User(first.id)),
			None => Decision::Ignore(IgnoreReason::NoEligibleUsers),
		};
	};
	let target = match available_users.iter().position(|user| user == current) {
		Some(idx) => match available_users.get(idx + 1) {
			Some(next) => Target::User(next.id),
			None => Target::Unassigned,
		},
		None => match available_users.first() {
			Some(first) => Target::User(first.id),
			None => Target::Unassigned,
		},
	};
	Decision::Send(target)
}

#[cfg(test)]
mod test {
	use super::*;

	fn admin() -> Viewer {
		Viewer {
			user_id: Some(UserId(100)),
			is_admin: true,
		}
	}

	fn volunteer(id: u64) -> Viewer {
		Viewer {
			user_id: Some(UserId(id)),
			is_admin: false,
		}
	}

	fn users() -> Vec<User> {
		vec![User::new(1, "ana"), User::new(2, "bea"), User::new(3, "carla")]
	}

	#[test]
	fn admin_starts_with_first_user() {
		assert_eq!(next_target(&admin(), &users(), None), Decision::Send(Target::User(UserId(1))));
	}

	#[test]
	fn admin_advances_to_next_user() {
		let users = users();
		assert_eq!(next_target(&admin(), &users, Some(&users[0])), Decision::Send(Target::User(UserId(2))));
		assert_eq!(next_target(&admin(), &users, Some(&users[1])), Decision::Send(Target::User(UserId(3))));
	}

	#[test]
	fn admin_clears_after_last_user() {
		let users = users();
		assert_eq!(next_target(&admin(), &users, Some(&users[2])), Decision::Send(Target::Unassigned));
	}

	#[test]
	fn admin_restarts_when_assignee_is_no_longer_eligible() {
		let stale = User::new(77, "gone");
		assert_eq!(next_target(&admin(), &users(), Some(&stale)), Decision::Send(Target::User(UserId(1))));
		assert_eq!(next_target(&admin(), &[], Some(&stale)), Decision::Send(Target::Unassigned));
	}

	#[test]
	fn admin_without_eligible_users_ignores_empty_days() {
		assert_eq!(next_target(&admin(), &[], None), Decision::Ignore(IgnoreReason::NoEligibleUsers));
	}

	#[test]
	fn volunteer_toggles_own_or_empty_days() {
		let own = User::new(2, "bea");
		assert_eq!(next_target(&volunteer(2), &users(), None), Decision::Send(Target::ToggleOwn));
		assert_eq!(next_target(&volunteer(2), &users(), Some(&own)), Decision::Send(Target::ToggleOwn));
	}

	#[test]
	fn volunteer_cannot_touch_other_days() {
		let other = User::new(1, "ana");
		assert_eq!(
			next_target(&volunteer(2), &users(), Some(&other)),
			Decision::Ignore(IgnoreReason::AssignedToOther)
		);
		assert_eq!(
			next_target(&Viewer::default(), &users(), Some(&other)),
			Decision::Ignore(IgnoreReason::AssignedToOther)
		);
	}

	#[test]
	fn target_wire_encoding() {
		assert_eq!(Target::User(UserId(5)).wire_user_id(), Some(5));
		assert_eq!(Target::Unassigned.wire_user_id(), Some(0));
		assert_eq!(Target::ToggleOwn.wire_user_id(), None);
	}
}
