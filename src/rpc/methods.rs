//! The server procedures the feeding calendar consumes, with their parameter and reply shapes.

use super::{Call, Error};
use crate::{
	calendar::Target,
	data::{format_date, ymd, Assignment, ColonyId, User, UserId, Viewer},
};
use serde::{Deserialize, Serialize};
use time::Date;

pub static GET_FEEDING_DATES: &str = "get_feeding_dates";
pub static GET_COLONY_FEEDING_USERS: &str = "get_colony_feeding_users";
pub static SET_FEEDING_ASSIGNMENT: &str = "set_feeding_assignment";

#[derive(Debug, Serialize)]
struct ColonyParams {
	colonia_id: ColonyId,
}

pub fn get_feeding_dates(colony_id: ColonyId) -> Call<FeedingDates> {
	Call::new(GET_FEEDING_DATES).with_params(&ColonyParams { colonia_id: colony_id })
}

pub fn get_colony_feeding_users(colony_id: ColonyId) -> Call<FeedingUsers> {
	Call::new(GET_COLONY_FEEDING_USERS).with_params(&ColonyParams { colonia_id: colony_id })
}

#[derive(Debug, Serialize)]
struct SetAssignmentParams {
	date_str: String,
	colonia_id: ColonyId,
	user_id: Option<u64>,
}

pub fn set_feeding_assignment(date: Date, colony_id: ColonyId, target: Target) -> Call<AssignmentReply> {
	Call::new(SET_FEEDING_ASSIGNMENT).with_params(&SetAssignmentParams {
		date_str: format_date(date),
		colonia_id: colony_id,
		user_id: target.wire_user_id(),
	})
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedingDates {
	#[serde(default)]
	pub dates: Vec<FeedingDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedingDate {
	#[serde(with = "ymd")]
	pub date: Date,
	#[serde(default)]
	pub user_id: Option<UserId>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub full_name: Option<String>,
}
impl FeedingDate {
	/// Days without a volunteer are not assignments and yield `None`.
	pub fn into_assignment(self) -> Option<Assignment> {
		let user_id = self.user_id?;
		Some(Assignment {
			date: self.date,
			user: User {
				id: user_id,
				username: self.username.unwrap_or_default(),
				full_name: self.full_name,
			},
		})
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedingUsers {
	#[serde(default)]
	pub is_admin: bool,
	#[serde(default)]
	pub current_user_id: Option<UserId>,
	#[serde(default)]
	pub users: Vec<User>,
}
impl FeedingUsers {
	pub fn viewer(&self) -> Viewer {
		Viewer {
			user_id: self.current_user_id,
			is_admin: self.is_admin,
		}
	}
}

/// How the server left the clicked day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentReply {
	pub assigned: bool,
	#[serde(default)]
	pub user_id: Option<UserId>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub full_name: Option<String>,
}
impl AssignmentReply {
	/// The user now feeding on that day, or `None` if the day was cleared.
	pub fn assignee(self) -> Result<Option<User>, Error> {
		if !self.assigned {
			return Ok(None);
		}
		let id = self.user_id.ok_or(Error::Incomplete("user_id"))?;
		Ok(Some(User {
			id,
			username: self.username.unwrap_or_default(),
			full_name: self.full_name,
		}))
	}
}
