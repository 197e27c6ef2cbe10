#![allow(dead_code)]

use colony_calendar::{
	calendar::Calendar,
	data::ColonyId,
	rpc::{self, Channel},
};
use futures::{channel::oneshot, future::LocalBoxFuture};
use serde_json::{json, Value};
use std::{
	cell::RefCell,
	collections::BTreeMap,
	rc::Rc,
};

pub const COLONY: ColonyId = ColonyId(12);

#[derive(Clone)]
pub struct Volunteer {
	pub id: u64,
	pub username: &'static str,
	pub full_name: Option<&'static str>,
}

pub fn volunteer(id: u64, username: &'static str) -> Volunteer {
	Volunteer {
		id,
		username,
		full_name: None,
	}
}

impl Volunteer {
	pub fn named(mut self, full_name: &'static str) -> Self {
		self.full_name = Some(full_name);
		self
	}

	fn to_json(&self) -> Value {
		json!({ "id": self.id, "username": self.username, "full_name": self.full_name })
	}
}

/// An in-memory colony server answering the calendar's procedures, recording every call it gets.
pub struct FakeServer {
	pub session_user: u64,
	pub is_admin: bool,
	pub users: Vec<Volunteer>,
	/// Every volunteer the server knows about, eligible or not.
	pub known: Vec<Volunteer>,
	pub days: RefCell<BTreeMap<String, u64>>,
	pub calls: RefCell<Vec<(String, Value)>>,
	/// Errors to answer the next call to a method with, instead of handling it.
	pub failures: RefCell<Vec<(&'static str, rpc::Error)>>,
	pub next_reply: RefCell<Option<Value>>,
	pub gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeServer {
	pub fn new(session_user: u64, is_admin: bool, users: Vec<Volunteer>) -> Self {
		Self {
			session_user,
			is_admin,
			known: users.clone(),
			users,
			days: RefCell::new(BTreeMap::new()),
			calls: RefCell::new(Vec::new()),
			failures: RefCell::new(Vec::new()),
			next_reply: RefCell::new(None),
			gate: RefCell::new(None),
		}
	}

	pub fn knowing(mut self, volunteer: Volunteer) -> Self {
		self.known.push(volunteer);
		self
	}

	pub fn with_day(self, date: &str, user: u64) -> Self {
		self.days.borrow_mut().insert(date.to_owned(), user);
		self
	}

	pub fn fail_next(&self, method: &'static str, error: rpc::Error) {
		self.failures.borrow_mut().push((method, error));
	}

	pub fn reply_next(&self, reply: Value) {
		*self.next_reply.borrow_mut() = Some(reply);
	}

	/// Holds the next call's reply back until the returned sender fires.
	pub fn hold_next(&self) -> oneshot::Sender<()> {
		let (send, recv) = oneshot::channel();
		*self.gate.borrow_mut() = Some(recv);
		send
	}

	pub fn calls_to(&self, method: &str) -> Vec<Value> {
		self.calls
			.borrow()
			.iter()
			.filter(|(name, _)| name == method)
			.map(|(_, params)| params.clone())
			.collect()
	}

	pub fn call_count(&self) -> usize {
		self.calls.borrow().len()
	}

	fn find(&self, id: u64) -> Option<&Volunteer> {
		self.known.iter().find(|user| user.id == id)
	}

	fn handle(&self, method: &str, params: &Value) -> Result<Value, rpc::Error> {
		self.calls.borrow_mut().push((method.to_owned(), params.clone()));
		let failure = {
			let mut failures = self.failures.borrow_mut();
			let idx = failures.iter().position(|(name, _)| *name == method);
			idx.map(|idx| failures.remove(idx).1)
		};
		if let Some(err) = failure {
			return Err(err);
		}
		match method {
			"get_feeding_dates" => {
				let dates = self
					.days
					.borrow()
					.iter()
					.map(|(date, user)| {
						let user = self.find(*user);
						json!({
							"date": date,
							"user_id": user.map(|user| user.id),
							"username": user.map(|user| user.username),
							"full_name": user.and_then(|user| user.full_name),
						})
					})
					.collect::<Vec<_>>();
				Ok(json!({ "dates": dates }))
			}
			"get_colony_feeding_users" => Ok(json!({
				"is_admin": self.is_admin,
				"current_user_id": self.session_user,
				"users": self.users.iter().map(Volunteer::to_json).collect::<Vec<_>>(),
			})),
			"set_feeding_assignment" => {
				if let Some(reply) = self.next_reply.borrow_mut().take() {
					return Ok(reply);
				}
				let date = params["date_str"].as_str().unwrap_or_default().to_owned();
				let mut days = self.days.borrow_mut();
				match params["user_id"].as_u64() {
					None => match days.get(&date) {
						Some(user) if *user == self.session_user => {
							days.remove(&date);
						}
						Some(_) => {
							return Err(rpc::Error::Remote {
								code: Some(-32000),
								message: "No puedes modificar este día".into(),
							})
						}
						None => {
							days.insert(date.clone(), self.session_user);
						}
					},
					Some(0) => {
						days.remove(&date);
					}
					Some(user) => {
						days.insert(date.clone(), user);
					}
				}
				Ok(match days.get(&date).and_then(|user| self.find(*user)) {
					Some(user) => json!({
						"assigned": true,
						"user_id": user.id,
						"username": user.username,
						"full_name": user.full_name,
					}),
					None => json!({ "assigned": false }),
				})
			}
			other => Err(rpc::Error::Remote {
				code: Some(-32601),
				message: format!("Method not found: {other}"),
			}),
		}
	}
}

impl Channel for FakeServer {
	fn call<'a>(&'a self, method: &'a str, params: Value) -> LocalBoxFuture<'a, Result<Value, rpc::Error>> {
		let result = self.handle(method, &params);
		let gate = self.gate.borrow_mut().take();
		Box::pin(async move {
			if let Some(gate) = gate {
				let _ = gate.await;
			}
			result
		})
	}
}

pub fn calendar(server: FakeServer) -> (Rc<FakeServer>, Calendar<Rc<FakeServer>>) {
	let server = Rc::new(server);
	let calendar = Calendar::new(COLONY, server.clone());
	(server, calendar)
}

pub fn loaded(server: FakeServer) -> (Rc<FakeServer>, Calendar<Rc<FakeServer>>) {
	let (server, calendar) = calendar(server);
	futures::executor::block_on(calendar.load()).expect("calendar loads");
	(server, calendar)
}
