use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use snafu::OptionExt;

use crate::{error, http::Method, Result};

mod issue;
mod label;
mod milestone;
mod pull_request;
mod reaction;
mod repository;

lazy_static! {
	static ref PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
	static ref CATALOG: Vec<&'static Operation> = [
		issue::OPERATIONS,
		label::OPERATIONS,
		milestone::OPERATIONS,
		reaction::OPERATIONS,
		pull_request::OPERATIONS,
		repository::OPERATIONS,
	]
	.into_iter()
	.flat_map(|group: &'static [Operation]| group.iter())
	.collect();
}

/// How an operation decides whether GitHub's answer means success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expect {
	/// Success iff the status is one of these.
	Status(&'static [u16]),
	/// Any 2xx status.
	Success,
	/// A yes/no check: `found` answers true, `missing` answers false.
	Presence { found: u16, missing: u16 },
}

impl Expect {
	/// `None` when the status is not one the operation recognises.
	pub fn classify(&self, status: u16) -> Option<Option<bool>> {
		match *self {
			Expect::Status(codes) if codes.contains(&status) => Some(None),
			Expect::Success if (200..300).contains(&status) => Some(None),
			Expect::Presence { found, .. } if status == found => {
				Some(Some(true))
			}
			Expect::Presence { missing, .. } if status == missing => {
				Some(Some(false))
			}
			_ => None,
		}
	}

	pub fn statuses(&self) -> Vec<u16> {
		match *self {
			Expect::Status(codes) => codes.to_vec(),
			Expect::Success => (200..300).collect(),
			Expect::Presence { found, missing } => vec![found, missing],
		}
	}
}

/// One REST endpoint exposed as a named action.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
	pub name: &'static str,
	pub description: &'static str,
	pub method: Method,
	/// API path with `{placeholder}` segments filled from the arguments
	pub path: &'static str,
	pub required: &'static [&'static str],
	pub optional: &'static [&'static str],
	/// fields restricted to a fixed set of values
	pub choices: &'static [(&'static str, &'static [&'static str])],
	/// media type replacing the default `Accept`
	pub accept: Option<&'static str>,
	pub expect: Expect,
}

impl Operation {
	pub(crate) const BASE: Operation = Operation {
		name: "",
		description: "",
		method: Method::Get,
		path: "",
		required: &[],
		optional: &[],
		choices: &[],
		accept: None,
		expect: Expect::Status(&[200]),
	};

	pub fn placeholders(&self) -> Vec<&'static str> {
		PLACEHOLDER
			.captures_iter(self.path)
			.filter_map(|c| c.get(1))
			.map(|m| m.as_str())
			.collect()
	}

	/// Whether `name` is a query/body field of this operation.
	pub fn accepts_field(&self, name: &str) -> bool {
		self.required.contains(&name) || self.optional.contains(&name)
	}

	pub fn allowed_values(&self, field: &str) -> Option<&'static [&'static str]> {
		self.choices
			.iter()
			.find(|(name, _)| *name == field)
			.map(|(_, values)| *values)
	}

	/// Fills the path template, percent-encoding each value as a single
	/// path segment.
	pub fn render_path(&self, args: &Map<String, Value>) -> Result<String> {
		let mut path = String::with_capacity(self.path.len());
		let mut last = 0;
		for captures in PLACEHOLDER.captures_iter(self.path) {
			let (whole, name) = match (captures.get(0), captures.get(1)) {
				(Some(whole), Some(name)) => (whole, name.as_str()),
				_ => continue,
			};
			let value = args
				.get(name)
				.filter(|v| !v.is_null())
				.context(error::MissingParameter {
					operation: self.name,
					name,
				})?;
			let value = match value {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			};
			if value.is_empty() {
				return error::MissingParameter {
					operation: self.name,
					name,
				}
				.fail();
			}
			path.push_str(&self.path[last..whole.start()]);
			path.push_str(&urlencoding::encode(&value));
			last = whole.end();
		}
		path.push_str(&self.path[last..]);
		Ok(path)
	}
}

pub fn catalog() -> &'static [&'static Operation] {
	&CATALOG
}

pub fn find(name: &str) -> Option<&'static Operation> {
	CATALOG.iter().copied().find(|op| op.name == name)
}

/// Reactions accepted on issues, comments and review comments.
pub(crate) const REACTION_CONTENT: &[&str] = &[
	"+1", "-1", "laugh", "confused", "heart", "hooray", "rocket", "eyes",
];
pub(crate) const DIRECTION: &[&str] = &["asc", "desc"];
