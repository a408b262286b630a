use serde::Serialize;
use serde_json::Value;

use crate::{constants::JSON_CONTENT_TYPE, transport::RawResponse};

/// The uniform result of a single API call.
///
/// HTTP error statuses are carried as data; a transport failure is
/// represented by a `status` of 0 with the failure description as `body`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
	status: u16,
	body: String,
	json: Option<Value>,
}

impl Response {
	pub(crate) fn from_raw(raw: RawResponse) -> Self {
		let json = if !raw.body.is_empty()
			&& raw
				.content_type
				.as_deref()
				.map(|ct| ct.contains(JSON_CONTENT_TYPE))
				.unwrap_or(false)
		{
			Some(
				serde_json::from_str(&raw.body)
					.unwrap_or_else(|_| Value::Object(Default::default())),
			)
		} else {
			None
		};

		Self {
			status: raw.status,
			body: raw.body,
			json,
		}
	}

	pub(crate) fn transport_failure<I: Into<String>>(message: I) -> Self {
		Self {
			status: 0,
			body: message.into(),
			json: None,
		}
	}

	pub fn status(&self) -> u16 {
		self.status
	}

	pub fn body(&self) -> &str {
		&self.body
	}

	pub fn json(&self) -> Option<&Value> {
		self.json.as_ref()
	}

	/// True when the request never produced an HTTP response.
	pub fn is_transport_failure(&self) -> bool {
		self.status == 0
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// The `message` GitHub puts in error payloads, falling back to the raw
	/// body.
	pub fn error_message(&self) -> String {
		self.json
			.as_ref()
			.and_then(|json| json.get("message"))
			.and_then(Value::as_str)
			.map(str::to_owned)
			.unwrap_or_else(|| self.body.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn raw(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
		RawResponse {
			status,
			content_type: content_type.map(str::to_owned),
			body: body.to_string(),
		}
	}

	#[test]
	fn parses_json_bodies() {
		let response = Response::from_raw(raw(
			201,
			Some("application/json; charset=utf-8"),
			r#"{"number":42,"title":"Found a bug","state":"open"}"#,
		));
		assert_eq!(response.status(), 201);
		assert_eq!(response.json().unwrap()["number"], 42);
		assert!(response.is_success());
	}

	#[test]
	fn empty_body_has_no_json() {
		let response =
			Response::from_raw(raw(204, Some("application/json"), ""));
		assert_eq!(response.status(), 204);
		assert_eq!(response.body(), "");
		assert_eq!(response.json(), None);
	}

	#[test]
	fn unparseable_json_becomes_empty_object() {
		let response =
			Response::from_raw(raw(200, Some("application/json"), "{not json"));
		assert_eq!(response.json(), Some(&json!({})));
		assert_eq!(response.body(), "{not json");
	}

	#[test]
	fn non_json_content_type_is_not_parsed() {
		let response =
			Response::from_raw(raw(200, Some("text/plain"), r#"{"a":1}"#));
		assert_eq!(response.json(), None);
		let response = Response::from_raw(raw(200, None, r#"{"a":1}"#));
		assert_eq!(response.json(), None);
	}

	#[test]
	fn error_message_prefers_github_message() {
		let response = Response::from_raw(raw(
			422,
			Some("application/json"),
			r#"{"message":"Validation Failed","errors":[]}"#,
		));
		assert_eq!(response.error_message(), "Validation Failed");

		let response = Response::transport_failure("connection reset");
		assert!(response.is_transport_failure());
		assert_eq!(response.error_message(), "connection reset");
		assert_eq!(response.json(), None);
	}
}
