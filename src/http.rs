use std::{fmt, str::FromStr};

use reqwest::header::{
	HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::{ensure, ResultExt};

use crate::{
	constants::{self, DEFAULT_ACCEPT, JSON_CONTENT_TYPE},
	error,
	response::Response,
	transport::{HttpTransport, PreparedRequest, Transport},
	Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl Default for Method {
	fn default() -> Self {
		Method::Get
	}
}

impl Method {
	pub fn as_str(&self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for Method {
	type Err = error::Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(Method::Get),
			"POST" => Ok(Method::Post),
			"PUT" => Ok(Method::Put),
			"PATCH" => Ok(Method::Patch),
			"DELETE" => Ok(Method::Delete),
			_ => error::UnknownMethod { method: s }.fail(),
		}
	}
}

impl From<Method> for reqwest::Method {
	fn from(method: Method) -> Self {
		match method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Patch => reqwest::Method::PATCH,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}

/// Performs single GitHub API calls and normalizes their responses.
pub struct Client<T = HttpTransport> {
	transport: T,
}

impl Client<HttpTransport> {
	pub fn new() -> Result<Self> {
		Ok(Self::with_transport(HttpTransport::new()?))
	}
}

impl<T: Transport> Client<T> {
	pub fn with_transport(transport: T) -> Self {
		Self { transport }
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Sends one request to `server_url` + `path` and returns the normalized
	/// response.
	///
	/// `params` become the query string of a `GET` and the body of every
	/// other method. HTTP error statuses and transport failures are returned
	/// as data; only a badly set up call is an error.
	pub async fn perform(
		&self,
		method: Method,
		path: &str,
		token: &str,
		server_url: &str,
		params: Option<&Value>,
		extra_headers: Option<&HeaderMap>,
	) -> Result<Response> {
		ensure!(
			!token.is_empty(),
			error::InvalidArgument {
				msg: "api token must not be empty"
			}
		);
		ensure!(
			!path.is_empty(),
			error::InvalidArgument {
				msg: "path must not be empty"
			}
		);
		ensure!(
			!server_url.is_empty(),
			error::InvalidArgument {
				msg: "server url must not be empty"
			}
		);

		let mut headers = default_headers(token)?;
		if let Some(extra_headers) = extra_headers {
			for (name, value) in extra_headers {
				if *name == AUTHORIZATION {
					continue;
				}
				headers.insert(name.clone(), value.clone());
			}
		}

		let mut path = path.to_string();
		let mut params = params.filter(|p| !p.is_null());
		if method == Method::Get {
			if let Some(query) = params.map(encode_query).transpose()? {
				if !query.is_empty() {
					path.push(if path.contains('?') { '&' } else { '?' });
					path.push_str(&query);
				}
			}
			params = None;
		}

		let url = format!("{}{}", server_url.trim_end_matches('/'), path);
		url::Url::parse(&url).context(error::InvalidUrl { url: &url })?;

		let body = match params {
			Some(value) if value.is_object() || value.is_array() => {
				if !headers.contains_key(CONTENT_TYPE) {
					headers.insert(
						CONTENT_TYPE,
						HeaderValue::from_static(JSON_CONTENT_TYPE),
					);
				}
				Some(serde_json::to_vec(value).context(error::Json)?)
			}
			Some(Value::String(raw)) => Some(raw.clone().into_bytes()),
			Some(scalar) => Some(scalar.to_string().into_bytes()),
			None => None,
		};

		log::debug!("{} {}", method, url);

		let request = PreparedRequest {
			method,
			url,
			headers,
			body,
		};
		let url = request.url.clone();
		match self.transport.send(request).await {
			Ok(raw) => Ok(Response::from_raw(raw)),
			Err(e) => {
				log::warn!("{} {} did not complete: {}", method, url, e);
				Ok(Response::transport_failure(e.message()))
			}
		}
	}
}

fn default_headers(token: &str) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();
	headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
	headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
	let mut authorization = HeaderValue::from_str(&format!("token {}", token))
		.map_err(|_| error::Error::InvalidArgument {
			msg: "api token is not a valid header value".to_string(),
		})?;
	authorization.set_sensitive(true);
	headers.insert(AUTHORIZATION, authorization);
	Ok(headers)
}

/// Encodes GET parameters the way GitHub expects them: arrays repeat their
/// key and `null` leaves a bare key.
pub fn encode_query(params: &Value) -> Result<String> {
	match params {
		Value::Object(map) => {
			let mut serializer =
				url::form_urlencoded::Serializer::new(String::new());
			for (key, value) in map {
				match value {
					Value::Array(items) => {
						for item in items {
							serializer.append_pair(key, &query_value(item));
						}
					}
					Value::Null => {
						serializer.append_key_only(key);
					}
					value => {
						serializer.append_pair(key, &query_value(value));
					}
				}
			}
			Ok(serializer.finish())
		}
		// already encoded by the caller
		Value::String(query) => Ok(query.trim_start_matches('?').to_string()),
		_ => error::InvalidArgument {
			msg: "GET parameters must be an object",
		}
		.fail(),
	}
}

fn query_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Turns caller supplied `name -> value` pairs into headers.
pub fn header_map<'a, I>(headers: I) -> Result<HeaderMap>
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut map = HeaderMap::new();
	for (name, value) in headers {
		let name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
			.map_err(|_| error::Error::InvalidArgument {
				msg: format!("invalid header name {}", name),
			})?;
		let value = HeaderValue::from_str(value).map_err(|_| {
			error::Error::InvalidArgument {
				msg: format!("invalid value for header {}", name),
			}
		})?;
		map.insert(name, value);
	}
	Ok(map)
}
