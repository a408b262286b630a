use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Serialize;
use serde_json::{Map, Value};
use snafu::OptionExt;

use crate::{
	config::MainConfig,
	constants::*,
	context::SharedContext,
	error,
	github::{self, Operation},
	http::{self, Method},
	response::Response,
	transport::{HttpTransport, Transport},
	Result,
};

/// A call that GitHub answered the way the operation expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
	pub operation: String,
	#[serde(flatten)]
	pub response: Response,
	/// Answer of yes/no checks such as `check_pull_request_merged`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<bool>,
}

/// Runs catalog operations by name and publishes their results.
pub struct Actions<T = HttpTransport> {
	client: http::Client<T>,
	config: MainConfig,
	context: SharedContext,
}

impl Actions<HttpTransport> {
	pub fn new(config: MainConfig) -> Result<Self> {
		Ok(Self::with_client(http::Client::new()?, config))
	}
}

impl<T: Transport> Actions<T> {
	pub fn with_client(client: http::Client<T>, config: MainConfig) -> Self {
		Self {
			client,
			config,
			context: SharedContext::new(),
		}
	}

	pub fn with_context(mut self, context: SharedContext) -> Self {
		self.context = context;
		self
	}

	pub fn context(&self) -> &SharedContext {
		&self.context
	}

	pub fn client(&self) -> &http::Client<T> {
		&self.client
	}

	/// Runs the operation called `name` with the given named arguments.
	pub async fn run(
		&self,
		name: &str,
		args: &Map<String, Value>,
	) -> Result<Outcome> {
		let operation =
			github::find(name).context(error::UnknownOperation { name })?;
		self.run_operation(operation, args).await
	}

	pub async fn run_operation(
		&self,
		operation: &Operation,
		args: &Map<String, Value>,
	) -> Result<Outcome> {
		let (token, server_url) = self.credentials(operation.name, args)?;
		let headers = self.headers(operation, args)?;

		let placeholders = operation.placeholders();
		let mut params = Map::new();
		for (key, value) in args {
			let key = key.as_str();
			if key == TOKEN_PARAM
				|| key == SERVER_URL_PARAM
				|| key == HEADERS_PARAM
				|| placeholders.contains(&key)
			{
				continue;
			}
			if !operation.accepts_field(key) {
				return error::UnexpectedParameter {
					operation: operation.name,
					name: key,
				}
				.fail();
			}
			if value.is_null() {
				continue;
			}
			if let Some(allowed) = operation.allowed_values(key) {
				check_choice(operation.name, key, value, allowed)?;
			}
			params.insert(key.to_string(), value.clone());
		}
		for field in operation.required {
			if !params.contains_key(*field) {
				return error::MissingParameter {
					operation: operation.name,
					name: *field,
				}
				.fail();
			}
		}

		let path = operation.render_path(args)?;
		let params = if params.is_empty() {
			None
		} else {
			Some(Value::Object(params))
		};

		let response = self
			.client
			.perform(
				operation.method,
				&path,
				&token,
				&server_url,
				params.as_ref(),
				Some(&headers),
			)
			.await?;

		self.finish(operation.name, operation.expect, response)
	}

	/// Calls an arbitrary endpoint. Any 2xx status is a success.
	///
	/// `params` carries the query or body; `args` only takes `api_token`,
	/// `server_url` and `headers`.
	pub async fn raw(
		&self,
		method: Method,
		path: &str,
		params: Option<&Value>,
		args: &Map<String, Value>,
	) -> Result<Outcome> {
		if let Some(key) = args.keys().find(|key| {
			*key != TOKEN_PARAM && *key != SERVER_URL_PARAM && *key != HEADERS_PARAM
		}) {
			return error::UnexpectedParameter {
				operation: RAW_CALL_OPERATION,
				name: key.as_str(),
			}
			.fail();
		}

		let (token, server_url) = self.credentials(RAW_CALL_OPERATION, args)?;
		let headers = match args.get(HEADERS_PARAM) {
			Some(value) => headers_from_value(RAW_CALL_OPERATION, value)?,
			None => HeaderMap::new(),
		};

		let response = self
			.client
			.perform(method, path, &token, &server_url, params, Some(&headers))
			.await?;

		self.finish(RAW_CALL_OPERATION, github::Expect::Success, response)
	}

	fn credentials(
		&self,
		operation: &str,
		args: &Map<String, Value>,
	) -> Result<(String, String)> {
		// the configured defaults only apply when the argument is absent
		let token = match string_arg(operation, args, TOKEN_PARAM)? {
			Some(token) => token,
			None => self.config.api_token.clone().context(
				error::MissingParameter {
					operation,
					name: TOKEN_PARAM,
				},
			)?,
		};
		let server_url = string_arg(operation, args, SERVER_URL_PARAM)?
			.unwrap_or_else(|| self.config.server_url.clone());
		Ok((token, server_url))
	}

	fn headers(
		&self,
		operation: &Operation,
		args: &Map<String, Value>,
	) -> Result<HeaderMap> {
		let mut headers = HeaderMap::new();
		if let Some(accept) = operation.accept {
			headers.insert(ACCEPT, HeaderValue::from_static(accept));
		}
		if let Some(value) = args.get(HEADERS_PARAM) {
			for (name, value) in headers_from_value(operation.name, value)? {
				if let Some(name) = name {
					headers.insert(name, value);
				}
			}
		}
		Ok(headers)
	}

	fn finish(
		&self,
		operation: &str,
		expect: github::Expect,
		response: Response,
	) -> Result<Outcome> {
		let classified = expect.classify(response.status());
		let outcome = Outcome {
			operation: operation.to_string(),
			result: classified.flatten(),
			response,
		};

		// published before classification so later steps can inspect failures
		match serde_json::to_value(&outcome) {
			Ok(value) => self
				.context
				.publish(SharedContext::key_for(operation), value),
			Err(e) => log::error!("Unable to publish {}: {}", operation, e),
		}

		if classified.is_none() {
			return error::Remote {
				operation,
				status: outcome.response.status(),
				message: outcome.response.error_message(),
			}
			.fail();
		}

		log::info!(
			"{} finished with status {}",
			operation,
			outcome.response.status()
		);
		Ok(outcome)
	}
}

/// `None` when `name` is absent or null; a present value must be a
/// non-empty string.
fn string_arg(
	operation: &str,
	args: &Map<String, Value>,
	name: &str,
) -> Result<Option<String>> {
	match args.get(name) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) if !s.is_empty() => Ok(Some(s.clone())),
		Some(other) => error::InvalidArgument {
			msg: format!(
				"{}: `{}` must be a non-empty string, got {}",
				operation, name, other
			),
		}
		.fail(),
	}
}

fn headers_from_value(operation: &str, value: &Value) -> Result<HeaderMap> {
	let object = match value {
		Value::Object(object) => object,
		Value::Null => return Ok(HeaderMap::new()),
		_ => {
			return error::InvalidArgument {
				msg: format!("{}: `headers` must be an object", operation),
			}
			.fail()
		}
	};
	let mut pairs = Vec::with_capacity(object.len());
	for (name, value) in object {
		let value = value.as_str().context(error::InvalidArgument {
			msg: format!("{}: header {} must be a string", operation, name),
		})?;
		pairs.push((name.as_str(), value));
	}
	http::header_map(pairs)
}

fn check_choice(
	operation: &str,
	name: &str,
	value: &Value,
	allowed: &[&str],
) -> Result<()> {
	// every item of a list must be allowed
	let ok = match value {
		Value::String(s) => allowed.contains(&s.as_str()),
		Value::Array(items) => items.iter().all(|item| {
			item.as_str().map(|s| allowed.contains(&s)).unwrap_or(false)
		}),
		_ => false,
	};
	if ok {
		Ok(())
	} else {
		error::InvalidChoice {
			operation,
			name,
			value: value.to_string(),
			allowed: allowed.join(", "),
		}
		.fail()
	}
}
