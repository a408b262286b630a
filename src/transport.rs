use std::{error::Error as StdError, fmt};

use futures::future::{BoxFuture, FutureExt};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use snafu::ResultExt;

use crate::{error, http::Method, Result};

/// A fully built request, ready to be put on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
	pub method: Method,
	pub url: String,
	pub headers: HeaderMap,
	pub body: Option<Vec<u8>>,
}

/// What came back from the server, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
	pub status: u16,
	pub content_type: Option<String>,
	pub body: String,
}

/// A request that did not complete: DNS, connect, TLS, reset, timeout...
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError {
	message: String,
}

impl TransportError {
	pub fn new<I: Into<String>>(message: I) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for TransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl From<reqwest::Error> for TransportError {
	fn from(error: reqwest::Error) -> Self {
		// reqwest hides the useful part ("Connection refused") in the sources
		let mut message = error.to_string();
		let mut source = error.source();
		while let Some(cause) = source {
			message.push_str(": ");
			message.push_str(&cause.to_string());
			source = cause.source();
		}
		Self { message }
	}
}

/// Sends exactly one request. Implementations must not retry.
pub trait Transport: Send + Sync {
	fn send(
		&self,
		request: PreparedRequest,
	) -> BoxFuture<'_, std::result::Result<RawResponse, TransportError>>;
}

pub struct HttpTransport {
	client: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> Result<Self> {
		// the default redirect policy follows up to 10 hops
		let client = reqwest::Client::builder().build().context(error::Http)?;
		Ok(Self { client })
	}

	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl Transport for HttpTransport {
	fn send(
		&self,
		request: PreparedRequest,
	) -> BoxFuture<'_, std::result::Result<RawResponse, TransportError>> {
		async move {
			let mut builder = self
				.client
				.request(request.method.into(), &request.url)
				.headers(request.headers);
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let content_type = response
				.headers()
				.get(CONTENT_TYPE)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned);
			let body = response.text().await?;

			Ok(RawResponse {
				status,
				content_type,
				body,
			})
		}
		.boxed()
	}
}
