#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::{self, BoxFuture, FutureExt};
use github_api_actions::transport::{
	PreparedRequest, RawResponse, Transport, TransportError,
};
use parking_lot::Mutex;

pub fn init_logger() {
	let _ = env_logger::builder()
		.is_test(true)
		.parse_filters("github_api_actions=debug")
		.try_init();
}

/// A port nothing is listening on.
pub fn get_available_port() -> Option<u16> {
	for port in 1025..65535 {
		if TcpListener::bind(("127.0.0.1", port)).is_ok() {
			return Some(port);
		}
	}

	None
}

/// Answers every request with the same reply and records what was sent.
pub struct MockTransport {
	reply: Result<RawResponse, TransportError>,
	calls: AtomicUsize,
	requests: Mutex<Vec<PreparedRequest>>,
}

impl MockTransport {
	pub fn replying(status: u16, content_type: Option<&str>, body: &str) -> Self {
		Self::with_reply(Ok(RawResponse {
			status,
			content_type: content_type.map(str::to_owned),
			body: body.to_string(),
		}))
	}

	pub fn json(status: u16, body: serde_json::Value) -> Self {
		Self::replying(
			status,
			Some("application/json; charset=utf-8"),
			&body.to_string(),
		)
	}

	pub fn failing(message: &str) -> Self {
		Self::with_reply(Err(TransportError::new(message)))
	}

	fn with_reply(reply: Result<RawResponse, TransportError>) -> Self {
		Self {
			reply,
			calls: AtomicUsize::new(0),
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn last_request(&self) -> PreparedRequest {
		self.requests
			.lock()
			.last()
			.cloned()
			.expect("no request was sent")
	}
}

impl Transport for MockTransport {
	fn send(
		&self,
		request: PreparedRequest,
	) -> BoxFuture<'_, Result<RawResponse, TransportError>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().push(request);
		future::ready(self.reply.clone()).boxed()
	}
}
