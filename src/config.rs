use crate::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MainConfig {
	/// token used when an operation is called without `api_token`
	pub api_token: Option<String>,
	/// base URL of the GitHub-compatible REST API
	pub server_url: String,
}

impl Default for MainConfig {
	fn default() -> Self {
		Self {
			api_token: None,
			server_url: DEFAULT_SERVER_URL.to_string(),
		}
	}
}

impl MainConfig {
	pub fn from_env() -> Self {
		dotenv::dotenv().ok();

		let api_token = dotenv::var(TOKEN_ENV).ok().filter(|t| !t.is_empty());
		let server_url = dotenv::var(SERVER_URL_ENV)
			.ok()
			.filter(|u| !u.is_empty())
			.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

		Self {
			api_token,
			server_url,
		}
	}

	pub fn with_api_token<I: Into<String>>(mut self, api_token: I) -> Self {
		self.api_token = Some(api_token.into());
		self
	}

	pub fn with_server_url<I: Into<String>>(mut self, server_url: I) -> Self {
		self.server_url = server_url.into();
		self
	}
}
