use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// A call was set up with a missing or malformed argument. Raised before
	/// any request leaves the process.
	#[snafu(display("Invalid argument: {}", msg))]
	InvalidArgument { msg: String },

	/// The server base URL could not be combined with the request path.
	#[snafu(display("Invalid URL {}: {}", url, source))]
	InvalidUrl {
		url: String,
		source: url::ParseError,
	},

	/// An error occurred while serializing a request body.
	#[snafu(display("Source: {}", source))]
	Json { source: serde_json::Error },

	/// The HTTP client could not be constructed.
	#[snafu(display("Source: {}", source))]
	Http { source: reqwest::Error },

	#[snafu(display("Unknown operation: {}", name))]
	UnknownOperation { name: String },

	#[snafu(display("Unknown HTTP method: {}", method))]
	UnknownMethod { method: String },

	/// A required named parameter was not supplied to an operation.
	#[snafu(display("{}: missing required parameter `{}`", operation, name))]
	MissingParameter { operation: String, name: String },

	/// A named parameter that the operation does not accept was supplied.
	#[snafu(display("{}: unexpected parameter `{}`", operation, name))]
	UnexpectedParameter { operation: String, name: String },

	#[snafu(display(
		"{}: invalid value {} for `{}`, expected one of: {}",
		operation,
		value,
		name,
		allowed
	))]
	InvalidChoice {
		operation: String,
		name: String,
		value: String,
		allowed: String,
	},

	/// GitHub answered with a status the operation does not treat as
	/// success. A `status` of 0 means the request never completed.
	#[snafu(display("{} failed with status {}: {}", operation, status, message))]
	Remote {
		operation: String,
		status: u16,
		message: String,
	},
}
