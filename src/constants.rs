pub const DEFAULT_SERVER_URL: &str = "https://api.github.com";

pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";
// Reaction endpoints were only reachable through this preview media type
pub const REACTIONS_PREVIEW_ACCEPT: &str =
	"application/vnd.github.squirrel-girl-preview+json";

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const USER_AGENT: &str =
	concat!("github-api-actions/", env!("CARGO_PKG_VERSION"));

pub const TOKEN_ENV: &str = "GITHUB_API_TOKEN";
pub const SERVER_URL_ENV: &str = "GITHUB_API_SERVER_URL";

// Named parameters every operation accepts in addition to its own fields
pub const TOKEN_PARAM: &str = "api_token";
pub const SERVER_URL_PARAM: &str = "server_url";
pub const HEADERS_PARAM: &str = "headers";

pub const CONTEXT_KEY_PREFIX: &str = "GITHUB_API_";
pub const RAW_CALL_OPERATION: &str = "call";
