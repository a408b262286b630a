pub mod action;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod github;
pub mod http;
pub mod response;
pub mod transport;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;

pub use action::{Actions, Outcome};
pub use response::Response;
