use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use github_api_actions::{
	config::MainConfig, github, http::Method, Actions, Outcome,
};

/// Call GitHub's REST API from workflow steps.
#[derive(Debug, Parser)]
#[command(name = "github-api-actions", version)]
struct Cli {
	/// API token, defaults to $GITHUB_API_TOKEN
	#[arg(long, global = true)]
	token: Option<String>,
	/// API base URL, defaults to $GITHUB_API_SERVER_URL or api.github.com
	#[arg(long, global = true)]
	server_url: Option<String>,
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// List every operation
	List,
	/// Show the parameters of an operation
	Describe { operation: String },
	/// Run an operation with `name=value` arguments
	Call {
		operation: String,
		#[arg(value_parser = parse_arg)]
		args: Vec<(String, Value)>,
	},
	/// Call an arbitrary endpoint; arguments become the query or JSON body
	Raw {
		method: String,
		path: String,
		#[arg(value_parser = parse_arg)]
		args: Vec<(String, Value)>,
	},
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	let cli = Cli::parse();
	let mut config = MainConfig::from_env();
	if let Some(token) = cli.token {
		config = config.with_api_token(token);
	}
	if let Some(server_url) = cli.server_url {
		config = config.with_server_url(server_url);
	}

	match cli.command {
		Command::List => {
			for op in github::catalog() {
				println!("{:<40} {:<6} {}", op.name, op.method, op.path);
			}
		}
		Command::Describe { operation } => {
			let op = github::find(&operation)
				.ok_or_else(|| anyhow!("Unknown operation: {}", operation))?;
			println!("{}: {}", op.name, op.description);
			println!("  {} {}", op.method, op.path);
			println!("  path:     {}", op.placeholders().join(", "));
			println!("  required: {}", op.required.join(", "));
			println!("  optional: {}", op.optional.join(", "));
			for (field, values) in op.choices {
				println!("  {} in {}", field, values.join(", "));
			}
			if let Some(accept) = op.accept {
				println!("  accept:   {}", accept);
			}
			let statuses: Vec<String> =
				op.expect.statuses().iter().map(u16::to_string).collect();
			println!("  expects:  {}", statuses.join(", "));
		}
		Command::Call { operation, args } => {
			let actions = Actions::new(config)?;
			let outcome = actions
				.run(&operation, &args.into_iter().collect())
				.await
				.with_context(|| format!("Running {}", operation))?;
			print_outcome(&outcome)?;
		}
		Command::Raw { method, path, args } => {
			let method: Method = method.parse()?;
			let actions = Actions::new(config)?;
			let (common, params) = split_common_args(args);
			let params = if params.is_empty() {
				None
			} else {
				Some(Value::Object(params))
			};
			let outcome = actions
				.raw(method, &path, params.as_ref(), &common)
				.await
				.with_context(|| format!("Calling {} {}", method, path))?;
			print_outcome(&outcome)?;
		}
	}

	Ok(())
}

fn print_outcome(outcome: &Outcome) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(outcome)?);
	Ok(())
}

/// Parses `name=value`, reading the value as JSON when it is valid JSON.
fn parse_arg(arg: &str) -> anyhow::Result<(String, Value)> {
	let (name, value) = arg
		.split_once('=')
		.ok_or_else(|| anyhow!("expected name=value, got {}", arg))?;
	if name.is_empty() {
		return Err(anyhow!("missing parameter name in {}", arg));
	}
	let value = serde_json::from_str(value)
		.unwrap_or_else(|_| Value::String(value.to_string()));
	Ok((name.to_string(), value))
}

/// Separates `api_token`/`server_url`/`headers` from request parameters.
fn split_common_args(
	args: Vec<(String, Value)>,
) -> (Map<String, Value>, Map<String, Value>) {
	use github_api_actions::constants::*;

	args.into_iter().partition(|(name, _)| {
		name == TOKEN_PARAM || name == SERVER_URL_PARAM || name == HEADERS_PARAM
	})
}
