use github_api_actions::{
	config::MainConfig, context::SharedContext, error::Error, http::Client,
	http::Method, Actions,
};
use reqwest::header::ACCEPT;
use serde_json::{json, Map, Value};

mod utils;

use utils::*;

fn args(value: Value) -> Map<String, Value> {
	match value {
		Value::Object(map) => map,
		other => panic!("not an object: {}", other),
	}
}

fn actions(transport: MockTransport) -> Actions<MockTransport> {
	init_logger();
	Actions::with_client(
		Client::with_transport(transport),
		MainConfig::default().with_api_token("abc"),
	)
}

#[tokio::test]
async fn create_issue() {
	let actions = actions(MockTransport::json(
		201,
		json!({ "number": 42, "title": "Found a bug", "state": "open" }),
	));

	let outcome = actions
		.run(
			"create_issue",
			&args(json!({
				"owner": "octocat",
				"repo": "Hello-World",
				"title": "Found a bug",
			})),
		)
		.await
		.unwrap();

	assert_eq!(outcome.response.status(), 201);
	assert_eq!(outcome.response.json().unwrap()["number"], 42);
	assert_eq!(outcome.result, None);

	let request = actions.client().transport().last_request();
	assert_eq!(request.method, Method::Post);
	assert_eq!(
		request.url,
		"https://api.github.com/repos/octocat/Hello-World/issues"
	);
	let sent: Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
	assert_eq!(sent, json!({ "title": "Found a bug" }));

	let published = actions.context().get("GITHUB_API_CREATE_ISSUE").unwrap();
	assert_eq!(published["status"], 201);
	assert_eq!(published["json"]["number"], 42);
}

#[tokio::test]
async fn merged_pull_request_check() {
	let merge_args = args(json!({ "owner": "o", "repo": "r", "pull_number": 1 }));

	let actions_merged = actions(MockTransport::replying(204, None, ""));
	let outcome = actions_merged
		.run("check_pull_request_merged", &merge_args)
		.await
		.unwrap();
	assert_eq!(outcome.response.status(), 204);
	assert_eq!(outcome.response.json(), None);
	assert_eq!(outcome.result, Some(true));
	assert_eq!(
		actions_merged.client().transport().last_request().url,
		"https://api.github.com/repos/o/r/pulls/1/merge"
	);

	let actions_open = actions(MockTransport::json(
		404,
		json!({ "message": "Not Found" }),
	));
	let outcome = actions_open
		.run("check_pull_request_merged", &merge_args)
		.await
		.unwrap();
	assert_eq!(outcome.result, Some(false));
}

#[tokio::test]
async fn unexpected_status_surfaces_github_message() {
	let actions = actions(MockTransport::json(
		422,
		json!({ "message": "Validation Failed", "errors": [] }),
	));

	let err = actions
		.run(
			"create_label",
			&args(json!({ "owner": "o", "repo": "r", "name": "bug" })),
		)
		.await
		.unwrap_err();

	match err {
		Error::Remote {
			operation,
			status,
			message,
		} => {
			assert_eq!(operation, "create_label");
			assert_eq!(status, 422);
			assert_eq!(message, "Validation Failed");
		}
		other => panic!("unexpected {:?}", other),
	}

	// failures are still published for later steps
	let published = actions.context().get("GITHUB_API_CREATE_LABEL").unwrap();
	assert_eq!(published["status"], 422);
}

#[tokio::test]
async fn transport_failure_is_reported_as_remote_error() {
	let actions = actions(MockTransport::failing("connection reset by peer"));

	let err = actions
		.run("get_repository", &args(json!({ "owner": "o", "repo": "r" })))
		.await
		.unwrap_err();

	match err {
		Error::Remote {
			status, message, ..
		} => {
			assert_eq!(status, 0);
			assert!(message.contains("connection reset"));
		}
		other => panic!("unexpected {:?}", other),
	}
}

#[tokio::test]
async fn arguments_are_validated_before_any_request() {
	let actions = actions(MockTransport::json(200, json!({})));

	let err = actions
		.run("create_issue", &args(json!({ "owner": "o", "repo": "r" })))
		.await
		.unwrap_err();
	assert!(
		matches!(err, Error::MissingParameter { ref name, .. } if name == "title"),
		"{:?}",
		err
	);

	let err = actions
		.run(
			"get_issue",
			&args(json!({ "owner": "o", "repo": "r", "issue_number": 1, "color": "red" })),
		)
		.await
		.unwrap_err();
	assert!(
		matches!(err, Error::UnexpectedParameter { ref name, .. } if name == "color"),
		"{:?}",
		err
	);

	let err = actions
		.run(
			"list_issues",
			&args(json!({ "owner": "o", "repo": "r", "state": "merged" })),
		)
		.await
		.unwrap_err();
	assert!(matches!(err, Error::InvalidChoice { .. }), "{:?}", err);

	let err = actions.run("close_everything", &Map::new()).await.unwrap_err();
	assert!(matches!(err, Error::UnknownOperation { .. }), "{:?}", err);

	assert_eq!(actions.client().transport().calls(), 0);
}

#[tokio::test]
async fn token_falls_back_to_config_and_can_be_overridden() {
	let transport = MockTransport::json(200, json!({}));
	let no_token = Actions::with_client(
		Client::with_transport(transport),
		MainConfig::default(),
	);
	let err = no_token
		.run("get_repository", &args(json!({ "owner": "o", "repo": "r" })))
		.await
		.unwrap_err();
	assert!(matches!(err, Error::MissingParameter { .. }), "{:?}", err);

	no_token
		.run(
			"get_repository",
			&args(json!({
				"owner": "o",
				"repo": "r",
				"api_token": "per-call",
				"server_url": "https://github.example.com/api/v3",
			})),
		)
		.await
		.unwrap();
	let request = no_token.client().transport().last_request();
	assert_eq!(request.url, "https://github.example.com/api/v3/repos/o/r");
	assert_eq!(request.headers.get("authorization").unwrap(), "token per-call");
}

#[tokio::test]
async fn reactions_use_preview_media_type() {
	let actions = actions(MockTransport::json(201, json!({ "id": 1, "content": "heart" })));

	let outcome = actions
		.run(
			"create_issue_comment_reaction",
			&args(json!({
				"owner": "o",
				"repo": "r",
				"comment_id": 99,
				"content": "heart",
			})),
		)
		.await
		.unwrap();
	assert_eq!(outcome.response.status(), 201);

	let request = actions.client().transport().last_request();
	assert_eq!(
		request.headers.get(ACCEPT).unwrap(),
		"application/vnd.github.squirrel-girl-preview+json"
	);
	assert_eq!(
		request.url,
		"https://api.github.com/repos/o/r/issues/comments/99/reactions"
	);
}

#[tokio::test]
async fn get_fields_go_to_the_query_string() {
	let actions = actions(MockTransport::json(200, json!([])));

	actions
		.run(
			"list_pull_requests",
			&args(json!({
				"owner": "o",
				"repo": "r",
				"state": "closed",
				"per_page": 50,
			})),
		)
		.await
		.unwrap();

	let request = actions.client().transport().last_request();
	assert_eq!(
		request.url,
		"https://api.github.com/repos/o/r/pulls?per_page=50&state=closed"
	);
	assert!(request.body.is_none());
}

#[tokio::test]
async fn raw_call_accepts_any_success() {
	let context = SharedContext::new();
	let actions =
		actions(MockTransport::json(202, json!({}))).with_context(context.clone());

	let outcome = actions
		.raw(
			Method::Post,
			"/repos/o/r/dispatches",
			Some(&json!({ "event_type": "deploy" })),
			&Map::new(),
		)
		.await
		.unwrap();

	assert_eq!(outcome.operation, "call");
	assert_eq!(outcome.response.status(), 202);
	assert_eq!(context.get("GITHUB_API_CALL").unwrap()["status"], 202);
}

#[tokio::test]
async fn credential_arguments_must_be_non_empty_strings() {
	let actions = Actions::with_client(
		Client::with_transport(MockTransport::json(200, json!({}))),
		MainConfig::default().with_api_token("secret"),
	);

	for bad in &[
		json!({ "owner": "o", "repo": "r", "server_url": 5 }),
		json!({ "owner": "o", "repo": "r", "server_url": "" }),
		json!({ "owner": "o", "repo": "r", "api_token": 123456 }),
		json!({ "owner": "o", "repo": "r", "api_token": "" }),
	] {
		let err = actions
			.run("get_repository", &args(bad.clone()))
			.await
			.unwrap_err();
		assert!(matches!(err, Error::InvalidArgument { .. }), "{:?}", err);
	}
	assert_eq!(actions.client().transport().calls(), 0);

	// null counts as absent and falls back to the configuration
	actions
		.run(
			"get_repository",
			&args(json!({
				"owner": "o",
				"repo": "r",
				"api_token": null,
				"server_url": null,
			})),
		)
		.await
		.unwrap();
	let request = actions.client().transport().last_request();
	assert_eq!(request.url, "https://api.github.com/repos/o/r");
	assert_eq!(request.headers.get("authorization").unwrap(), "token secret");
}

#[tokio::test]
async fn caller_headers_override_operation_accept() {
	let actions = actions(MockTransport::json(200, json!([])));

	actions
		.run(
			"list_issue_reactions",
			&args(json!({
				"owner": "o",
				"repo": "r",
				"issue_number": 3,
				"headers": {
					"Accept": "application/vnd.github+json",
					"Authorization": "token x",
				},
			})),
		)
		.await
		.unwrap();

	let request = actions.client().transport().last_request();
	assert_eq!(
		request.headers.get(ACCEPT).unwrap(),
		"application/vnd.github+json"
	);
	assert_eq!(request.headers.get("authorization").unwrap(), "token abc");
	assert_eq!(actions.client().transport().calls(), 1);
}

#[tokio::test]
async fn malformed_headers_fail_before_any_request() {
	let actions = actions(MockTransport::json(200, json!([])));

	let err = actions
		.run(
			"list_issue_reactions",
			&args(json!({
				"owner": "o",
				"repo": "r",
				"issue_number": 3,
				"headers": ["Accept: application/json"],
			})),
		)
		.await
		.unwrap_err();
	assert!(matches!(err, Error::InvalidArgument { .. }), "{:?}", err);
	assert_eq!(actions.client().transport().calls(), 0);
}

#[tokio::test]
async fn raw_call_rejects_unknown_arguments() {
	let actions = actions(MockTransport::json(200, json!({})));

	let err = actions
		.raw(
			Method::Get,
			"/user",
			None,
			&args(json!({ "api_token": "abc", "state": "open" })),
		)
		.await
		.unwrap_err();
	assert!(
		matches!(err, Error::UnexpectedParameter { ref name, .. } if name == "state"),
		"{:?}",
		err
	);
	assert_eq!(actions.client().transport().calls(), 0);
}
