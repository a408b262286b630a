use super::{Expect, Operation, DIRECTION};
use crate::http::Method;

const PULL_STATE: &[&str] = &["open", "closed", "all"];
const MERGE_METHOD: &[&str] = &["merge", "squash", "rebase"];
const REVIEW_EVENT: &[&str] = &["APPROVE", "REQUEST_CHANGES", "COMMENT"];

pub(super) const OPERATIONS: &[Operation] = &[
	Operation {
		name: "list_pull_requests",
		description: "List pull requests of a repository",
		path: "/repos/{owner}/{repo}/pulls",
		optional: &["state", "head", "base", "sort", "direction", "per_page", "page"],
		choices: &[
			("state", PULL_STATE),
			("sort", &["created", "updated", "popularity", "long-running"]),
			("direction", DIRECTION),
		],
		..Operation::BASE
	},
	Operation {
		name: "get_pull_request",
		description: "Get a single pull request",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}",
		..Operation::BASE
	},
	Operation {
		name: "create_pull_request",
		description: "Open a pull request",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/pulls",
		required: &["title", "head", "base"],
		optional: &["body", "draft", "maintainer_can_modify", "issue"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "update_pull_request",
		description: "Edit a pull request",
		method: Method::Patch,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}",
		optional: &["title", "body", "state", "base", "maintainer_can_modify"],
		choices: &[("state", &["open", "closed"])],
		..Operation::BASE
	},
	Operation {
		name: "list_pull_request_commits",
		description: "List commits of a pull request",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/commits",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "list_pull_request_files",
		description: "List files changed by a pull request",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/files",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "check_pull_request_merged",
		description: "Check whether a pull request has been merged",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
		expect: Expect::Presence {
			found: 204,
			missing: 404,
		},
		..Operation::BASE
	},
	Operation {
		name: "merge_pull_request",
		description: "Merge a pull request",
		method: Method::Put,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
		optional: &["commit_title", "commit_message", "sha", "merge_method"],
		choices: &[("merge_method", MERGE_METHOD)],
		..Operation::BASE
	},
	Operation {
		name: "update_pull_request_branch",
		description: "Merge the base branch into a pull request's head",
		method: Method::Put,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/update-branch",
		optional: &["expected_head_sha"],
		expect: Expect::Status(&[202]),
		..Operation::BASE
	},
	Operation {
		name: "list_requested_reviewers",
		description: "List users and teams asked to review a pull request",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
		..Operation::BASE
	},
	Operation {
		name: "request_reviewers",
		description: "Ask users or teams to review a pull request",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
		optional: &["reviewers", "team_reviewers"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "remove_requested_reviewers",
		description: "Withdraw review requests from a pull request",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
		required: &["reviewers"],
		optional: &["team_reviewers"],
		..Operation::BASE
	},
	Operation {
		name: "list_pull_request_reviews",
		description: "List reviews of a pull request",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "create_pull_request_review",
		description: "Review a pull request",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
		optional: &["commit_id", "body", "event", "comments"],
		choices: &[("event", REVIEW_EVENT)],
		..Operation::BASE
	},
	Operation {
		name: "list_pull_request_review_comments",
		description: "List review comments on a pull request",
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
		optional: &["sort", "direction", "since", "per_page", "page"],
		choices: &[("sort", &["created", "updated"]), ("direction", DIRECTION)],
		..Operation::BASE
	},
	Operation {
		name: "create_pull_request_review_comment",
		description: "Comment on a line of a pull request's diff",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
		required: &["body", "commit_id", "path"],
		optional: &["line", "side", "start_line", "start_side", "in_reply_to"],
		choices: &[("side", &["LEFT", "RIGHT"]), ("start_side", &["LEFT", "RIGHT"])],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
];
