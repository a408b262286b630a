use super::{Expect, Operation, DIRECTION};
use crate::http::Method;

const ISSUE_STATE: &[&str] = &["open", "closed", "all"];
const ISSUE_SORT: &[&str] = &["created", "updated", "comments"];
const LOCK_REASON: &[&str] = &["off-topic", "too heated", "resolved", "spam"];

pub(super) const OPERATIONS: &[Operation] = &[
	Operation {
		name: "list_issues",
		description: "List issues in a repository",
		path: "/repos/{owner}/{repo}/issues",
		optional: &[
			"milestone",
			"state",
			"assignee",
			"creator",
			"mentioned",
			"labels",
			"sort",
			"direction",
			"since",
			"per_page",
			"page",
		],
		choices: &[
			("state", ISSUE_STATE),
			("sort", ISSUE_SORT),
			("direction", DIRECTION),
		],
		..Operation::BASE
	},
	Operation {
		name: "get_issue",
		description: "Get a single issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}",
		..Operation::BASE
	},
	Operation {
		name: "create_issue",
		description: "Open a new issue",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/issues",
		required: &["title"],
		optional: &["body", "assignees", "milestone", "labels"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "update_issue",
		description: "Edit an issue's title, body, state or metadata",
		method: Method::Patch,
		path: "/repos/{owner}/{repo}/issues/{issue_number}",
		optional: &[
			"title",
			"body",
			"state",
			"state_reason",
			"assignees",
			"milestone",
			"labels",
		],
		choices: &[
			("state", &["open", "closed"]),
			("state_reason", &["completed", "not_planned", "reopened"]),
		],
		..Operation::BASE
	},
	Operation {
		name: "lock_issue",
		description: "Lock the conversation of an issue or pull request",
		method: Method::Put,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/lock",
		optional: &["lock_reason"],
		choices: &[("lock_reason", LOCK_REASON)],
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "unlock_issue",
		description: "Unlock the conversation of an issue or pull request",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/lock",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "list_issue_comments",
		description: "List comments on an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/comments",
		optional: &["since", "per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "list_repository_issue_comments",
		description: "List issue comments across a repository",
		path: "/repos/{owner}/{repo}/issues/comments",
		optional: &["sort", "direction", "since", "per_page", "page"],
		choices: &[("sort", &["created", "updated"]), ("direction", DIRECTION)],
		..Operation::BASE
	},
	Operation {
		name: "get_issue_comment",
		description: "Get a single issue comment",
		path: "/repos/{owner}/{repo}/issues/comments/{comment_id}",
		..Operation::BASE
	},
	Operation {
		name: "create_issue_comment",
		description: "Comment on an issue or pull request",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/comments",
		required: &["body"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "update_issue_comment",
		description: "Edit an issue comment",
		method: Method::Patch,
		path: "/repos/{owner}/{repo}/issues/comments/{comment_id}",
		required: &["body"],
		..Operation::BASE
	},
	Operation {
		name: "delete_issue_comment",
		description: "Delete an issue comment",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/issues/comments/{comment_id}",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "list_assignees",
		description: "List users issues can be assigned to",
		path: "/repos/{owner}/{repo}/assignees",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "check_assignee",
		description: "Check whether a user can be assigned to issues",
		path: "/repos/{owner}/{repo}/assignees/{assignee}",
		expect: Expect::Presence {
			found: 204,
			missing: 404,
		},
		..Operation::BASE
	},
	Operation {
		name: "add_assignees",
		description: "Add assignees to an issue",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
		required: &["assignees"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "remove_assignees",
		description: "Remove assignees from an issue",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
		required: &["assignees"],
		..Operation::BASE
	},
	Operation {
		name: "list_issue_events",
		description: "List events of an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/events",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "list_issue_timeline",
		description: "List the timeline events of an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/timeline",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
];
