use super::{Expect, Operation, REACTION_CONTENT};
use crate::{constants::REACTIONS_PREVIEW_ACCEPT, http::Method};

const LIST: Operation = Operation {
	optional: &["content", "per_page", "page"],
	choices: &[("content", REACTION_CONTENT)],
	accept: Some(REACTIONS_PREVIEW_ACCEPT),
	..Operation::BASE
};

// 200 when the user already left the same reaction
const CREATE: Operation = Operation {
	method: Method::Post,
	required: &["content"],
	choices: &[("content", REACTION_CONTENT)],
	accept: Some(REACTIONS_PREVIEW_ACCEPT),
	expect: Expect::Status(&[200, 201]),
	..Operation::BASE
};

const DELETE: Operation = Operation {
	method: Method::Delete,
	accept: Some(REACTIONS_PREVIEW_ACCEPT),
	expect: Expect::Status(&[204]),
	..Operation::BASE
};

pub(super) const OPERATIONS: &[Operation] = &[
	Operation {
		name: "list_issue_reactions",
		description: "List reactions to an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
		..LIST
	},
	Operation {
		name: "create_issue_reaction",
		description: "React to an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
		..CREATE
	},
	Operation {
		name: "delete_issue_reaction",
		description: "Remove a reaction from an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/reactions/{reaction_id}",
		..DELETE
	},
	Operation {
		name: "list_issue_comment_reactions",
		description: "List reactions to an issue comment",
		path: "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
		..LIST
	},
	Operation {
		name: "create_issue_comment_reaction",
		description: "React to an issue comment",
		path: "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
		..CREATE
	},
	Operation {
		name: "delete_issue_comment_reaction",
		description: "Remove a reaction from an issue comment",
		path: "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions/{reaction_id}",
		..DELETE
	},
	Operation {
		name: "list_pull_request_comment_reactions",
		description: "List reactions to a pull request review comment",
		path: "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions",
		..LIST
	},
	Operation {
		name: "create_pull_request_comment_reaction",
		description: "React to a pull request review comment",
		path: "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions",
		..CREATE
	},
	Operation {
		name: "delete_pull_request_comment_reaction",
		description: "Remove a reaction from a pull request review comment",
		path: "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions/{reaction_id}",
		..DELETE
	},
];
