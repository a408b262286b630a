use super::{Expect, Operation, DIRECTION};
use crate::http::Method;

const MILESTONE_STATE: &[&str] = &["open", "closed"];

pub(super) const OPERATIONS: &[Operation] = &[
	Operation {
		name: "list_milestones",
		description: "List milestones of a repository",
		path: "/repos/{owner}/{repo}/milestones",
		optional: &["state", "sort", "direction", "per_page", "page"],
		choices: &[
			("state", &["open", "closed", "all"]),
			("sort", &["due_on", "completeness"]),
			("direction", DIRECTION),
		],
		..Operation::BASE
	},
	Operation {
		name: "get_milestone",
		description: "Get a single milestone",
		path: "/repos/{owner}/{repo}/milestones/{milestone_number}",
		..Operation::BASE
	},
	Operation {
		name: "create_milestone",
		description: "Create a milestone",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/milestones",
		required: &["title"],
		optional: &["state", "description", "due_on"],
		choices: &[("state", MILESTONE_STATE)],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "update_milestone",
		description: "Edit a milestone",
		method: Method::Patch,
		path: "/repos/{owner}/{repo}/milestones/{milestone_number}",
		optional: &["title", "state", "description", "due_on"],
		choices: &[("state", MILESTONE_STATE)],
		..Operation::BASE
	},
	Operation {
		name: "delete_milestone",
		description: "Delete a milestone",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/milestones/{milestone_number}",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
];
