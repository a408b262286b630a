use super::{Expect, Operation};
use crate::http::Method;

pub(super) const OPERATIONS: &[Operation] = &[
	Operation {
		name: "list_labels",
		description: "List labels defined in a repository",
		path: "/repos/{owner}/{repo}/labels",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "get_label",
		description: "Get a single label",
		path: "/repos/{owner}/{repo}/labels/{name}",
		..Operation::BASE
	},
	Operation {
		name: "create_label",
		description: "Create a label",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/labels",
		required: &["name"],
		optional: &["color", "description"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "update_label",
		description: "Rename a label or change its color or description",
		method: Method::Patch,
		path: "/repos/{owner}/{repo}/labels/{name}",
		optional: &["new_name", "color", "description"],
		..Operation::BASE
	},
	Operation {
		name: "delete_label",
		description: "Delete a label",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/labels/{name}",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "list_issue_labels",
		description: "List labels on an issue",
		path: "/repos/{owner}/{repo}/issues/{issue_number}/labels",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "add_labels_to_issue",
		description: "Add labels to an issue",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/labels",
		required: &["labels"],
		..Operation::BASE
	},
	Operation {
		name: "set_issue_labels",
		description: "Replace all labels of an issue",
		method: Method::Put,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/labels",
		required: &["labels"],
		..Operation::BASE
	},
	Operation {
		name: "remove_label_from_issue",
		description: "Remove one label from an issue",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/labels/{name}",
		..Operation::BASE
	},
	Operation {
		name: "remove_all_labels_from_issue",
		description: "Remove every label from an issue",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/issues/{issue_number}/labels",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "list_milestone_labels",
		description: "List labels of the issues in a milestone",
		path: "/repos/{owner}/{repo}/milestones/{milestone_number}/labels",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
];
