use super::{Expect, Operation, DIRECTION};
use crate::http::Method;

const CREATE_SETTINGS: &[&str] = &[
	"description",
	"homepage",
	"private",
	"visibility",
	"has_issues",
	"has_projects",
	"has_wiki",
	"is_template",
	"team_id",
	"auto_init",
	"gitignore_template",
	"license_template",
	"allow_squash_merge",
	"allow_merge_commit",
	"allow_rebase_merge",
	"allow_auto_merge",
	"delete_branch_on_merge",
];
const VISIBILITY: &[&str] = &["public", "private", "internal"];
const REPOSITORY_SORT: &[&str] = &["created", "updated", "pushed", "full_name"];

pub(super) const OPERATIONS: &[Operation] = &[
	Operation {
		name: "get_repository",
		description: "Get a repository",
		path: "/repos/{owner}/{repo}",
		..Operation::BASE
	},
	Operation {
		name: "update_repository",
		description: "Change the settings of a repository",
		method: Method::Patch,
		path: "/repos/{owner}/{repo}",
		optional: &[
			"name",
			"description",
			"homepage",
			"private",
			"visibility",
			"has_issues",
			"has_projects",
			"has_wiki",
			"is_template",
			"default_branch",
			"allow_squash_merge",
			"allow_merge_commit",
			"allow_rebase_merge",
			"allow_auto_merge",
			"delete_branch_on_merge",
			"archived",
		],
		choices: &[("visibility", VISIBILITY)],
		..Operation::BASE
	},
	Operation {
		name: "delete_repository",
		description: "Delete a repository",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "list_user_repositories",
		description: "List repositories of the authenticated user",
		path: "/user/repos",
		optional: &[
			"visibility",
			"affiliation",
			"type",
			"sort",
			"direction",
			"since",
			"before",
			"per_page",
			"page",
		],
		choices: &[
			("visibility", &["all", "public", "private"]),
			("sort", REPOSITORY_SORT),
			("direction", DIRECTION),
		],
		..Operation::BASE
	},
	Operation {
		name: "list_org_repositories",
		description: "List repositories of an organization",
		path: "/orgs/{org}/repos",
		optional: &["type", "sort", "direction", "per_page", "page"],
		choices: &[
			(
				"type",
				&["all", "public", "private", "forks", "sources", "member"],
			),
			("sort", REPOSITORY_SORT),
			("direction", DIRECTION),
		],
		..Operation::BASE
	},
	Operation {
		name: "create_user_repository",
		description: "Create a repository for the authenticated user",
		method: Method::Post,
		path: "/user/repos",
		required: &["name"],
		optional: CREATE_SETTINGS,
		choices: &[("visibility", VISIBILITY)],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "create_org_repository",
		description: "Create a repository in an organization",
		method: Method::Post,
		path: "/orgs/{org}/repos",
		required: &["name"],
		optional: CREATE_SETTINGS,
		choices: &[("visibility", VISIBILITY)],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "create_repository_from_template",
		description: "Create a repository from a template repository",
		method: Method::Post,
		path: "/repos/{template_owner}/{template_repo}/generate",
		required: &["name"],
		optional: &["owner", "description", "include_all_branches", "private"],
		expect: Expect::Status(&[201]),
		..Operation::BASE
	},
	Operation {
		name: "fork_repository",
		description: "Fork a repository",
		method: Method::Post,
		path: "/repos/{owner}/{repo}/forks",
		optional: &["organization", "name", "default_branch_only"],
		expect: Expect::Status(&[202]),
		..Operation::BASE
	},
	Operation {
		name: "list_branches",
		description: "List branches of a repository",
		path: "/repos/{owner}/{repo}/branches",
		optional: &["protected", "per_page", "page"],
		..Operation::BASE
	},
	Operation {
		name: "get_branch",
		description: "Get a branch",
		path: "/repos/{owner}/{repo}/branches/{branch}",
		..Operation::BASE
	},
	Operation {
		name: "list_collaborators",
		description: "List collaborators of a repository",
		path: "/repos/{owner}/{repo}/collaborators",
		optional: &["affiliation", "permission", "per_page", "page"],
		choices: &[("affiliation", &["outside", "direct", "all"])],
		..Operation::BASE
	},
	Operation {
		name: "check_collaborator",
		description: "Check whether a user is a collaborator",
		path: "/repos/{owner}/{repo}/collaborators/{username}",
		expect: Expect::Presence {
			found: 204,
			missing: 404,
		},
		..Operation::BASE
	},
	Operation {
		name: "add_collaborator",
		description: "Invite a user to collaborate on a repository",
		method: Method::Put,
		path: "/repos/{owner}/{repo}/collaborators/{username}",
		optional: &["permission"],
		// 201 when an invitation was sent, 204 when already a collaborator
		expect: Expect::Status(&[201, 204]),
		..Operation::BASE
	},
	Operation {
		name: "remove_collaborator",
		description: "Remove a collaborator from a repository",
		method: Method::Delete,
		path: "/repos/{owner}/{repo}/collaborators/{username}",
		expect: Expect::Status(&[204]),
		..Operation::BASE
	},
	Operation {
		name: "list_repository_topics",
		description: "List topics of a repository",
		path: "/repos/{owner}/{repo}/topics",
		..Operation::BASE
	},
	Operation {
		name: "replace_repository_topics",
		description: "Replace the topics of a repository",
		method: Method::Put,
		path: "/repos/{owner}/{repo}/topics",
		required: &["names"],
		..Operation::BASE
	},
	Operation {
		name: "list_contributors",
		description: "List contributors of a repository",
		path: "/repos/{owner}/{repo}/contributors",
		optional: &["anon", "per_page", "page"],
		// 204 for an empty repository
		expect: Expect::Status(&[200, 204]),
		..Operation::BASE
	},
	Operation {
		name: "list_languages",
		description: "List languages used in a repository",
		path: "/repos/{owner}/{repo}/languages",
		..Operation::BASE
	},
	Operation {
		name: "list_tags",
		description: "List tags of a repository",
		path: "/repos/{owner}/{repo}/tags",
		optional: &["per_page", "page"],
		..Operation::BASE
	},
];
