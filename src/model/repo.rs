use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub repo_id: String,
    pub repo_name: String,
    pub repo_description: String,
    pub default_branch: String,
    pub owner_id: String,
    pub branches: Vec<Branch>,
}

impl From<proto::Repo> for Repo {
    fn from(repo: proto::Repo) -> Self {
        Self {
            repo_id: repo.repo_id,
            repo_name: repo.repo_name,
            repo_description: repo.repo_description,
            default_branch: repo.default_branch_name,
            owner_id: repo.owner_id,
            branches: repo.branches.into_iter().map(Branch::from).collect(),
        }
    }
}

/// A repo branch. `database_name` is empty while the branch is detached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub branch_id: String,
    pub branch_name: String,
    pub parent_branch: String,
    pub connected: bool,
    pub database_name: String,
    pub status: String,
}

impl From<proto::Branch> for Branch {
    fn from(branch: proto::Branch) -> Self {
        Self {
            branch_id: branch.branch_id,
            branch_name: branch.branch_name,
            parent_branch: branch.parent_branch_name,
            connected: branch.connected,
            database_name: branch.connected_database_name,
            status: branch.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub repo: Repo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub repos: Vec<Repo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub branch: Branch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_mapping_keeps_nested_branches() {
        let wire = proto::Repo {
            repo_id: "repo_1".to_string(),
            repo_name: "orders".to_string(),
            repo_description: String::new(),
            default_branch_name: "main".to_string(),
            owner_id: "user_7".to_string(),
            branches: vec![proto::Branch {
                branch_id: "br_1".to_string(),
                branch_name: "main".to_string(),
                parent_branch_name: String::new(),
                connected: true,
                connected_database_name: "orders".to_string(),
                status: "active".to_string(),
            }],
        };

        let repo = Repo::from(wire);
        assert_eq!(repo.default_branch, "main");
        assert_eq!(repo.branches.len(), 1);
        assert_eq!(repo.branches[0].database_name, "orders");
        assert!(repo.branches[0].connected);
    }
}
