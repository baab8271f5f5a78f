use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    pub workspace_name: String,
    pub workspace_description: String,
    pub instance_count: i32,
    pub database_count: i32,
    pub repo_count: i32,
    pub mapping_count: i32,
    pub owner_id: String,
}

impl From<proto::Workspace> for Workspace {
    fn from(workspace: proto::Workspace) -> Self {
        Self {
            workspace_id: workspace.workspace_id,
            workspace_name: workspace.workspace_name,
            workspace_description: workspace.workspace_description,
            instance_count: workspace.instance_count,
            database_count: workspace.database_count,
            repo_count: workspace.repo_count,
            mapping_count: workspace.mapping_count,
            owner_id: workspace.owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub workspace: Workspace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub workspaces: Vec<Workspace>,
}
