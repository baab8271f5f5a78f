//! Protobuf messages for the `core.v1` services.
//!
//! Declared with prost derives directly; there is no `.proto` build step.
//! Tags are part of the wire contract with the core service and must not be
//! renumbered.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum OperationStatus {
    Unspecified = 0,
    Success = 1,
    Pending = 2,
    Warning = 3,
    Failure = 4,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Outcome {
    #[prost(string, tag = "1")]
    pub message: String,
    #[prost(bool, tag = "2")]
    pub success: bool,
    #[prost(enumeration = "OperationStatus", tag = "3")]
    pub status: i32,
}

// ---------------------------------------------------------------------------
// core.v1.TenantService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Tenant {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub tenant_name: String,
    #[prost(string, tag = "3")]
    pub tenant_description: String,
    #[prost(string, tag = "4")]
    pub tenant_url: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListTenantsRequest {
    #[prost(string, tag = "1")]
    pub caller_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListTenantsResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub tenants: Vec<Tenant>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowTenantRequest {
    #[prost(string, tag = "1")]
    pub caller_id: String,
    #[prost(string, tag = "2")]
    pub tenant_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowTenantResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub tenant: Option<Tenant>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddTenantRequest {
    #[prost(string, tag = "1")]
    pub caller_id: String,
    #[prost(string, tag = "2")]
    pub tenant_name: String,
    #[prost(string, tag = "3")]
    pub tenant_url: String,
    #[prost(string, optional, tag = "4")]
    pub tenant_description: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddTenantResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub tenant: Option<Tenant>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyTenantRequest {
    #[prost(string, tag = "1")]
    pub caller_id: String,
    #[prost(string, tag = "2")]
    pub tenant_id: String,
    #[prost(string, optional, tag = "3")]
    pub tenant_name: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub tenant_description: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyTenantResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub tenant: Option<Tenant>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteTenantRequest {
    #[prost(string, tag = "1")]
    pub caller_id: String,
    #[prost(string, tag = "2")]
    pub tenant_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteTenantResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

// ---------------------------------------------------------------------------
// core.v1.WorkspaceService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Workspace {
    #[prost(string, tag = "1")]
    pub workspace_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub workspace_description: String,
    #[prost(int32, tag = "4")]
    pub instance_count: i32,
    #[prost(int32, tag = "5")]
    pub database_count: i32,
    #[prost(int32, tag = "6")]
    pub repo_count: i32,
    #[prost(int32, tag = "7")]
    pub mapping_count: i32,
    #[prost(string, tag = "8")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListWorkspacesRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListWorkspacesResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub workspaces: Vec<Workspace>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowWorkspaceRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowWorkspaceResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub workspace: Option<Workspace>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddWorkspaceRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, optional, tag = "3")]
    pub workspace_description: Option<String>,
    #[prost(string, tag = "4")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddWorkspaceResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub workspace: Option<Workspace>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyWorkspaceRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, optional, tag = "3")]
    pub workspace_name_new: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub workspace_description: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyWorkspaceResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub workspace: Option<Workspace>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteWorkspaceRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteWorkspaceResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

// ---------------------------------------------------------------------------
// core.v1.DatabaseService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Database {
    #[prost(string, tag = "1")]
    pub database_id: String,
    #[prost(string, tag = "2")]
    pub database_name: String,
    #[prost(string, tag = "3")]
    pub database_description: String,
    #[prost(string, tag = "4")]
    pub database_type: String,
    #[prost(string, tag = "5")]
    pub database_vendor: String,
    #[prost(string, tag = "6")]
    pub database_version: String,
    #[prost(string, tag = "7")]
    pub database_host: String,
    #[prost(uint32, tag = "8")]
    pub database_port: u32,
    #[prost(string, tag = "9")]
    pub database_username: String,
    #[prost(string, tag = "10")]
    pub database_db_name: String,
    #[prost(bool, tag = "11")]
    pub database_enabled: bool,
    #[prost(bool, tag = "12")]
    pub database_ssl: bool,
    #[prost(string, tag = "13")]
    pub instance_id: String,
    #[prost(string, tag = "14")]
    pub owner_id: String,
    #[prost(string, tag = "15")]
    pub connection_status: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListDatabasesRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListDatabasesResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub databases: Vec<Database>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub database: Option<Database>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ConnectDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
    #[prost(string, optional, tag = "4")]
    pub database_description: Option<String>,
    #[prost(string, tag = "5")]
    pub database_type: String,
    #[prost(string, tag = "6")]
    pub database_vendor: String,
    #[prost(string, tag = "7")]
    pub host: String,
    #[prost(uint32, optional, tag = "8")]
    pub port: Option<u32>,
    #[prost(string, tag = "9")]
    pub username: String,
    #[prost(string, tag = "10")]
    pub password: String,
    #[prost(string, tag = "11")]
    pub db_name: String,
    #[prost(bool, optional, tag = "12")]
    pub enabled: Option<bool>,
    #[prost(bool, optional, tag = "13")]
    pub ssl: Option<bool>,
    #[prost(string, optional, tag = "14")]
    pub environment_id: Option<String>,
    #[prost(string, tag = "15")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ConnectDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub database: Option<Database>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
    #[prost(string, optional, tag = "4")]
    pub database_name_new: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub database_description: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub host: Option<String>,
    #[prost(uint32, optional, tag = "7")]
    pub port: Option<u32>,
    #[prost(string, optional, tag = "8")]
    pub username: Option<String>,
    #[prost(string, optional, tag = "9")]
    pub password: Option<String>,
    #[prost(string, optional, tag = "10")]
    pub db_name: Option<String>,
    #[prost(bool, optional, tag = "11")]
    pub enabled: Option<bool>,
    #[prost(bool, optional, tag = "12")]
    pub ssl: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub database: Option<Database>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DisconnectDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
    #[prost(bool, optional, tag = "4")]
    pub delete_database_object: Option<bool>,
    #[prost(bool, optional, tag = "5")]
    pub delete_repo: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DisconnectDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReconnectDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReconnectDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub database: Option<Database>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct WipeDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct WipeDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DropDatabaseRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub database_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DropDatabaseResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TransformDataRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
    #[prost(string, tag = "4")]
    pub mode: String,
    #[prost(bool, optional, tag = "5")]
    pub dry_run: Option<bool>,
    #[prost(map = "string, string", tag = "6")]
    pub options: HashMap<String, String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TransformDataResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(string, tag = "2")]
    pub source_database_name: String,
    #[prost(string, tag = "3")]
    pub target_database_name: String,
    #[prost(string, tag = "4")]
    pub mode: String,
    #[prost(uint32, tag = "5")]
    pub tables_affected: u32,
    #[prost(int64, tag = "6")]
    pub rows_transformed: i64,
}

// ---------------------------------------------------------------------------
// core.v1.RepoService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Repo {
    #[prost(string, tag = "1")]
    pub repo_id: String,
    #[prost(string, tag = "2")]
    pub repo_name: String,
    #[prost(string, tag = "3")]
    pub repo_description: String,
    #[prost(string, tag = "4")]
    pub default_branch_name: String,
    #[prost(string, tag = "5")]
    pub owner_id: String,
    #[prost(message, repeated, tag = "6")]
    pub branches: Vec<Branch>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Branch {
    #[prost(string, tag = "1")]
    pub branch_id: String,
    #[prost(string, tag = "2")]
    pub branch_name: String,
    #[prost(string, tag = "3")]
    pub parent_branch_name: String,
    #[prost(bool, tag = "4")]
    pub connected: bool,
    #[prost(string, tag = "5")]
    pub connected_database_name: String,
    #[prost(string, tag = "6")]
    pub status: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListReposRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListReposResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub repos: Vec<Repo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowRepoRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowRepoResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub repo: Option<Repo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddRepoRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, optional, tag = "4")]
    pub repo_description: Option<String>,
    #[prost(string, tag = "5")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddRepoResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub repo: Option<Repo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyRepoRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, optional, tag = "4")]
    pub repo_name_new: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub repo_description: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyRepoResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub repo: Option<Repo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRepoRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(bool, optional, tag = "4")]
    pub force: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRepoResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CloneRepoRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, tag = "4")]
    pub clone_repo_name: String,
    #[prost(string, optional, tag = "5")]
    pub clone_repo_description: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub clone_database_name: Option<String>,
    #[prost(string, tag = "7")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CloneRepoResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub repo: Option<Repo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowBranchRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, tag = "4")]
    pub branch_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowBranchResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub branch: Option<Branch>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyBranchRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, tag = "4")]
    pub branch_name: String,
    #[prost(string, optional, tag = "5")]
    pub branch_name_new: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyBranchResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub branch: Option<Branch>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AttachBranchRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, tag = "4")]
    pub branch_name: String,
    #[prost(string, tag = "5")]
    pub database_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AttachBranchResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub branch: Option<Branch>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DetachBranchRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, tag = "4")]
    pub branch_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DetachBranchResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub branch: Option<Branch>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteBranchRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub repo_name: String,
    #[prost(string, tag = "4")]
    pub branch_name: String,
    #[prost(bool, optional, tag = "5")]
    pub force: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteBranchResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

// ---------------------------------------------------------------------------
// core.v1.MappingService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Mapping {
    #[prost(string, tag = "1")]
    pub mapping_id: String,
    #[prost(string, tag = "2")]
    pub mapping_name: String,
    #[prost(string, tag = "3")]
    pub mapping_description: String,
    #[prost(string, tag = "4")]
    pub mapping_type: String,
    #[prost(string, tag = "5")]
    pub mapping_source: String,
    #[prost(string, tag = "6")]
    pub mapping_target: String,
    #[prost(string, tag = "7")]
    pub policy_id: String,
    #[prost(string, tag = "8")]
    pub owner_id: String,
    #[prost(string, repeated, tag = "9")]
    pub mapping_rule_names: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MappingRule {
    #[prost(string, tag = "1")]
    pub mapping_rule_id: String,
    #[prost(string, tag = "2")]
    pub mapping_rule_name: String,
    #[prost(string, tag = "3")]
    pub mapping_rule_description: String,
    #[prost(string, tag = "4")]
    pub mapping_rule_source: String,
    #[prost(string, tag = "5")]
    pub mapping_rule_target: String,
    #[prost(string, tag = "6")]
    pub mapping_rule_transformation_name: String,
    #[prost(string, tag = "7")]
    pub owner_id: String,
    #[prost(int32, tag = "8")]
    pub mapping_count: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListMappingsRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListMappingsResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub mappings: Vec<Mapping>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowMappingRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowMappingResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping: Option<Mapping>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddMappingRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
    #[prost(string, optional, tag = "4")]
    pub mapping_description: Option<String>,
    #[prost(string, tag = "5")]
    pub scope: String,
    #[prost(string, tag = "6")]
    pub source: String,
    #[prost(string, tag = "7")]
    pub target: String,
    #[prost(string, optional, tag = "8")]
    pub policy_id: Option<String>,
    #[prost(string, tag = "9")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddMappingResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping: Option<Mapping>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyMappingRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
    #[prost(string, optional, tag = "4")]
    pub mapping_name_new: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub mapping_description: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub policy_id: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyMappingResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping: Option<Mapping>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteMappingRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
    #[prost(bool, optional, tag = "4")]
    pub keep_rules: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteMappingResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AttachMappingRuleRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
    #[prost(string, tag = "4")]
    pub mapping_rule_name: String,
    #[prost(int64, optional, tag = "5")]
    pub mapping_rule_order: Option<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AttachMappingRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping: Option<Mapping>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DetachMappingRuleRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_name: String,
    #[prost(string, tag = "4")]
    pub mapping_rule_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DetachMappingRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping: Option<Mapping>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListMappingRulesRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListMappingRulesResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub mapping_rules: Vec<MappingRule>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowMappingRuleRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_rule_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowMappingRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping_rule: Option<MappingRule>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddMappingRuleRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_rule_name: String,
    #[prost(string, optional, tag = "4")]
    pub mapping_rule_description: Option<String>,
    #[prost(string, tag = "5")]
    pub mapping_rule_source: String,
    #[prost(string, tag = "6")]
    pub mapping_rule_target: String,
    #[prost(string, tag = "7")]
    pub mapping_rule_transformation_name: String,
    #[prost(string, tag = "8")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddMappingRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping_rule: Option<MappingRule>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyMappingRuleRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_rule_name: String,
    #[prost(string, optional, tag = "4")]
    pub mapping_rule_name_new: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub mapping_rule_description: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub mapping_rule_source: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub mapping_rule_target: Option<String>,
    #[prost(string, optional, tag = "8")]
    pub mapping_rule_transformation_name: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyMappingRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub mapping_rule: Option<MappingRule>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteMappingRuleRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub mapping_rule_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteMappingRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

// ---------------------------------------------------------------------------
// core.v1.RelationshipService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Relationship {
    #[prost(string, tag = "1")]
    pub relationship_id: String,
    #[prost(string, tag = "2")]
    pub relationship_name: String,
    #[prost(string, tag = "3")]
    pub relationship_description: String,
    #[prost(string, tag = "4")]
    pub relationship_type: String,
    #[prost(string, tag = "5")]
    pub relationship_source_database_name: String,
    #[prost(string, tag = "6")]
    pub relationship_source_table_name: String,
    #[prost(string, tag = "7")]
    pub relationship_target_database_name: String,
    #[prost(string, tag = "8")]
    pub relationship_target_table_name: String,
    #[prost(string, tag = "9")]
    pub mapping_name: String,
    #[prost(string, tag = "10")]
    pub policy_id: String,
    #[prost(string, tag = "11")]
    pub status: String,
    #[prost(string, tag = "12")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListRelationshipsRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListRelationshipsResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub relationships: Vec<Relationship>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowRelationshipRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub relationship_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowRelationshipResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub relationship: Option<Relationship>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddRelationshipRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub relationship_name: String,
    #[prost(string, optional, tag = "4")]
    pub relationship_description: Option<String>,
    #[prost(string, tag = "5")]
    pub relationship_type: String,
    #[prost(string, tag = "6")]
    pub relationship_source_database_name: String,
    #[prost(string, tag = "7")]
    pub relationship_source_table_name: String,
    #[prost(string, tag = "8")]
    pub relationship_target_database_name: String,
    #[prost(string, tag = "9")]
    pub relationship_target_table_name: String,
    #[prost(string, tag = "10")]
    pub mapping_name: String,
    #[prost(string, optional, tag = "11")]
    pub policy_id: Option<String>,
    #[prost(string, tag = "12")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddRelationshipResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub relationship: Option<Relationship>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyRelationshipRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub relationship_name: String,
    #[prost(string, optional, tag = "4")]
    pub relationship_name_new: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub relationship_description: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub policy_id: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyRelationshipResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub relationship: Option<Relationship>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRelationshipRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub relationship_name: String,
    #[prost(bool, optional, tag = "4")]
    pub force: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRelationshipResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StartRelationshipRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub relationship_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StartRelationshipResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub relationship: Option<Relationship>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StopRelationshipRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub workspace_name: String,
    #[prost(string, tag = "3")]
    pub relationship_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StopRelationshipResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub relationship: Option<Relationship>,
}

// ---------------------------------------------------------------------------
// core.v1.TransformationService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Transformation {
    #[prost(string, tag = "1")]
    pub transformation_id: String,
    #[prost(string, tag = "2")]
    pub transformation_name: String,
    #[prost(string, tag = "3")]
    pub transformation_description: String,
    #[prost(string, tag = "4")]
    pub transformation_type: String,
    #[prost(string, tag = "5")]
    pub transformation_version: String,
    #[prost(string, tag = "6")]
    pub transformation_function: String,
    #[prost(bool, tag = "7")]
    pub transformation_builtin: bool,
    #[prost(string, tag = "8")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListTransformationsRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListTransformationsResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, repeated, tag = "2")]
    pub transformations: Vec<Transformation>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowTransformationRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub transformation_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShowTransformationResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub transformation: Option<Transformation>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddTransformationRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub transformation_name: String,
    #[prost(string, optional, tag = "3")]
    pub transformation_description: Option<String>,
    #[prost(string, tag = "4")]
    pub transformation_type: String,
    #[prost(string, tag = "5")]
    pub transformation_version: String,
    #[prost(string, tag = "6")]
    pub transformation_function: String,
    #[prost(string, tag = "7")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddTransformationResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub transformation: Option<Transformation>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyTransformationRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub transformation_name: String,
    #[prost(string, optional, tag = "3")]
    pub transformation_name_new: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub transformation_description: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub transformation_version: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub transformation_function: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifyTransformationResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
    #[prost(message, optional, tag = "2")]
    pub transformation: Option<Transformation>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteTransformationRequest {
    #[prost(string, tag = "1")]
    pub tenant_id: String,
    #[prost(string, tag = "2")]
    pub transformation_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteTransformationResponse {
    #[prost(message, optional, tag = "1")]
    pub outcome: Option<Outcome>,
}
