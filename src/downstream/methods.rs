//! Marker types for every core RPC, one per inbound operation with the same
//! name.

use super::proto;
use super::{CallBudget, CoreMethod};

macro_rules! core_methods {
    ($service:literal {
        $( $name:ident ( $request:ident ) -> $response:ident $( [$budget:ident] )? ; )*
    }) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl CoreMethod for $name {
                type Request = proto::$request;
                type Response = proto::$response;

                const PATH: &'static str =
                    concat!("/core.v1.", $service, "/", stringify!($name));
                const NAME: &'static str = stringify!($name);
                $( const BUDGET: CallBudget = CallBudget::$budget; )?
            }
        )*
    };
}

core_methods!("TenantService" {
    ListTenants(ListTenantsRequest) -> ListTenantsResponse;
    ShowTenant(ShowTenantRequest) -> ShowTenantResponse;
    AddTenant(AddTenantRequest) -> AddTenantResponse;
    ModifyTenant(ModifyTenantRequest) -> ModifyTenantResponse;
    DeleteTenant(DeleteTenantRequest) -> DeleteTenantResponse;
});

core_methods!("WorkspaceService" {
    ListWorkspaces(ListWorkspacesRequest) -> ListWorkspacesResponse;
    ShowWorkspace(ShowWorkspaceRequest) -> ShowWorkspaceResponse;
    AddWorkspace(AddWorkspaceRequest) -> AddWorkspaceResponse;
    ModifyWorkspace(ModifyWorkspaceRequest) -> ModifyWorkspaceResponse;
    DeleteWorkspace(DeleteWorkspaceRequest) -> DeleteWorkspaceResponse;
});

core_methods!("DatabaseService" {
    ListDatabases(ListDatabasesRequest) -> ListDatabasesResponse;
    ShowDatabase(ShowDatabaseRequest) -> ShowDatabaseResponse;
    ConnectDatabase(ConnectDatabaseRequest) -> ConnectDatabaseResponse;
    ModifyDatabase(ModifyDatabaseRequest) -> ModifyDatabaseResponse;
    DisconnectDatabase(DisconnectDatabaseRequest) -> DisconnectDatabaseResponse;
    ReconnectDatabase(ReconnectDatabaseRequest) -> ReconnectDatabaseResponse;
    WipeDatabase(WipeDatabaseRequest) -> WipeDatabaseResponse;
    DropDatabase(DropDatabaseRequest) -> DropDatabaseResponse;
    TransformData(TransformDataRequest) -> TransformDataResponse [Extended];
});

core_methods!("RepoService" {
    ListRepos(ListReposRequest) -> ListReposResponse;
    ShowRepo(ShowRepoRequest) -> ShowRepoResponse;
    AddRepo(AddRepoRequest) -> AddRepoResponse;
    ModifyRepo(ModifyRepoRequest) -> ModifyRepoResponse;
    DeleteRepo(DeleteRepoRequest) -> DeleteRepoResponse;
    CloneRepo(CloneRepoRequest) -> CloneRepoResponse;
    ShowBranch(ShowBranchRequest) -> ShowBranchResponse;
    ModifyBranch(ModifyBranchRequest) -> ModifyBranchResponse;
    AttachBranch(AttachBranchRequest) -> AttachBranchResponse;
    DetachBranch(DetachBranchRequest) -> DetachBranchResponse;
    DeleteBranch(DeleteBranchRequest) -> DeleteBranchResponse;
});

core_methods!("MappingService" {
    ListMappings(ListMappingsRequest) -> ListMappingsResponse;
    ShowMapping(ShowMappingRequest) -> ShowMappingResponse;
    AddMapping(AddMappingRequest) -> AddMappingResponse;
    ModifyMapping(ModifyMappingRequest) -> ModifyMappingResponse;
    DeleteMapping(DeleteMappingRequest) -> DeleteMappingResponse;
    AttachMappingRule(AttachMappingRuleRequest) -> AttachMappingRuleResponse;
    DetachMappingRule(DetachMappingRuleRequest) -> DetachMappingRuleResponse;
    ListMappingRules(ListMappingRulesRequest) -> ListMappingRulesResponse;
    ShowMappingRule(ShowMappingRuleRequest) -> ShowMappingRuleResponse;
    AddMappingRule(AddMappingRuleRequest) -> AddMappingRuleResponse;
    ModifyMappingRule(ModifyMappingRuleRequest) -> ModifyMappingRuleResponse;
    DeleteMappingRule(DeleteMappingRuleRequest) -> DeleteMappingRuleResponse;
});

core_methods!("RelationshipService" {
    ListRelationships(ListRelationshipsRequest) -> ListRelationshipsResponse;
    ShowRelationship(ShowRelationshipRequest) -> ShowRelationshipResponse;
    AddRelationship(AddRelationshipRequest) -> AddRelationshipResponse;
    ModifyRelationship(ModifyRelationshipRequest) -> ModifyRelationshipResponse;
    DeleteRelationship(DeleteRelationshipRequest) -> DeleteRelationshipResponse;
    StartRelationship(StartRelationshipRequest) -> StartRelationshipResponse;
    StopRelationship(StopRelationshipRequest) -> StopRelationshipResponse;
});

core_methods!("TransformationService" {
    ListTransformations(ListTransformationsRequest) -> ListTransformationsResponse;
    ShowTransformation(ShowTransformationRequest) -> ShowTransformationResponse;
    AddTransformation(AddTransformationRequest) -> AddTransformationResponse;
    ModifyTransformation(ModifyTransformationRequest) -> ModifyTransformationResponse;
    DeleteTransformation(DeleteTransformationRequest) -> DeleteTransformationResponse;
});
