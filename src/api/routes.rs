use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;
use crate::api::{
    database_handlers, handlers, identity, mapping_handlers, relationship_handlers,
    repo_handlers, tenant_handlers, transformation_handlers, workspace_handlers,
};
use crate::downstream::CoreClient;

/// Full router: the unauthenticated health check plus every tenant-scoped
/// route behind the identity resolver.
pub fn create_router<C: CoreClient>() -> Router<AppState<C>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check::<C>))
        .merge(api_routes::<C>().route_layer(middleware::from_fn(identity::resolve_identity)))
}

/// Tenant-scoped routes without the identity resolver. Handlers still
/// refuse to run when no `Identity` is attached.
pub fn api_routes<C: CoreClient>() -> Router<AppState<C>> {
    Router::new()
        // Tenants
        .route(
            "/:tenant_url/api/v1/tenants",
            get(tenant_handlers::list_tenants::<C>).post(tenant_handlers::add_tenant::<C>),
        )
        .route(
            "/:tenant_url/api/v1/tenants/:tenant_id",
            get(tenant_handlers::show_tenant::<C>)
                .put(tenant_handlers::modify_tenant::<C>)
                .delete(tenant_handlers::delete_tenant::<C>),
        )
        // Workspaces
        .route(
            "/:tenant_url/api/v1/workspaces",
            get(workspace_handlers::list_workspaces::<C>)
                .post(workspace_handlers::add_workspace::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name",
            get(workspace_handlers::show_workspace::<C>)
                .put(workspace_handlers::modify_workspace::<C>)
                .delete(workspace_handlers::delete_workspace::<C>),
        )
        // Databases
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases",
            get(database_handlers::list_databases::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/connect",
            post(database_handlers::connect_database::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/transform",
            post(database_handlers::transform_data::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name",
            get(database_handlers::show_database::<C>).put(database_handlers::modify_database::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/disconnect",
            post(database_handlers::disconnect_database::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/reconnect",
            post(database_handlers::reconnect_database::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/wipe",
            post(database_handlers::wipe_database::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/databases/:database_name/drop",
            post(database_handlers::drop_database::<C>),
        )
        // Repos
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/repos",
            get(repo_handlers::list_repos::<C>).post(repo_handlers::add_repo::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name",
            get(repo_handlers::show_repo::<C>)
                .put(repo_handlers::modify_repo::<C>)
                .delete(repo_handlers::delete_repo::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/clone",
            post(repo_handlers::clone_repo::<C>),
        )
        // Branches
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name",
            get(repo_handlers::show_branch::<C>)
                .put(repo_handlers::modify_branch::<C>)
                .delete(repo_handlers::delete_branch::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name/attach",
            post(repo_handlers::attach_branch::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/repos/:repo_name/branches/:branch_name/detach",
            post(repo_handlers::detach_branch::<C>),
        )
        // Mappings
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/mappings",
            get(mapping_handlers::list_mappings::<C>).post(mapping_handlers::add_mapping::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name",
            get(mapping_handlers::show_mapping::<C>)
                .put(mapping_handlers::modify_mapping::<C>)
                .delete(mapping_handlers::delete_mapping::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name/attach-rule",
            post(mapping_handlers::attach_mapping_rule::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/mappings/:mapping_name/detach-rule",
            post(mapping_handlers::detach_mapping_rule::<C>),
        )
        // Mapping rules
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules",
            get(mapping_handlers::list_mapping_rules::<C>)
                .post(mapping_handlers::add_mapping_rule::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/mapping-rules/:mapping_rule_name",
            get(mapping_handlers::show_mapping_rule::<C>)
                .put(mapping_handlers::modify_mapping_rule::<C>)
                .delete(mapping_handlers::delete_mapping_rule::<C>),
        )
        // Relationships
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/relationships",
            get(relationship_handlers::list_relationships::<C>)
                .post(relationship_handlers::add_relationship::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name",
            get(relationship_handlers::show_relationship::<C>)
                .put(relationship_handlers::modify_relationship::<C>)
                .delete(relationship_handlers::delete_relationship::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name/start",
            post(relationship_handlers::start_relationship::<C>),
        )
        .route(
            "/:tenant_url/api/v1/workspaces/:workspace_name/relationships/:relationship_name/stop",
            post(relationship_handlers::stop_relationship::<C>),
        )
        // Transformations
        .route(
            "/:tenant_url/api/v1/transformations",
            get(transformation_handlers::list_transformations::<C>)
                .post(transformation_handlers::add_transformation::<C>),
        )
        .route(
            "/:tenant_url/api/v1/transformations/:transformation_name",
            get(transformation_handlers::show_transformation::<C>)
                .put(transformation_handlers::modify_transformation::<C>)
                .delete(transformation_handlers::delete_transformation::<C>),
        )
}
