pub mod database_handlers;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod mapping_handlers;
pub mod relationship_handlers;
pub mod repo_handlers;
pub mod request;
pub mod respond;
pub mod routes;
pub mod state;
pub mod tenant_handlers;
pub mod transformation_handlers;
pub mod workspace_handlers;

pub use error::ApiError;
pub use handlers::*;
pub use respond::{classify, Classification, ErrorResponse, Reply};
pub use routes::*;
pub use state::{AppState, OperationCounter, OperationGuard};
