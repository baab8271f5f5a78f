pub mod database;
pub mod identity;
pub mod mapping;
pub mod outcome;
pub mod relationship;
pub mod repo;
pub mod tenant;
pub mod transformation;
pub mod workspace;

pub use database::*;
pub use identity::*;
pub use mapping::*;
pub use outcome::*;
pub use relationship::*;
pub use repo::*;
pub use tenant::*;
pub use transformation::*;
pub use workspace::*;
