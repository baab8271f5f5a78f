use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub relationship_id: String,
    pub relationship_name: String,
    pub relationship_description: String,
    pub relationship_type: String,
    pub source_database_name: String,
    pub source_table_name: String,
    pub target_database_name: String,
    pub target_table_name: String,
    pub mapping_name: String,
    pub policy_id: String,
    pub status: String,
    pub owner_id: String,
}

impl From<proto::Relationship> for Relationship {
    fn from(relationship: proto::Relationship) -> Self {
        Self {
            relationship_id: relationship.relationship_id,
            relationship_name: relationship.relationship_name,
            relationship_description: relationship.relationship_description,
            relationship_type: relationship.relationship_type,
            source_database_name: relationship.relationship_source_database_name,
            source_table_name: relationship.relationship_source_table_name,
            target_database_name: relationship.relationship_target_database_name,
            target_table_name: relationship.relationship_target_table_name,
            mapping_name: relationship.mapping_name,
            policy_id: relationship.policy_id,
            status: relationship.status,
            owner_id: relationship.owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub relationship: Relationship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub relationships: Vec<Relationship>,
}
