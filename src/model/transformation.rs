use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub transformation_id: String,
    pub transformation_name: String,
    pub transformation_description: String,
    pub transformation_type: String,
    pub transformation_version: String,
    pub function_name: String,
    /// Shipped with the core service; cannot be modified or deleted.
    pub builtin: bool,
    pub owner_id: String,
}

impl From<proto::Transformation> for Transformation {
    fn from(transformation: proto::Transformation) -> Self {
        Self {
            transformation_id: transformation.transformation_id,
            transformation_name: transformation.transformation_name,
            transformation_description: transformation.transformation_description,
            transformation_type: transformation.transformation_type,
            transformation_version: transformation.transformation_version,
            function_name: transformation.transformation_function,
            builtin: transformation.transformation_builtin,
            owner_id: transformation.owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub transformation: Transformation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub transformations: Vec<Transformation>,
}
