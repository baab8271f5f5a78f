use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub mapping_id: String,
    pub mapping_name: String,
    pub mapping_description: String,
    pub scope: String,
    pub source: String,
    pub target: String,
    pub policy_id: String,
    pub owner_id: String,
    /// Names of attached rules, in application order.
    pub mapping_rules: Vec<String>,
}

impl From<proto::Mapping> for Mapping {
    fn from(mapping: proto::Mapping) -> Self {
        Self {
            mapping_id: mapping.mapping_id,
            mapping_name: mapping.mapping_name,
            mapping_description: mapping.mapping_description,
            scope: mapping.mapping_type,
            source: mapping.mapping_source,
            target: mapping.mapping_target,
            policy_id: mapping.policy_id,
            owner_id: mapping.owner_id,
            mapping_rules: mapping.mapping_rule_names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRule {
    pub mapping_rule_id: String,
    pub mapping_rule_name: String,
    pub mapping_rule_description: String,
    pub source: String,
    pub target: String,
    pub transformation_name: String,
    pub owner_id: String,
    pub mapping_count: i32,
}

impl From<proto::MappingRule> for MappingRule {
    fn from(rule: proto::MappingRule) -> Self {
        Self {
            mapping_rule_id: rule.mapping_rule_id,
            mapping_rule_name: rule.mapping_rule_name,
            mapping_rule_description: rule.mapping_rule_description,
            source: rule.mapping_rule_source,
            target: rule.mapping_rule_target,
            transformation_name: rule.mapping_rule_transformation_name,
            owner_id: rule.owner_id,
            mapping_count: rule.mapping_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub mapping: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRuleResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub mapping_rule: MappingRule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRuleListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub mapping_rules: Vec<MappingRule>,
}
