use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

/// A connected database as exposed over REST. Connection fields drop the
/// `database_` prefix the core service uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub database_id: String,
    pub database_name: String,
    pub database_description: String,
    pub database_type: String,
    pub database_vendor: String,
    pub database_version: String,
    pub host: String,
    pub port: u32,
    pub username: String,
    pub db_name: String,
    pub enabled: bool,
    pub ssl: bool,
    pub instance_id: String,
    pub owner_id: String,
    pub connection_status: String,
}

impl From<proto::Database> for Database {
    fn from(database: proto::Database) -> Self {
        Self {
            database_id: database.database_id,
            database_name: database.database_name,
            database_description: database.database_description,
            database_type: database.database_type,
            database_vendor: database.database_vendor,
            database_version: database.database_version,
            host: database.database_host,
            port: database.database_port,
            username: database.database_username,
            db_name: database.database_db_name,
            enabled: database.database_enabled,
            ssl: database.database_ssl,
            instance_id: database.instance_id,
            owner_id: database.owner_id,
            connection_status: database.connection_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub database: Database,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub databases: Vec<Database>,
}

/// Result of a bulk data transformation between two databases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformDataResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub source_database_name: String,
    pub target_database_name: String,
    pub mode: String,
    pub tables_affected: u32,
    pub rows_transformed: i64,
}

impl From<proto::TransformDataResponse> for TransformDataResponse {
    fn from(response: proto::TransformDataResponse) -> Self {
        Self {
            outcome: Outcome::resolve(response.outcome, "Data transformation completed"),
            source_database_name: response.source_database_name,
            target_database_name: response.target_database_name,
            mode: response.mode,
            tables_affected: response.tables_affected,
            rows_transformed: response.rows_transformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_field_mapping() {
        let wire = proto::Database {
            database_id: "db_01".to_string(),
            database_name: "orders".to_string(),
            database_description: "order store".to_string(),
            database_type: "postgres".to_string(),
            database_vendor: "custom".to_string(),
            database_version: "16.2".to_string(),
            database_host: "db.internal".to_string(),
            database_port: 5432,
            database_username: "svc".to_string(),
            database_db_name: "orders_prod".to_string(),
            database_enabled: true,
            database_ssl: false,
            instance_id: "inst_01".to_string(),
            owner_id: "user_7".to_string(),
            connection_status: "connected".to_string(),
        };

        let json = serde_json::to_value(Database::from(wire)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "database_id": "db_01",
                "database_name": "orders",
                "database_description": "order store",
                "database_type": "postgres",
                "database_vendor": "custom",
                "database_version": "16.2",
                "host": "db.internal",
                "port": 5432,
                "username": "svc",
                "db_name": "orders_prod",
                "enabled": true,
                "ssl": false,
                "instance_id": "inst_01",
                "owner_id": "user_7",
                "connection_status": "connected"
            })
        );
    }

    #[test]
    fn test_envelope_flattens_outcome() {
        let response = DatabaseListResponse {
            outcome: Outcome::resolve(None, "Databases listed"),
            databases: vec![],
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["message"], "Databases listed");
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], "success");
        assert_eq!(json["databases"], serde_json::json!([]));
    }
}
