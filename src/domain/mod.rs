//! Record shapes shared with calling code.
//!
//! These types mirror rows of the remote `profiles`, `workflows` and
//! `analytics` tables. They are created and mutated entirely server-side;
//! this crate only declares their shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row type backed by a remote table.
pub trait Record {
    /// Remote table name.
    const TABLE: &'static str;
}

/// Role attached to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record (`profiles` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl Record for Profile {
    const TABLE: &'static str = "profiles";
}

/// Workflow run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    Paused,
    Failed,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Active => "active",
            WorkflowStatus::Paused => "paused",
            WorkflowStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named automated process (`workflows` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: WorkflowStatus,
    pub executions: u64,
    /// Left as delivered by the service; no range is enforced.
    pub success_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Workflow {
    const TABLE: &'static str = "workflows";
}

/// A single metric observation (`analytics` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub id: String,
    pub user_id: String,
    pub metric_name: String,
    pub metric_value: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Analytics {
    const TABLE: &'static str = "analytics";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_from_row() {
        let row = json!({
            "id": "8d0c7a4e-1f7b-4d0a-9a55-3b1e4a2f6c11",
            "email": "ada@example.com",
            "full_name": "Ada Lovelace",
            "created_at": "2024-03-01T10:15:00.123456+00:00",
            "updated_at": "2024-03-02T08:00:00+00:00",
            "role": "admin"
        });

        let profile: Profile = serde_json::from_value(row).unwrap();
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.avatar_url, None);
        assert_eq!(profile.organization_id, None);
        assert_eq!(profile.role, Role::Admin);
    }

    #[test]
    fn test_profile_rejects_unknown_role() {
        let row = json!({
            "id": "1",
            "email": "x@example.com",
            "created_at": "2024-03-01T10:15:00Z",
            "updated_at": "2024-03-01T10:15:00Z",
            "role": "owner"
        });

        assert!(serde_json::from_value::<Profile>(row).is_err());
    }

    #[test]
    fn test_workflow_serializes_without_absent_fields() {
        let created = "2024-05-10T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let workflow = Workflow {
            id: "wf-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Nightly sync".to_string(),
            description: None,
            status: WorkflowStatus::Paused,
            executions: 42,
            success_rate: 97.5,
            last_run: None,
            created_at: created,
            updated_at: created,
        };

        let value = serde_json::to_value(&workflow).unwrap();
        assert_eq!(value["status"], "paused");
        assert_eq!(value["executions"], 42);
        assert!(value.get("description").is_none());
        assert!(value.get("last_run").is_none());
    }

    #[test]
    fn test_analytics_keeps_value_opaque() {
        let row = json!({
            "id": "a-1",
            "user_id": "user-1",
            "metric_name": "conversion",
            "metric_value": "12.5%",
            "date": "2024-05-10",
            "created_at": "2024-05-10T00:00:00Z"
        });

        let analytics: Analytics = serde_json::from_value(row).unwrap();
        assert_eq!(analytics.metric_value, "12.5%");
        assert_eq!(analytics.date, "2024-05-10");
    }

    #[test]
    fn test_table_names() {
        assert_eq!(Profile::TABLE, "profiles");
        assert_eq!(Workflow::TABLE, "workflows");
        assert_eq!(Analytics::TABLE, "analytics");
        assert_eq!(WorkflowStatus::Failed.to_string(), "failed");
        assert_eq!(Role::Client.to_string(), "client");
    }
}
