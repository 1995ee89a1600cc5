//! Project records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::impl_domain_status_conversions;
use crate::utils::timestamps::deserialize_lenient;

/// Lifecycle state of a project; owned by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
    Cancelled,
}

impl_domain_status_conversions!(ProjectStatus {
    Active => "active",
    Completed => "completed",
    OnHold => "on_hold",
    Cancelled => "cancelled",
});

/// A piece of work delivered for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub client_id: String,
    /// Resolved by the server for display; absent when the client is gone
    #[serde(default, skip_serializing)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for Project {
    const COLLECTION_PATH: &'static str = "/api/projects";
    const LABEL: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }
}
