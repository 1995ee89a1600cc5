//! Team member records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::impl_domain_status_conversions;
use crate::utils::timestamps::deserialize_lenient;

/// Employment relationship of a team member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    #[default]
    Internal,
    Freelancer,
}

impl_domain_status_conversions!(MemberType {
    Internal => "internal",
    Freelancer => "freelancer",
});

/// Person working on projects, internal staff or freelancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default)]
    pub member_type: MemberType,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for TeamMember {
    const COLLECTION_PATH: &'static str = "/api/team-members";
    const LABEL: &'static str = "team member";

    fn id(&self) -> &str {
        &self.id
    }
}
