//! Dashboard aggregates

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::PaymentRecord;
use crate::utils::timestamps::deserialize_lenient;

/// Counters computed server-side for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub clients_count: u64,
    pub projects_count: u64,
    pub team_members_count: u64,
    pub active_projects: u64,
    /// Sum of completed received payments
    pub total_received: f64,
    /// Sum of completed sent payments
    pub total_sent: f64,
    /// Latest five payments, newest first
    pub recent_payments: Vec<PaymentRecord>,
}

impl DashboardStats {
    pub fn net_balance(&self) -> f64 {
        self.total_received - self.total_sent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingMeeting {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub attendees_count: u32,
}

/// Envelope of `GET /api/calendar/upcoming`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpcomingMeetings {
    #[serde(default)]
    pub upcoming_meetings: Vec<UpcomingMeeting>,
}
