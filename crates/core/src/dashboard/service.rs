//! Dashboard service

use std::sync::Arc;

use bizhub_domain::{DashboardStats, Result, UpcomingMeeting};
use parking_lot::RwLock;
use tracing::warn;

use super::ports::DashboardGateway;

pub struct DashboardService {
    gateway: Arc<dyn DashboardGateway>,
    stats: RwLock<DashboardStats>,
    meetings: RwLock<Vec<UpcomingMeeting>>,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn DashboardGateway>) -> Self {
        Self {
            gateway,
            stats: RwLock::new(DashboardStats::default()),
            meetings: RwLock::new(Vec::new()),
        }
    }

    /// Reload counters; prior counters survive a failure.
    pub async fn refresh_stats(&self) -> Result<DashboardStats> {
        match self.gateway.stats().await {
            Ok(stats) => {
                *self.stats.write() = stats.clone();
                Ok(stats)
            }
            Err(err) => {
                warn!(error = %err, "dashboard stats refresh failed");
                Err(err)
            }
        }
    }

    pub async fn refresh_upcoming(&self) -> Result<Vec<UpcomingMeeting>> {
        match self.gateway.upcoming_meetings().await {
            Ok(meetings) => {
                *self.meetings.write() = meetings.clone();
                Ok(meetings)
            }
            Err(err) => {
                warn!(error = %err, "upcoming meetings refresh failed");
                Err(err)
            }
        }
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats.read().clone()
    }

    pub fn upcoming(&self) -> Vec<UpcomingMeeting> {
        self.meetings.read().clone()
    }
}
