use async_trait::async_trait;
use bizhub_domain::{DashboardStats, Result, UpcomingMeeting};

#[async_trait]
pub trait DashboardGateway: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats>;

    async fn upcoming_meetings(&self) -> Result<Vec<UpcomingMeeting>>;
}
