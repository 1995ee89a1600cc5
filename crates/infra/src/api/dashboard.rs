use std::sync::Arc;

use async_trait::async_trait;
use bizhub_core::DashboardGateway;
use bizhub_domain::{DashboardStats, Result, UpcomingMeeting, UpcomingMeetings};

use super::client::ApiClient;

pub struct ApiDashboardGateway {
    client: Arc<ApiClient>,
}

impl ApiDashboardGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardGateway for ApiDashboardGateway {
    async fn stats(&self) -> Result<DashboardStats> {
        Ok(self.client.get("/api/dashboard/stats").await?)
    }

    async fn upcoming_meetings(&self) -> Result<Vec<UpcomingMeeting>> {
        let envelope: UpcomingMeetings = self.client.get("/api/calendar/upcoming").await?;
        Ok(envelope.upcoming_meetings)
    }
}
