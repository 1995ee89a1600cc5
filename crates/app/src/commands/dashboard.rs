use bizhub_domain::{DashboardStats, UpcomingMeeting};

use crate::context::AppContext;

/// Dashboard as loaded during mount
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub upcoming: Vec<UpcomingMeeting>,
}

pub fn dashboard(ctx: &AppContext) -> DashboardView {
    DashboardView { stats: ctx.dashboard.stats(), upcoming: ctx.dashboard.upcoming() }
}
