//! Checkout service
//!
//! `request_payment` hands the browser over to the provider's hosted page.
//! When the provider sends the user back, the page URL carries
//! `?session_id=...` and `resume_from_url` checks that session exactly once.

use std::sync::Arc;

use bizhub_domain::constants::{CHECKOUT_SESSION_QUERY_PARAM, PAYMENT_SUCCESS_MESSAGE};
use bizhub_domain::{
    BizHubError, CheckoutRequest, CheckoutSession, CheckoutStatus, PaymentRecord, Result,
};
use tracing::{info, warn};
use url::Url;

use super::ports::CheckoutGateway;
use crate::dashboard::DashboardService;
use crate::entities::ListModule;
use crate::interaction_ports::{Interaction, Navigator};

/// Extract the checkout session id from a page URL.
pub fn session_id_from_url(page_url: &str) -> Result<Option<String>> {
    let url = Url::parse(page_url)
        .map_err(|err| BizHubError::InvalidInput(format!("invalid page URL '{page_url}': {err}")))?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == CHECKOUT_SESSION_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}

pub struct CheckoutService {
    gateway: Arc<dyn CheckoutGateway>,
    navigator: Arc<dyn Navigator>,
    interaction: Arc<dyn Interaction>,
    payments: Arc<ListModule<PaymentRecord>>,
    dashboard: Arc<DashboardService>,
}

impl CheckoutService {
    pub fn new(
        gateway: Arc<dyn CheckoutGateway>,
        navigator: Arc<dyn Navigator>,
        interaction: Arc<dyn Interaction>,
        payments: Arc<ListModule<PaymentRecord>>,
        dashboard: Arc<DashboardService>,
    ) -> Self {
        Self { gateway, navigator, interaction, payments, dashboard }
    }

    /// Create a checkout session and navigate to its URL.
    pub async fn request_payment(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        let session = self.gateway.create_session(request).await.map_err(|err| {
            warn!(error = %err, "checkout session creation failed");
            err
        })?;
        info!(session_id = %session.session_id, "redirecting to checkout");
        self.navigator.navigate(&session.url);
        Ok(session)
    }

    /// Check the session once. No polling.
    pub async fn poll_status(&self, session_id: &str) -> Result<CheckoutStatus> {
        let status = self.gateway.session_status(session_id).await.map_err(|err| {
            warn!(session_id, error = %err, "checkout status check failed");
            err
        })?;

        if status.is_paid() {
            info!(session_id, "checkout paid");
            self.interaction.alert(PAYMENT_SUCCESS_MESSAGE);
            // Failures are logged by the modules themselves.
            let _ = futures::join!(self.payments.list(), self.dashboard.refresh_stats());
        }
        Ok(status)
    }

    /// `None` when the page URL carries no checkout session.
    pub async fn resume_from_url(&self, page_url: &str) -> Result<Option<CheckoutStatus>> {
        match session_id_from_url(page_url)? {
            Some(session_id) => self.poll_status(&session_id).await.map(Some),
            None => Ok(None),
        }
    }
}
