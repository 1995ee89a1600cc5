//! Application context - dependency injection container

use std::sync::Arc;

use bizhub_core::{
    CheckoutService, DashboardService, EntityModule, Interaction, IntegrationsPanel,
    KeyValueStore, ListModule, Navigator, ProfileService, SessionService, SessionState,
    ThemeService, ThemeSurface,
};
use bizhub_domain::{BizHubError, Client, Config, PaymentRecord, Project, Result, TeamMember};
use bizhub_infra::api::{ApiClientConfig, StoredTokenProvider};
use bizhub_infra::{
    ApiAuthGateway, ApiClient, ApiDashboardGateway, ApiEntityGateway, ApiIntegrationGateway,
    ApiPaymentGateway, FileKeyValueStore,
};
use tracing::{info, warn};

use crate::shell::{DocumentSurface, LocationNavigator};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub api: Arc<ApiClient>,
    pub store: Arc<dyn KeyValueStore>,

    pub session: Arc<SessionService>,
    pub theme: Arc<ThemeService>,
    pub profile: Arc<ProfileService>,

    pub clients: Arc<EntityModule<Client>>,
    pub projects: Arc<EntityModule<Project>>,
    pub team: Arc<EntityModule<TeamMember>>,
    pub payments: Arc<ListModule<PaymentRecord>>,

    pub dashboard: Arc<DashboardService>,
    pub checkout: Arc<CheckoutService>,
    pub integrations: Arc<IntegrationsPanel>,

    pub navigator: Arc<LocationNavigator>,
    pub surface: Arc<DocumentSurface>,
}

impl AppContext {
    /// Build the context with the file-backed store from `config.storage`.
    ///
    /// # Errors
    /// Returns an error if the storage file is unreadable or the HTTP client
    /// cannot be built.
    pub fn new(config: Config, interaction: Arc<dyn Interaction>) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::open(&config.storage.path)?);
        Self::with_store(config, store, interaction)
    }

    /// Build the context around an explicit key-value store.
    ///
    /// Uses a fresh [`LocationNavigator`] and [`DocumentSurface`], both
    /// reachable from the returned context.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_store(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        interaction: Arc<dyn Interaction>,
    ) -> Result<Self> {
        let navigator = Arc::new(LocationNavigator::new());
        let surface = Arc::new(DocumentSurface::new());
        let nav_port: Arc<dyn Navigator> = navigator.clone();
        let surface_port: Arc<dyn ThemeSurface> = surface.clone();

        let tokens = Arc::new(StoredTokenProvider::new(store.clone()));
        let api = Arc::new(
            ApiClient::new(ApiClientConfig::from(&config.api), tokens)
                .map_err(BizHubError::from)?,
        );

        let auth = Arc::new(ApiAuthGateway::new(api.clone()));
        let session = Arc::new(SessionService::new(auth, store.clone()));
        let theme = Arc::new(ThemeService::new(store.clone(), surface_port));
        let profile = Arc::new(ProfileService::new(session.clone()));

        let clients = Arc::new(EntityModule::<Client>::new(
            Arc::new(ApiEntityGateway::<Client>::new(api.clone())),
            interaction.clone(),
        ));
        let projects = Arc::new(EntityModule::<Project>::new(
            Arc::new(ApiEntityGateway::<Project>::new(api.clone())),
            interaction.clone(),
        ));
        let team = Arc::new(EntityModule::<TeamMember>::new(
            Arc::new(ApiEntityGateway::<TeamMember>::new(api.clone())),
            interaction.clone(),
        ));

        let payment_gateway = Arc::new(ApiPaymentGateway::new(api.clone()));
        let payments = Arc::new(ListModule::<PaymentRecord>::new(payment_gateway.clone()));
        let dashboard =
            Arc::new(DashboardService::new(Arc::new(ApiDashboardGateway::new(api.clone()))));
        let checkout = Arc::new(CheckoutService::new(
            payment_gateway,
            nav_port,
            interaction.clone(),
            payments.clone(),
            dashboard.clone(),
        ));

        let integrations = Arc::new(IntegrationsPanel::new(
            Arc::new(ApiIntegrationGateway::new(api.clone())),
            interaction,
        ));

        info!(base_url = %api.base_url(), "application context ready");

        Ok(Self {
            config,
            api,
            store,
            session,
            theme,
            profile,
            clients,
            projects,
            team,
            payments,
            dashboard,
            checkout,
            integrations,
            navigator,
            surface,
        })
    }

    /// Mount the application at `page_url`.
    ///
    /// Applies the stored theme, bootstraps the session and, when signed in,
    /// fetches every collection and the dashboard concurrently. A
    /// `session_id` on the page URL is checked once whatever the session
    /// state.
    pub async fn mount(&self, page_url: Option<&str>) -> SessionState {
        self.theme.mount();

        let state = self.session.bootstrap().await;
        if matches!(state, SessionState::Authenticated(_)) {
            self.refresh_all().await;
        }

        if let Some(url) = page_url {
            if let Err(err) = self.checkout.resume_from_url(url).await {
                warn!(error = %err, "checkout return check failed");
            }
        }
        state
    }

    /// Fetch every collection and the dashboard. Failures keep prior state.
    pub async fn refresh_all(&self) {
        let _ = futures::join!(
            self.clients.list(),
            self.projects.list(),
            self.team.list(),
            self.payments.list(),
            self.dashboard.refresh_stats(),
            self.dashboard.refresh_upcoming(),
            self.integrations.list(),
        );
    }
}
