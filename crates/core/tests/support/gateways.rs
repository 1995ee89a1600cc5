//! In-memory backend fakes
//!
//! Each fake keeps a server-side collection and a call log so tests can
//! assert which requests would have been sent.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bizhub_core::{
    AuthGateway, CheckoutGateway, CollectionReader, DashboardGateway, EntityGateway,
    IntegrationGateway,
};
use bizhub_domain::{
    AuthGrant, BizHubError, CheckoutRequest, CheckoutSession, CheckoutStatus,
    ConnectIntegrationRequest, DashboardStats, EditableResource, Integration, IntegrationType,
    ProfileUpdate, Resource, Result as DomainResult, UpcomingMeeting, User,
};
use parking_lot::Mutex;

/// Shared call log entry, e.g. `"create"` or `"delete:c-1"`
pub type Calls = Mutex<Vec<String>>;

fn offline() -> BizHubError {
    BizHubError::Network("connection refused".into())
}

/* -------------------------------------------------------------------------- */
/* Collections                                                                */
/* -------------------------------------------------------------------------- */

/// Server-side collection of an editable resource
pub struct FakeEntityGateway<R: EditableResource> {
    records: Mutex<Vec<R>>,
    build: fn(&str, &R::Form) -> R,
    calls: Calls,
    offline: AtomicBool,
    next_id: Mutex<u32>,
}

impl<R: EditableResource> FakeEntityGateway<R> {
    pub fn new(build: fn(&str, &R::Form) -> R) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            build,
            calls: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
            next_id: Mutex::new(0),
        }
    }

    pub fn seeded(build: fn(&str, &R::Form) -> R, records: Vec<R>) -> Self {
        let fake = Self::new(build);
        *fake.records.lock() = records;
        fake
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == call).count()
    }

    fn check(&self, call: String) -> DomainResult<()> {
        self.calls.lock().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(())
    }
}

#[async_trait]
impl<R: EditableResource> EntityGateway<R> for FakeEntityGateway<R> {
    async fn list(&self) -> DomainResult<Vec<R>> {
        self.check("list".into())?;
        Ok(self.records.lock().clone())
    }

    async fn get(&self, id: &str) -> DomainResult<R> {
        self.check(format!("get:{id}"))?;
        self.records
            .lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| BizHubError::NotFound(format!("{} {id}", R::LABEL)))
    }

    async fn create(&self, form: &R::Form) -> DomainResult<R> {
        self.check("create".into())?;
        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            format!("{}-{}", R::LABEL.replace(' ', "-"), *next)
        };
        let record = (self.build)(&id, form);
        self.records.lock().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, form: &R::Form) -> DomainResult<()> {
        self.check(format!("update:{id}"))?;
        let mut records = self.records.lock();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| BizHubError::NotFound(format!("{} {id}", R::LABEL)))?;
        *slot = (self.build)(id, form);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.check(format!("delete:{id}"))?;
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(BizHubError::NotFound(format!("{} {id}", R::LABEL)));
        }
        Ok(())
    }
}

/// Read-only collection (payments)
pub struct FakeReader<R> {
    pub records: Mutex<Vec<R>>,
    pub calls: Calls,
}

impl<R> FakeReader<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records: Mutex::new(records), calls: Mutex::new(Vec::new()) }
    }

    pub fn list_calls(&self) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == "list").count()
    }
}

#[async_trait]
impl<R: Resource> CollectionReader<R> for FakeReader<R> {
    async fn list(&self) -> DomainResult<Vec<R>> {
        self.calls.lock().push("list".into());
        Ok(self.records.lock().clone())
    }

    async fn get(&self, id: &str) -> DomainResult<R> {
        self.calls.lock().push(format!("get:{id}"));
        self.records
            .lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| BizHubError::NotFound(id.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Auth                                                                       */
/* -------------------------------------------------------------------------- */

pub struct FakeAuth {
    /// User the backend considers signed in
    pub current: Mutex<Option<User>>,
    pub grant: Option<AuthGrant>,
    pub updates: Mutex<Vec<ProfileUpdate>>,
    pub offline: AtomicBool,
}

impl FakeAuth {
    pub fn signed_out(grant: Option<AuthGrant>) -> Self {
        Self {
            current: Mutex::new(None),
            grant,
            updates: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }

    pub fn signed_in(user: User) -> Self {
        let fake = Self::signed_out(None);
        *fake.current.lock() = Some(user);
        fake
    }
}

#[async_trait]
impl AuthGateway for FakeAuth {
    async fn current_user(&self) -> DomainResult<Option<User>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(self.current.lock().clone())
    }

    async fn exchange_code(&self, _code: &str) -> DomainResult<AuthGrant> {
        let grant =
            self.grant.clone().ok_or_else(|| BizHubError::Auth("invalid code".into()))?;
        *self.current.lock() = Some(grant.user.clone());
        Ok(grant)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> DomainResult<()> {
        self.updates.lock().push(update.clone());
        if let Some(user) = self.current.lock().as_mut() {
            user.name = Some(update.name.clone());
            user.profile_picture = update.profile_picture.clone();
            user.theme = update.theme;
        }
        Ok(())
    }
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        name: Some("Dana".into()),
        profile_picture: None,
        theme: None,
    }
}

/* -------------------------------------------------------------------------- */
/* Dashboard and checkout                                                     */
/* -------------------------------------------------------------------------- */

#[derive(Default)]
pub struct FakeDashboard {
    pub stats: Mutex<DashboardStats>,
    pub stats_calls: Mutex<usize>,
    pub offline: AtomicBool,
}

#[async_trait]
impl DashboardGateway for FakeDashboard {
    async fn stats(&self) -> DomainResult<DashboardStats> {
        *self.stats_calls.lock() += 1;
        if self.offline.load(Ordering::SeqCst) {
            return Err(offline());
        }
        Ok(self.stats.lock().clone())
    }

    async fn upcoming_meetings(&self) -> DomainResult<Vec<UpcomingMeeting>> {
        Ok(Vec::new())
    }
}

pub struct FakeCheckout {
    pub session: CheckoutSession,
    pub payment_status: String,
    pub requests: Mutex<Vec<CheckoutRequest>>,
    pub status_checks: Mutex<Vec<String>>,
}

impl FakeCheckout {
    pub fn new(url: &str, payment_status: &str) -> Self {
        Self {
            session: CheckoutSession { url: url.to_string(), session_id: "cs_test_1".into() },
            payment_status: payment_status.to_string(),
            requests: Mutex::new(Vec::new()),
            status_checks: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CheckoutGateway for FakeCheckout {
    async fn create_session(&self, request: &CheckoutRequest) -> DomainResult<CheckoutSession> {
        self.requests.lock().push(request.clone());
        Ok(self.session.clone())
    }

    async fn session_status(&self, session_id: &str) -> DomainResult<CheckoutStatus> {
        self.status_checks.lock().push(session_id.to_string());
        Ok(CheckoutStatus {
            status: "complete".into(),
            payment_status: self.payment_status.clone(),
            amount_total: Some(9990),
            currency: Some("usd".into()),
        })
    }
}

/* -------------------------------------------------------------------------- */
/* Integrations                                                               */
/* -------------------------------------------------------------------------- */

#[derive(Default)]
pub struct FakeIntegrations {
    pub records: Mutex<Vec<Integration>>,
    pub connects: Mutex<Vec<ConnectIntegrationRequest>>,
    pub disconnects: Mutex<Vec<IntegrationType>>,
    pub reject_connect: AtomicBool,
}

#[async_trait]
impl IntegrationGateway for FakeIntegrations {
    async fn list(&self) -> DomainResult<Vec<Integration>> {
        Ok(self.records.lock().clone())
    }

    async fn connect(&self, request: &ConnectIntegrationRequest) -> DomainResult<()> {
        self.connects.lock().push(request.clone());
        if self.reject_connect.load(Ordering::SeqCst) {
            return Err(BizHubError::InvalidInput("bad credentials".into()));
        }
        self.records.lock().push(Integration {
            id: None,
            integration_type: request.integration_type,
            is_connected: true,
            settings: request.settings.clone(),
            created_at: None,
            updated_at: None,
        });
        Ok(())
    }

    async fn disconnect(&self, integration_type: IntegrationType) -> DomainResult<()> {
        self.disconnects.lock().push(integration_type);
        self.records.lock().retain(|r| r.integration_type != integration_type);
        Ok(())
    }
}
