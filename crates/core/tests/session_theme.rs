//! Session bootstrap, login/logout, profile updates and theme persistence

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use bizhub_core::{ProfileService, SessionService, SessionState, ThemeService};
use bizhub_domain::constants::{SESSION_TOKEN_STORAGE_KEY, THEME_STORAGE_KEY};
use bizhub_domain::{AuthGrant, ProfileUpdate, Theme};
use support::gateways::{user, FakeAuth};
use support::storage::{MockStore, RecordingSurface};

#[tokio::test]
async fn bootstrap_without_user_is_unauthenticated() {
    let session = SessionService::new(Arc::new(FakeAuth::signed_out(None)), Arc::new(MockStore::default()));
    assert_eq!(session.state(), SessionState::Loading);

    assert_eq!(session.bootstrap().await, SessionState::Unauthenticated);
}

#[tokio::test]
async fn bootstrap_failure_is_unauthenticated() {
    let auth = FakeAuth::signed_in(user("u-1"));
    auth.offline.store(true, Ordering::SeqCst);
    let session = SessionService::new(Arc::new(auth), Arc::new(MockStore::default()));

    assert_eq!(session.bootstrap().await, SessionState::Unauthenticated);
    assert!(session.user().is_none());
}

#[tokio::test]
async fn login_persists_token_and_logout_clears_it() {
    let grant = AuthGrant { user: user("u-1"), token: "mock_jwt_token".into() };
    let store = Arc::new(MockStore::default());
    let session = SessionService::new(Arc::new(FakeAuth::signed_out(Some(grant))), store.clone());

    let signed_in = session.login("auth-code").await.unwrap();
    assert_eq!(signed_in.id, "u-1");
    assert_eq!(store.value(SESSION_TOKEN_STORAGE_KEY).as_deref(), Some("mock_jwt_token"));
    assert!(session.is_authenticated());

    session.logout().unwrap();
    assert_eq!(store.value(SESSION_TOKEN_STORAGE_KEY), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn blank_code_is_rejected_before_exchange() {
    let store = Arc::new(MockStore::default());
    let session = SessionService::new(Arc::new(FakeAuth::signed_out(None)), store.clone());

    assert!(session.login("  ").await.is_err());
    assert_eq!(store.value(SESSION_TOKEN_STORAGE_KEY), None);
}

#[tokio::test]
async fn profile_update_rereads_user() {
    let auth = Arc::new(FakeAuth::signed_in(user("u-1")));
    let session = Arc::new(SessionService::new(auth.clone(), Arc::new(MockStore::default())));
    session.bootstrap().await;
    let profile = ProfileService::new(session.clone());

    let update = ProfileUpdate { name: "Dana Q".into(), profile_picture: None, theme: Some(Theme::Dark) };
    let updated = profile.update(&update).await.unwrap();

    assert_eq!(updated.name.as_deref(), Some("Dana Q"));
    assert_eq!(session.user().unwrap().theme, Some(Theme::Dark));
    assert_eq!(auth.updates.lock().len(), 1);
}

#[tokio::test]
async fn profile_update_requires_session() {
    let session = Arc::new(SessionService::new(
        Arc::new(FakeAuth::signed_out(None)),
        Arc::new(MockStore::default()),
    ));
    let profile = ProfileService::new(session);
    let update = ProfileUpdate { name: "Dana".into(), ..Default::default() };

    assert!(profile.update(&update).await.is_err());
}

#[test]
fn theme_defaults_to_light() {
    let surface = Arc::new(RecordingSurface::default());
    let theme = ThemeService::new(Arc::new(MockStore::default()), surface.clone());

    assert_eq!(theme.mount(), Theme::Light);
    assert_eq!(surface.applied(), vec![Theme::Light]);
}

#[test]
fn toggled_theme_survives_reload() {
    let store = Arc::new(MockStore::default());
    let first = ThemeService::new(store.clone(), Arc::new(RecordingSurface::default()));
    first.mount();
    assert_eq!(first.toggle().unwrap(), Theme::Dark);
    assert_eq!(store.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));

    let surface = Arc::new(RecordingSurface::default());
    let reloaded = ThemeService::new(store, surface.clone());
    assert_eq!(reloaded.mount(), Theme::Dark);
    assert_eq!(surface.applied(), vec![Theme::Dark]);
}

#[test]
fn unknown_stored_theme_falls_back_to_light() {
    let store = Arc::new(MockStore::with(THEME_STORAGE_KEY, "sepia"));
    let theme = ThemeService::new(store, Arc::new(RecordingSurface::default()));
    assert_eq!(theme.mount(), Theme::Light);
}
