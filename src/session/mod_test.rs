use super::*;

fn session() -> (MemoryStore, Session<MemoryStore>) {
    let store = MemoryStore::new();
    (store.clone(), Session::new(store, StorageKeys::default()))
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_then_authenticated() {
    let (_, session) = session();
    assert!(!session.is_authenticated());
    session.login(Identity::with_email("ann@example.com")).unwrap();
    assert!(session.is_authenticated());
    assert_eq!(
        session.current_identity().and_then(|i| i.email),
        Some("ann@example.com".to_owned())
    );
}

#[test]
fn login_at_marker_encodes_email_and_time() {
    let (store, session) = session();
    let marker = session
        .login_at(Identity::with_email("ann@example.com"), 1_700_000_000_123)
        .unwrap();
    assert_eq!(
        marker.decode(),
        Some(("ann@example.com".to_owned(), 1_700_000_000_123))
    );
    assert_eq!(store.get_item("pw_token").unwrap().as_deref(), Some(marker.as_str()));
}

#[test]
fn logout_clears_both_keys() {
    let (store, session) = session();
    session.login(Identity::with_email("a@b.com")).unwrap();
    session.logout();
    assert!(store.is_empty());
    assert!(!session.is_authenticated());
    assert!(session.current_identity().is_none());
}

#[test]
fn logout_when_logged_out_is_harmless() {
    let (_, session) = session();
    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn login_preserves_profile_fields() {
    let (_, session) = session();
    session
        .login(Identity::with_email("a@b.com").field("role", "doctor"))
        .unwrap();
    let identity = session.current_identity().unwrap();
    assert_eq!(identity.profile.get("role").and_then(|v| v.as_str()), Some("doctor"));
}

// =============================================================
// Defensive reads
// =============================================================

#[test]
fn unparsable_identity_is_absent_and_unauthenticated() {
    let (store, session) = session();
    session.login(Identity::with_email("a@b.com")).unwrap();
    store.set_item("pw_user", "}}garbage{{").unwrap();
    assert!(session.current_identity().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn lone_marker_is_not_authenticated() {
    let (store, session) = session();
    store.set_item("pw_token", "deadbeef").unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn lone_identity_is_not_authenticated() {
    let (store, session) = session();
    store.set_item("pw_user", r#"{"email":"a@b.com"}"#).unwrap();
    assert!(session.current_identity().is_some());
    assert!(!session.is_authenticated());
}

// =============================================================
// Fresh reads across pages and tabs
// =============================================================

#[test]
fn every_query_reflects_latest_write() {
    let (store, session) = session();
    session.login(Identity::with_email("first@x.io")).unwrap();
    store.set_item("pw_user", r#"{"email":"second@x.io"}"#).unwrap();
    assert_eq!(
        session.current_identity().and_then(|i| i.email),
        Some("second@x.io".to_owned())
    );
}

#[test]
fn other_tab_keeps_stale_snapshot_until_next_read() {
    let shared = MemoryStore::new();
    let tab_a = Session::new(shared.clone(), StorageKeys::default());
    let tab_b = Session::new(shared, StorageKeys::default());

    tab_a.login(Identity::with_email("a@b.com")).unwrap();
    let tab_b_snapshot = tab_b.state();
    assert!(tab_b_snapshot.is_authenticated());

    tab_a.logout();

    // Nothing pushes the change to tab B's held snapshot.
    assert!(tab_b_snapshot.is_authenticated());
    // Its next read sees the shared store.
    assert!(!tab_b.state().is_authenticated());
}

#[test]
fn last_login_wins_across_tabs() {
    let shared = MemoryStore::new();
    let tab_a = Session::new(shared.clone(), StorageKeys::default());
    let tab_b = Session::new(shared, StorageKeys::default());

    tab_a.login_at(Identity::with_email("a@x.io"), 1).unwrap();
    tab_b.login_at(Identity::with_email("b@x.io"), 2).unwrap();

    assert_eq!(tab_a.state().account_label("Account"), "b@x.io");
}
