use hr_dashboard_client::session::{
    auth_gate, decode_claims, require_role, GateDecision, Role, SessionStore,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

#[derive(Serialize)]
struct RolesClaims {
    sub: String,
    exp: i64,
    roles: Vec<String>,
}

#[derive(Serialize)]
struct SingleRoleClaims {
    sub: String,
    exp: i64,
    role: String,
}

fn mint(claims: &impl Serialize) -> String {
    // Any secret works: the client never verifies signatures.
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"backend-only-secret"),
    )
    .unwrap()
}

fn future_exp() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

#[test]
fn decodes_claims_without_knowing_the_signing_key() {
    let token = mint(&RolesClaims {
        sub: "u-17".to_string(),
        exp: future_exp(),
        roles: vec!["ADMIN".to_string(), "hr".to_string()],
    });

    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("u-17"));
    assert!(claims.roles.contains(Role::Admin));
    assert!(claims.roles.contains(Role::Hr));
}

#[test]
fn accepts_a_single_role_claim() {
    let token = mint(&SingleRoleClaims {
        sub: "u-1".to_string(),
        exp: future_exp(),
        role: "manager".to_string(),
    });

    let claims = decode_claims(&token).unwrap();
    assert!(claims.roles.contains(Role::Manager));
}

#[test]
fn unknown_role_names_are_skipped() {
    let token = mint(&RolesClaims {
        sub: "u-2".to_string(),
        exp: future_exp(),
        roles: vec!["admin".to_string(), "wizard".to_string()],
    });

    let claims = decode_claims(&token).unwrap();
    assert!(claims.roles.contains(Role::Admin));
    assert_eq!(claims.roles.iter().count(), 1);
}

#[test]
fn garbage_tokens_fail_to_decode() {
    assert!(decode_claims("not-a-jwt").is_err());
    let store = SessionStore::new();
    assert!(store.set("not-a-jwt").is_err());
    assert!(store.get().is_none());
}

#[test]
fn missing_session_redirects_to_sign_in() {
    let store = SessionStore::new();
    assert_eq!(auth_gate(&store), GateDecision::RedirectToSignIn);
    assert_eq!(
        require_role(&store, &[Role::Admin]),
        GateDecision::RedirectToSignIn
    );
}

#[test]
fn expired_session_counts_as_absent() {
    let store = SessionStore::new();
    store
        .set(mint(&RolesClaims {
            sub: "u-3".to_string(),
            exp: chrono::Utc::now().timestamp() - 60,
            roles: vec!["admin".to_string()],
        }))
        .unwrap();

    // The raw token is still readable, but gates treat it as signed out.
    assert!(store.get().is_some());
    assert!(store.active().is_none());
    assert_eq!(auth_gate(&store), GateDecision::RedirectToSignIn);
}

#[test]
fn role_gate_decisions() {
    let store = SessionStore::new();
    store
        .set(mint(&RolesClaims {
            sub: "u-4".to_string(),
            exp: future_exp(),
            roles: vec!["hr".to_string()],
        }))
        .unwrap();

    assert_eq!(auth_gate(&store), GateDecision::Allow);
    assert_eq!(
        require_role(&store, &[Role::Admin, Role::Hr]),
        GateDecision::Allow
    );
    assert_eq!(
        require_role(&store, &[Role::Admin]),
        GateDecision::RedirectToForbidden
    );
    // An empty allowed set only requires a live session.
    assert_eq!(require_role(&store, &[]), GateDecision::Allow);
}

#[tokio::test]
async fn subscribers_observe_sign_out() {
    let store = SessionStore::new();
    let mut rx = store.subscribe();

    store
        .set(mint(&RolesClaims {
            sub: "u-5".to_string(),
            exp: future_exp(),
            roles: vec!["employee".to_string()],
        }))
        .unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_some());

    store.clear();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_none());
}
