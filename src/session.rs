use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Interviewer,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Interviewer => "interviewer",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let all = [
            Role::Admin,
            Role::Hr,
            Role::Manager,
            Role::Interviewer,
            Role::Employee,
        ];
        all.into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Role set decoded from an unverified token. This is a display-only
/// capability hint: real enforcement happens server-side, so never gate a
/// destructive action on it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimedRoles(HashSet<Role>);

impl ClaimedRoles {
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn intersects(&self, allowed: &[Role]) -> bool {
        allowed.iter().any(|role| self.0.contains(role))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }
}

impl FromIterator<Role> for ClaimedRoles {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default, alias = "role", deserialize_with = "deserialize_roles")]
    pub roles: ClaimedRoles,
}

/// The role claim arrives as a single string or an array, under `role` or
/// `roles`. Unknown role names are skipped rather than failing the decode.
fn deserialize_roles<'de, D>(deserializer: D) -> std::result::Result<ClaimedRoles, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let names = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(name)) => vec![name],
        Some(OneOrMany::Many(names)) => names,
    };

    let mut roles = HashSet::new();
    for name in names {
        match name.parse::<Role>() {
            Ok(role) => {
                roles.insert(role);
            }
            Err(_) => tracing::warn!(role = %name, "Skipping unknown role claim"),
        }
    }
    Ok(ClaimedRoles(roles))
}

/// Decodes the claims of a stored bearer token without verifying its
/// signature or expiry. The result is for display and route gating only.
pub fn decode_claims(token: &str) -> Result<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| Error::Token(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    claims: TokenClaims,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }

    pub fn roles(&self) -> &ClaimedRoles {
        &self.claims.roles
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claims
            .exp
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// A token without an `exp` claim never counts as expired locally.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expiry) => expiry <= now,
            None => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Holds the current sign-in state. Cloning shares the underlying slot, and
/// `subscribe` exposes sign-in/sign-out transitions to any interested view
/// (the in-process analog of cross-tab storage events).
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Decodes and stores a freshly issued token.
    pub fn set(&self, token: impl Into<String>) -> Result<Session> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        let session = Session { token, claims };
        self.state.send_replace(Some(session.clone()));
        Ok(session)
    }

    pub fn get(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    /// Current session, treating an expired token as absent.
    pub fn active(&self) -> Option<Session> {
        self.get().filter(|session| !session.is_expired())
    }

    pub fn clear(&self) {
        self.state.send_replace(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectToSignIn,
    RedirectToForbidden,
}

/// Blocks non-public routes until a live session exists.
pub fn auth_gate(store: &SessionStore) -> GateDecision {
    match store.active() {
        Some(_) => GateDecision::Allow,
        None => GateDecision::RedirectToSignIn,
    }
}

/// Advisory role gate: allows when the claimed role set intersects the
/// allowed set. An empty allowed set only requires a live session.
pub fn require_role(store: &SessionStore, allowed: &[Role]) -> GateDecision {
    let Some(session) = store.active() else {
        return GateDecision::RedirectToSignIn;
    };
    if !allowed.is_empty() && !session.roles().intersects(allowed) {
        return GateDecision::RedirectToForbidden;
    }
    GateDecision::Allow
}
