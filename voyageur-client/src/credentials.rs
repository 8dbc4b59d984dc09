use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::json::UserRole;

/// A bearer token as captured when a request was issued.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub(crate) fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Source of fresh tokens, usually the SDK of the identity provider.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Silently renews the current session.
    async fn refresh(&self) -> anyhow::Result<Credential>;
}

/// Published whenever the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}

/// The client side view of the signed-in user.
///
/// Requests never read a shared token while they are running. Each one
/// captures a [`Credential`] when it is issued.
pub struct Session {
    provider: Box<dyn CredentialProvider>,
    last_known: RwLock<Option<Credential>>,
    role: RwLock<Option<UserRole>>,
    // Set by a forced sign-out, cleared only by `sign_in`.
    signed_out: AtomicBool,
    events: watch::Sender<SessionEvent>,
}

impl Session {
    pub fn new(provider: Box<dyn CredentialProvider>) -> Self {
        let (events, _) = watch::channel(SessionEvent::SignedOut);
        Self {
            provider,
            last_known: RwLock::new(None),
            role: RwLock::new(None),
            signed_out: AtomicBool::new(false),
            events,
        }
    }

    pub fn sign_in(&self, credential: Credential) {
        *self.last_known.write() = Some(credential);
        self.signed_out.store(false, Ordering::SeqCst);
        self.events.send_replace(SessionEvent::SignedIn);
    }

    /// Tries a silent refresh and falls back to the last known session.
    ///
    /// `None` means the request has to go out signed-out. After a forced
    /// sign-out no refresh is attempted until the next [`Session::sign_in`].
    pub async fn credential(&self) -> Option<Credential> {
        if self.signed_out.load(Ordering::SeqCst) {
            return None;
        }
        match self.provider.refresh().await {
            Ok(credential) => {
                *self.last_known.write() = Some(credential.clone());
                Some(credential)
            }
            Err(err) => {
                log::debug!("Token refresh failed: {err}");
                self.last_known.read().clone()
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.last_known.read().is_some()
    }

    /// Clears the session and notifies all subscribers.
    pub fn force_sign_out(&self) {
        log::info!("Session expired, signing out");
        self.signed_out.store(true, Ordering::SeqCst);
        self.last_known.write().take();
        self.role.write().take();
        self.events.send_replace(SessionEvent::SignedOut);
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn cached_role(&self) -> Option<UserRole> {
        *self.role.read()
    }

    pub(crate) fn cache_role(&self, role: UserRole) {
        *self.role.write() = Some(role);
    }

    pub fn is_editor(&self) -> bool {
        self.cached_role() == Some(UserRole::Editor)
    }
}
