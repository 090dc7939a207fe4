use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum accepted password length, matching the hosted auth default.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Credentials as collected by the portal's login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An authenticated client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    pub email: String,
    pub signed_in_at: NaiveDateTime,
}

/// Callback invoked with the new session state on every change.
pub type SessionListener = Arc<dyn Fn(Option<&ClientSession>) + Send + Sync>;

/// Gateway over the hosted credential service. Held and passed explicitly by
/// whatever component needs session state; there is no process-wide
/// singleton.
pub trait SessionGateway: Send + Sync {
    fn sign_up(&self, credentials: Credentials) -> Result<ClientSession, SessionError>;
    fn sign_in(&self, credentials: Credentials) -> Result<ClientSession, SessionError>;
    fn sign_out(&self) -> Result<(), SessionError>;
    fn current_session(&self) -> Result<Option<ClientSession>, SessionError>;
    fn subscribe(&self, listener: SessionListener) -> SessionSubscription;
}

/// Error enumeration for gateway failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for this email")]
    DuplicateAccount,
    #[error("password must be at least {minimum} characters")]
    WeakPassword { minimum: usize },
    #[error("no client is signed in")]
    NotSignedIn,
    #[error("session service unavailable: {0}")]
    Unavailable(String),
}

/// Handle returned by [`SessionGateway::subscribe`]. The listener stays
/// registered until the handle is dropped or `unsubscribe` is called.
pub struct SessionSubscription {
    id: u64,
    listeners: Weak<Mutex<HashMap<u64, SessionListener>>>,
}

impl SessionSubscription {
    pub fn unsubscribe(self) {
        // Removal happens in Drop.
    }

    fn remove(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .expect("session listener mutex poisoned")
                .remove(&self.id);
        }
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[derive(Default)]
struct GatewayState {
    accounts: HashMap<String, String>,
    current: Option<ClientSession>,
}

/// In-memory gateway used by tests and as the server default until the
/// hosted credential service is wired in.
#[derive(Default)]
pub struct InMemorySessionGateway {
    state: Mutex<GatewayState>,
    listeners: Arc<Mutex<HashMap<u64, SessionListener>>>,
    next_listener_id: AtomicU64,
}

impl InMemorySessionGateway {
    fn notify(&self, session: Option<&ClientSession>) {
        let listeners: Vec<SessionListener> = self
            .listeners
            .lock()
            .expect("session listener mutex poisoned")
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(session);
        }
    }

    fn start_session(&self, email: String) -> ClientSession {
        let session = ClientSession {
            email,
            signed_in_at: Utc::now().naive_utc(),
        };
        self.state
            .lock()
            .expect("session state mutex poisoned")
            .current = Some(session.clone());
        session
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl SessionGateway for InMemorySessionGateway {
    fn sign_up(&self, credentials: Credentials) -> Result<ClientSession, SessionError> {
        let email = normalize_email(&credentials.email);
        if email.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }
        if credentials.password.len() < MIN_PASSWORD_LENGTH {
            return Err(SessionError::WeakPassword {
                minimum: MIN_PASSWORD_LENGTH,
            });
        }

        {
            let mut state = self.state.lock().expect("session state mutex poisoned");
            if state.accounts.contains_key(&email) {
                return Err(SessionError::DuplicateAccount);
            }
            state.accounts.insert(email.clone(), credentials.password);
        }

        let session = self.start_session(email);
        self.notify(Some(&session));
        Ok(session)
    }

    fn sign_in(&self, credentials: Credentials) -> Result<ClientSession, SessionError> {
        let email = normalize_email(&credentials.email);
        {
            let state = self.state.lock().expect("session state mutex poisoned");
            match state.accounts.get(&email) {
                Some(password) if *password == credentials.password => {}
                _ => return Err(SessionError::InvalidCredentials),
            }
        }

        let session = self.start_session(email);
        self.notify(Some(&session));
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.lock().expect("session state mutex poisoned");
            if state.current.is_none() {
                return Err(SessionError::NotSignedIn);
            }
            state.current = None;
        }
        self.notify(None);
        Ok(())
    }

    fn current_session(&self) -> Result<Option<ClientSession>, SessionError> {
        Ok(self
            .state
            .lock()
            .expect("session state mutex poisoned")
            .current
            .clone())
    }

    fn subscribe(&self, listener: SessionListener) -> SessionSubscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .expect("session listener mutex poisoned")
            .insert(id, listener);
        SessionSubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "s3cret-enough".to_string(),
        }
    }

    #[test]
    fn sign_up_then_sign_out_round_trip() {
        let gateway = InMemorySessionGateway::default();

        let session = gateway
            .sign_up(credentials("client@example.org"))
            .expect("sign up succeeds");
        assert_eq!(session.email, "client@example.org");
        assert_eq!(
            gateway.current_session().expect("state readable"),
            Some(session)
        );

        gateway.sign_out().expect("sign out succeeds");
        assert_eq!(gateway.current_session().expect("state readable"), None);
    }

    #[test]
    fn duplicate_sign_up_is_rejected() {
        let gateway = InMemorySessionGateway::default();
        gateway
            .sign_up(credentials("client@example.org"))
            .expect("first sign up succeeds");

        let error = gateway
            .sign_up(credentials("Client@Example.org"))
            .expect_err("duplicate rejected");
        assert!(matches!(error, SessionError::DuplicateAccount));
    }

    #[test]
    fn short_passwords_are_rejected() {
        let gateway = InMemorySessionGateway::default();
        let error = gateway
            .sign_up(Credentials {
                email: "client@example.org".to_string(),
                password: "short".to_string(),
            })
            .expect_err("weak password rejected");
        assert!(matches!(
            error,
            SessionError::WeakPassword {
                minimum: MIN_PASSWORD_LENGTH
            }
        ));
    }

    #[test]
    fn wrong_password_is_invalid() {
        let gateway = InMemorySessionGateway::default();
        gateway
            .sign_up(credentials("client@example.org"))
            .expect("sign up succeeds");
        gateway.sign_out().expect("sign out succeeds");

        let error = gateway
            .sign_in(Credentials {
                email: "client@example.org".to_string(),
                password: "wrong-password".to_string(),
            })
            .expect_err("wrong password rejected");
        assert!(matches!(error, SessionError::InvalidCredentials));
    }

    #[test]
    fn sign_out_without_session_errors() {
        let gateway = InMemorySessionGateway::default();
        let error = gateway.sign_out().expect_err("nothing to sign out");
        assert!(matches!(error, SessionError::NotSignedIn));
    }

    #[test]
    fn listeners_observe_changes_until_unsubscribed() {
        let gateway = InMemorySessionGateway::default();
        let observed: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = observed.clone();
        let subscription = gateway.subscribe(Arc::new(move |session| {
            sink.lock()
                .expect("observation mutex poisoned")
                .push(session.map(|session| session.email.clone()));
        }));

        gateway
            .sign_up(credentials("client@example.org"))
            .expect("sign up succeeds");
        gateway.sign_out().expect("sign out succeeds");

        subscription.unsubscribe();
        gateway
            .sign_in(credentials("client@example.org"))
            .expect("sign in succeeds");

        let observed = observed.lock().expect("observation mutex poisoned").clone();
        assert_eq!(
            observed,
            vec![Some("client@example.org".to_string()), None]
        );
    }
}
