//! Auth façade over the mock store.
//!
//! Sign-in/sign-up/sign-out plus the password-reset flow. Passwords are
//! compared as plain strings — this is a mock backend by design, not a
//! credential store. The authenticated user is mirrored into the
//! injected `SessionStore` on sign-in and sign-up and cleared on
//! sign-out, so a restarted process can restore the session without
//! re-authenticating.

use std::sync::LazyLock;

use chrono::{Duration, Utc};
use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewUser, PasswordResetToken, UserPatch, UserRole};
use crate::session::{SessionStore, SessionUser};
use crate::store::MockStore;

/// Minimum accepted password length on sign-up and reset.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reset tokens expire one hour after minting.
pub const RESET_TOKEN_TTL_SECS: i64 = 3600;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Auth failures, surfaced inline at the form that triggered them.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {0}")]
    EmailTaken(String),

    #[error("That does not look like an email address: {0}")]
    InvalidEmail(String),

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("No account found for {0}")]
    UnknownEmail(String),

    #[error("Reset link is invalid or has expired")]
    InvalidResetToken,
}

// ═══════════════════════════════════════════════════════════
// Sign-up payload
// ═══════════════════════════════════════════════════════════

/// Registration form fields. Self-service sign-up always creates a
/// patient; staff accounts come from the admin console.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

// ═══════════════════════════════════════════════════════════
// AuthService
// ═══════════════════════════════════════════════════════════

/// Holds the current authenticated identity and keeps the injected
/// session mirror in sync with it.
pub struct AuthService {
    session: Box<dyn SessionStore>,
    current: Option<SessionUser>,
}

impl AuthService {
    pub fn new(session: Box<dyn SessionStore>) -> Self {
        Self {
            session,
            current: None,
        }
    }

    /// Restore a persisted session, as on page reload. Returns the
    /// restored user, if one was remembered.
    pub fn restore(&mut self) -> Option<&SessionUser> {
        self.current = self.session.load();
        if let Some(user) = &self.current {
            tracing::info!(user_id = %user.id, "session restored");
        }
        self.current.as_ref()
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    // ── Sign-in / sign-up / sign-out ─────────────────────

    pub fn sign_in(
        &mut self,
        store: &MockStore,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError> {
        let user = store
            .get_user_by_email(email)
            .filter(|u| u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session_user = SessionUser::from(user);
        self.session.save(&session_user);
        self.current = Some(session_user.clone());
        tracing::info!(user_id = %session_user.id, "signed in");
        Ok(session_user)
    }

    pub fn sign_up(
        &mut self,
        store: &mut MockStore,
        form: SignUp,
    ) -> Result<SessionUser, AuthError> {
        if !EMAIL_RE.is_match(&form.email) {
            return Err(AuthError::InvalidEmail(form.email));
        }
        if form.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let user = store
            .create_user(NewUser {
                email: form.email.clone(),
                password: form.password,
                full_name: form.full_name,
                phone: form.phone,
                role: UserRole::Patient,
            })
            .map_err(|_| AuthError::EmailTaken(form.email))?;

        let session_user = SessionUser::from(&user);
        self.session.save(&session_user);
        self.current = Some(session_user.clone());
        tracing::info!(user_id = %session_user.id, "signed up");
        Ok(session_user)
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.session.clear();
    }

    // ── Password reset ───────────────────────────────────

    /// Mint a reset token for a known email. The caller is responsible
    /// for delivering it; the core only records it.
    pub fn request_password_reset(
        &mut self,
        store: &mut MockStore,
        email: &str,
    ) -> Result<PasswordResetToken, AuthError> {
        if store.get_user_by_email(email).is_none() {
            return Err(AuthError::UnknownEmail(email.to_string()));
        }
        let token = PasswordResetToken {
            email: email.to_string(),
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::seconds(RESET_TOKEN_TTL_SECS),
        };
        store.put_reset_token(token.clone());
        tracing::info!(%email, "password reset requested");
        Ok(token)
    }

    /// Consume a reset token and set the new password. The token is
    /// removed on success, so a second attempt with it fails.
    pub fn reset_password(
        &mut self,
        store: &mut MockStore,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        let valid = store
            .find_reset_token(email, token)
            .is_some_and(|t| !t.is_expired(Utc::now()));
        if !valid {
            return Err(AuthError::InvalidResetToken);
        }

        let user_id = store
            .get_user_by_email(email)
            .map(|u| u.id.clone())
            .ok_or_else(|| AuthError::UnknownEmail(email.to_string()))?;

        let patch = UserPatch {
            password: Some(new_password.to_string()),
            ..UserPatch::default()
        };
        store.update_user(&user_id, &patch);
        store.remove_reset_token(email, token);
        tracing::info!(%email, "password reset completed");
        Ok(())
    }
}
