use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outstanding password-reset token. Minted by `request_password_reset`,
/// removed on successful reset. Wall-clock TTL, no single-use flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl PasswordResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_is_inclusive_at_the_boundary() {
        let now = Utc::now();
        let token = PasswordResetToken {
            email: "a@b.com".into(),
            token: "t".into(),
            expires_at: now,
        };
        assert!(token.is_expired(now));
        assert!(!token.is_expired(now - Duration::seconds(1)));
        assert!(token.is_expired(now + Duration::seconds(1)));
    }
}
