use sha2::{Digest, Sha256};

/// Credentials and salt for the single admin account, read once at startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    pub secret: String,
}

/// Checks admin credentials and the standing session token.
///
/// The token is a pure function of the configuration: the same value is
/// issued on every login and stays valid until the configuration changes.
#[derive(Debug, Clone)]
pub struct AuthGate {
    config: AuthConfig,
    token: String,
}

impl AuthGate {
    pub fn new(config: AuthConfig) -> Self {
        let token = standing_token(&config);
        Self { config, token }
    }

    /// True only on an exact match of both values.
    pub fn verify_credentials(&self, email: &str, password: &str) -> bool {
        constant_time_eq(email.as_bytes(), self.config.email.as_bytes())
            & constant_time_eq(password.as_bytes(), self.config.password.as_bytes())
    }

    pub fn issue_token(&self) -> &str {
        &self.token
    }

    pub fn is_valid(&self, token: Option<&str>) -> bool {
        match token {
            Some(token) if !token.is_empty() => {
                constant_time_eq(token.as_bytes(), self.token.as_bytes())
            }
            _ => false,
        }
    }
}

/// `sha256("{email}:{password}:{secret}")`, hex encoded.
fn standing_token(config: &AuthConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}:{}", config.email, config.password, config.secret));
    hex::encode(hasher.finalize())
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AuthGate {
        AuthGate::new(AuthConfig {
            email: "admin@clevio.id".into(),
            password: "clevio123".into(),
            secret: "clevio-secret".into(),
        })
    }

    #[test]
    fn accepts_exact_credentials_only() {
        let gate = gate();
        assert!(gate.verify_credentials("admin@clevio.id", "clevio123"));
        assert!(!gate.verify_credentials("admin@clevio.id", "wrong"));
        assert!(!gate.verify_credentials("Admin@clevio.id", "clevio123"));
        assert!(!gate.verify_credentials("", ""));
    }

    #[test]
    fn token_is_stable() {
        let gate = gate();
        assert_eq!(gate.issue_token(), gate.issue_token());
        assert_eq!(gate.issue_token(), self::gate().issue_token());
        assert_eq!(gate.issue_token().len(), 64);
    }

    #[test]
    fn token_is_sha256_of_configuration() {
        let mut hasher = Sha256::new();
        hasher.update(b"admin@clevio.id:clevio123:clevio-secret");
        assert_eq!(gate().issue_token(), hex::encode(hasher.finalize()));
    }

    #[test]
    fn token_changes_with_salt() {
        let other = AuthGate::new(AuthConfig {
            email: "admin@clevio.id".into(),
            password: "clevio123".into(),
            secret: "rotated".into(),
        });
        assert_ne!(gate().issue_token(), other.issue_token());
    }

    #[test]
    fn validates_only_the_exact_token() {
        let gate = gate();
        let token = gate.issue_token().to_string();
        assert!(gate.is_valid(Some(&token)));
        assert!(!gate.is_valid(None));
        assert!(!gate.is_valid(Some("")));

        let mut tampered = token.clone().into_bytes();
        tampered[0] = if tampered[0] == b'a' { b'b' } else { b'a' };
        assert!(!gate.is_valid(Some(std::str::from_utf8(&tampered).unwrap())));
        assert!(!gate.is_valid(Some(&token[..63])));
    }
}
