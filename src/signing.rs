//! Shared-secret request signing.
//!
//! The API authorizes AUTH and DEAUTH calls with a SHA-1 digest over a
//! concatenation of caller-visible values and the account password. Keys
//! are lowercase hex; hex never contains HTML-significant characters, so no
//! further escaping is needed on the wire.

use sha1::{Digest, Sha1};

/// Signing key for an AUTH request: `sha1(client_ip + expiry + password)`.
pub(crate) fn auth_key(client_ip: &str, expiry: u64, password: &str) -> String {
    sha1_hex(&format!("{client_ip}{expiry}{password}"))
}

/// Signing key for a DEAUTH request: `sha1(client_ip + token + password)`.
pub(crate) fn deauth_key(client_ip: &str, token: &str, password: &str) -> String {
    sha1_hex(&format!("{client_ip}{token}{password}"))
}

fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_key_is_deterministic() {
        let a = auth_key("1.2.3.4", 1_086_400, "p");
        let b = auth_key("1.2.3.4", 1_086_400, "p");
        assert_eq!(a, b);
    }

    #[test]
    fn auth_key_is_lowercase_hex() {
        let key = auth_key("1.2.3.4", 1_086_400, "p");
        assert_eq!(key.len(), 40);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn auth_key_varies_with_each_input() {
        let base = auth_key("1.2.3.4", 1000, "p");
        assert_ne!(base, auth_key("1.2.3.5", 1000, "p"));
        assert_ne!(base, auth_key("1.2.3.4", 1001, "p"));
        assert_ne!(base, auth_key("1.2.3.4", 1000, "q"));
    }

    #[test]
    fn deauth_key_binds_token() {
        let a = deauth_key("1.2.3.4", "tok1", "p");
        let b = deauth_key("1.2.3.4", "tok2", "p");
        assert_ne!(a, b);
    }
}
