//! Bearer token storage shared by concurrent requests.

use parking_lot::RwLock;

use crate::config::Credentials;

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

/// Access/refresh token pair behind a lock, so a refresh performed by one
/// request is seen by every other request of the same client.
#[derive(Debug, Default)]
pub struct TokenStore {
    inner: RwLock<Tokens>,
}

impl TokenStore {
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            inner: RwLock::new(Tokens {
                access: credentials.access_token.clone(),
                refresh: credentials.refresh_token.clone(),
            }),
        }
    }

    #[must_use]
    pub fn access(&self) -> Option<String> {
        self.inner.read().access.clone()
    }

    #[must_use]
    pub fn refresh(&self) -> Option<String> {
        self.inner.read().refresh.clone()
    }

    /// Store a new access token, and a rotated refresh token when one is issued.
    pub fn update(&self, access: String, refresh: Option<String>) {
        let mut tokens = self.inner.write();
        tokens.access = Some(access);
        if refresh.is_some() {
            tokens.refresh = refresh;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_keeps_refresh_token_unless_rotated() {
        let store = TokenStore::new(&Credentials {
            access_token: Some("a1".into()),
            refresh_token: Some("r1".into()),
        });

        store.update("a2".into(), None);
        assert_eq!(store.access().as_deref(), Some("a2"));
        assert_eq!(store.refresh().as_deref(), Some("r1"));

        store.update("a3".into(), Some("r2".into()));
        assert_eq!(store.refresh().as_deref(), Some("r2"));
    }
}
