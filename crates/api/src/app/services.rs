use quotehub_auth::Hs256Tokens;
use quotehub_store::{MemoryStore, Store};

/// Shared application state handed to every handler via `Extension`.
pub struct AppServices {
    store: MemoryStore,
    tokens: Hs256Tokens,
}

impl AppServices {
    pub fn new(jwt_secret: &[u8], token_ttl: chrono::Duration) -> Self {
        Self {
            store: MemoryStore::new(),
            tokens: Hs256Tokens::new(jwt_secret, token_ttl),
        }
    }

    pub fn store(&self) -> &dyn Store {
        &self.store
    }

    pub fn tokens(&self) -> &Hs256Tokens {
        &self.tokens
    }
}
