//! Runtime credential state for the OpenAI backend.
//!
//! One authoritative, hot-swappable session shared by every request. Readers
//! clone the session handle out of the store, so a concurrent replace never
//! disturbs calls already in flight; replace validates the new key against
//! the backend before anything is overwritten.

use crate::config::Config;
use crate::openai::{BackendError, OpenAiClient};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// An opaque OpenAI API key. The full value never appears in logs or debug
/// output; only `preview()` may be surfaced.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Redacted form for logging: first 7 and last 4 characters. Counted in
    /// chars, not bytes, so arbitrary user-supplied keys never split a
    /// multibyte character.
    pub fn preview(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 11 {
            let head: String = chars[..7].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        } else {
            "****".to_string()
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&self.preview()).finish()
    }
}

struct SessionState {
    credential: Credential,
    client: Arc<OpenAiClient>,
}

/// Process-wide holder of the current credential and the backend session
/// built from it. The credential and session are always swapped as a pair
/// under one write lock.
#[derive(Clone)]
pub struct CredentialStore {
    model: String,
    base_url: String,
    timeout: Duration,
    state: Arc<RwLock<Option<SessionState>>>,
}

impl CredentialStore {
    /// Build a store. The initial key comes from the environment and is
    /// constructed without a backend validation round-trip; only runtime
    /// replacement validates before committing.
    pub fn new(
        model: &str,
        base_url: &str,
        timeout: Duration,
        initial: Option<Credential>,
    ) -> Self {
        let state = initial.map(|credential| SessionState {
            client: Arc::new(OpenAiClient::new(
                credential.expose(),
                model,
                base_url,
                timeout,
            )),
            credential,
        });

        Self {
            model: model.to_string(),
            base_url: base_url.to_string(),
            timeout,
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.model,
            &config.base_url,
            config.request_timeout,
            config.api_key.clone(),
        )
    }

    pub async fn current(&self) -> Option<Credential> {
        self.state.read().await.as_ref().map(|s| s.credential.clone())
    }

    pub async fn has_live_session(&self) -> bool {
        self.state.read().await.is_some()
    }

    /// Current session handle, cloned out so a replace cannot invalidate a
    /// call already in flight.
    pub async fn session(&self) -> Option<Arc<OpenAiClient>> {
        self.state.read().await.as_ref().map(|s| s.client.clone())
    }

    /// Swap in a new credential. The key is checked against the backend's
    /// model list first; on failure the store is left completely unchanged
    /// and the backend error is returned. Returns the visible model count.
    pub async fn replace(&self, credential: Credential) -> Result<usize, BackendError> {
        let client = Arc::new(OpenAiClient::new(
            credential.expose(),
            &self.model,
            &self.base_url,
            self.timeout,
        ));

        let model_count = client.validate().await?;

        let mut state = self.state.write().await;
        info!(
            "[K]  credential updated: {} ({} models visible)",
            credential.preview(),
            model_count
        );
        *state = Some(SessionState { credential, client });

        Ok(model_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(initial: Option<Credential>) -> CredentialStore {
        CredentialStore::new(
            "gpt-5-mini",
            "https://api.openai.com/v1",
            Duration::from_secs(5),
            initial,
        )
    }

    #[test]
    fn test_preview_redacts_middle() {
        let key = Credential::new("sk-proj-abcdefghijklmnop1234");
        assert_eq!(key.preview(), "sk-proj...1234");
    }

    #[test]
    fn test_preview_masks_short_keys() {
        assert_eq!(Credential::new("short").preview(), "****");
        assert_eq!(Credential::new("exactly11ch").preview(), "****");
    }

    #[test]
    fn test_preview_handles_multibyte_keys() {
        // 16 chars, 32 bytes; byte-offset slicing would split a char here.
        let key = Credential::new("ключключключключ");
        assert_eq!(key.preview(), "ключклю...ключ");

        let short = Credential::new("ключ-1234567");
        assert_eq!(short.preview(), "ключ-12...4567");
    }

    #[test]
    fn test_debug_never_shows_full_key() {
        let key = Credential::new("sk-proj-abcdefghijklmnop1234");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("abcdefghijklmnop"));
        assert!(debug.contains("sk-proj...1234"));
    }

    #[tokio::test]
    async fn test_empty_store_has_no_session() {
        let store = test_store(None);
        assert!(!store.has_live_session().await);
        assert!(store.session().await.is_none());
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_initial_credential_creates_session_without_validation() {
        let store = test_store(Some(Credential::new("sk-proj-abcdefghijklmnop1234")));
        assert!(store.has_live_session().await);
        assert_eq!(
            store.current().await.unwrap().preview(),
            "sk-proj...1234"
        );
    }

    /// Minimal HTTP stub answering every request with a one-model list, so
    /// the accepted-credential path can run without the real backend.
    async fn spawn_models_stub() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 2048];
                    let _ = socket.read(&mut buf).await;
                    let body = r#"{"object":"list","data":[{"id":"gpt-5-mini"}]}"#;
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    fn unroutable_store(initial: Option<Credential>) -> CredentialStore {
        // Nothing listens on port 1; replace must fail before committing.
        CredentialStore::new(
            "gpt-5-mini",
            "http://127.0.0.1:1",
            Duration::from_secs(1),
            initial,
        )
    }

    #[tokio::test]
    async fn test_rejected_replace_leaves_empty_store_unchanged() {
        let store = unroutable_store(None);

        let result = store.replace(Credential::new("sk-proj-abcdefghijklmnop1234")).await;
        assert!(result.is_err());
        assert!(!store.has_live_session().await);
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_rejected_replace_keeps_prior_credential() {
        let store = unroutable_store(Some(Credential::new("sk-proj-abcdefghijklmnop1234")));

        let result = store.replace(Credential::new("sk-proj-zzzzzzzzzzzzzzzz9999")).await;
        assert!(result.is_err());
        assert!(store.has_live_session().await);
        assert_eq!(
            store.current().await.unwrap().preview(),
            "sk-proj...1234"
        );
    }

    #[tokio::test]
    async fn test_accepted_replace_commits_session() {
        let base_url = spawn_models_stub().await;
        let store =
            CredentialStore::new("gpt-5-mini", &base_url, Duration::from_secs(5), None);

        let count = store
            .replace(Credential::new("sk-proj-abcdefghijklmnop1234"))
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert!(store.has_live_session().await);
    }

    #[tokio::test]
    async fn test_replace_is_idempotent_for_same_credential() {
        let base_url = spawn_models_stub().await;
        let store =
            CredentialStore::new("gpt-5-mini", &base_url, Duration::from_secs(5), None);
        let key = "sk-proj-abcdefghijklmnop1234";

        store.replace(Credential::new(key)).await.unwrap();
        let preview_once = store.current().await.unwrap().preview();

        store.replace(Credential::new(key)).await.unwrap();
        assert!(store.has_live_session().await);
        assert_eq!(store.current().await.unwrap().preview(), preview_once);
    }
}
