//! Core SimwoodClient implementation.
//!
//! The client owns the HTTP transport, the immutable configuration, and the
//! session token store. Batches are built separately (see
//! [`RequestBatch`](crate::RequestBatch)) and submitted through [`run`].
//!
//! [`run`]: SimwoodClient::run

use std::collections::HashMap;

use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    batch::RequestBatch,
    consts::{DEFAULT_API_URL, DEFAULT_TOKEN_THRESHOLD_SECS},
    prelude::*,
    req::HttpClient,
    response::{AuthResults, Envelope, IpResults, Payload, ResponseMap, TimeResults},
    session::{MemorySession, SessionStore},
    signing, Error,
};

/// Response body format requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// XML bodies, stored verbatim as [`Payload::Raw`]. The API default.
    #[default]
    Xml,
    /// JSON bodies, decoded to [`Payload::Json`].
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
        }
    }
}

/// Client configuration. Fixed once the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST endpoint.
    pub api_url: String,
    /// Requested token lifetime, added to the server clock at auth time.
    pub token_threshold_secs: u64,
    /// Account name used to sign AUTH/DEAUTH calls.
    pub user: Option<String>,
    /// Shared secret used to sign AUTH/DEAUTH calls.
    pub password: Option<String>,
    /// Body format for queued requests. Auth-related calls always use JSON.
    pub output_format: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_threshold_secs: DEFAULT_TOKEN_THRESHOLD_SECS,
            user: None,
            password: None,
            output_format: OutputFormat::default(),
        }
    }
}

/// Client for the Simwood REST API.
///
/// All network-touching methods are async but execute strictly
/// sequentially; no request is issued before the previous one completes.
pub struct SimwoodClient {
    config: ClientConfig,
    http_client: HttpClient,
    session: Box<dyn SessionStore>,
}

impl std::fmt::Debug for SimwoodClient {
    // password and token stay out of debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimwoodClient")
            .field("api_url", &self.config.api_url)
            .field("user", &self.config.user)
            .field("output_format", &self.config.output_format)
            .field("has_token", &self.session.token().is_some())
            .finish()
    }
}

impl SimwoodClient {
    /// Build a client with an in-memory session store.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_session(config, Box::new(MemorySession::new()))
    }

    /// Build a client over a caller-provided session store, for
    /// applications that persist the token outside the process.
    pub fn with_session(config: ClientConfig, session: Box<dyn SessionStore>) -> Self {
        let http_client = HttpClient::new(Client::new(), config.api_url.clone());
        Self {
            config,
            http_client,
            session,
        }
    }

    /// The currently cached session token, if any.
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Execute every request in `batch`, in order, and return the decoded
    /// bodies keyed by mode.
    ///
    /// Authenticates first (cached token or a fresh AUTH round-trip); each
    /// request then carries `token` and the configured `output` format in
    /// its form body. Duplicate modes overwrite earlier entries.
    pub async fn run(&mut self, batch: RequestBatch) -> Result<ResponseMap> {
        let token = self.auth_token().await?;

        let mut responses = ResponseMap::new();
        for request in batch.into_requests() {
            let mut params = request.params;
            params.insert("token".to_string(), token.clone());
            params.insert(
                "output".to_string(),
                self.config.output_format.as_str().to_string(),
            );

            let body = self.http_client.post(&request.mode, &params).await?;
            let payload = match self.config.output_format {
                OutputFormat::Json => serde_json::from_str(&body)
                    .map(Payload::Json)
                    .map_err(|e| Error::JsonParse(e.to_string()))?,
                OutputFormat::Xml => Payload::Raw(body),
            };
            responses.insert(request.mode, payload);
        }

        Ok(responses)
    }

    /// Return the session token, authenticating if none is cached.
    ///
    /// Authentication fetches the client IP and the server clock, signs an
    /// expiry `timestamp + token_threshold_secs` with the shared secret,
    /// and issues an AUTH call. The token is cached in the session store on
    /// success.
    pub async fn auth_token(&mut self) -> Result<String> {
        if let Some(token) = self.session.token() {
            return Ok(token);
        }

        let (user, password) = self.credentials()?;
        let client_ip = self.client_ip().await?;
        let timestamp = self.server_timestamp().await?;
        let expiry = timestamp + self.config.token_threshold_secs;
        let key = signing::auth_key(&client_ip, expiry, &password);

        let mut params = HashMap::new();
        params.insert("user".to_string(), user);
        params.insert("expiry".to_string(), expiry.to_string());
        params.insert("key".to_string(), key);
        params.insert("output".to_string(), "json".to_string());

        let body = self.http_client.post("AUTH", &params).await?;
        let envelope: Envelope<AuthResults> =
            serde_json::from_str(&body).map_err(|e| Error::JsonParse(e.to_string()))?;
        if envelope.status != 1 {
            warn!(status = envelope.status, "authentication rejected");
            return Err(Error::AuthRejected);
        }
        let token = envelope
            .results
            .ok_or_else(|| Error::malformed("AUTH", "missing results.token"))?
            .token;

        debug!("authenticated, token cached");
        self.session.set_token(token.clone());
        Ok(token)
    }

    /// Revoke the cached token via DEAUTH, then drop it from the session.
    ///
    /// Best-effort: the token is cleared locally even when the remote call
    /// fails, since the server will expire it on its own. With no cached
    /// token this is a no-op and issues no request.
    pub async fn revoke_auth_token(&mut self) {
        let Some(token) = self.session.token() else {
            return;
        };

        if let Err(e) = self.deauth(&token).await {
            warn!(error = %e, "DEAUTH call failed; clearing token anyway");
        }
        self.session.clear_token();
    }

    async fn deauth(&self, token: &str) -> Result<()> {
        let (user, password) = self.credentials()?;
        let client_ip = self.client_ip().await?;
        let key = signing::deauth_key(&client_ip, token, &password);

        let mut params = HashMap::new();
        params.insert("user".to_string(), user);
        params.insert("token".to_string(), token.to_string());
        params.insert("key".to_string(), key);
        params.insert("output".to_string(), "json".to_string());

        self.http_client.post("DEAUTH", &params).await?;
        Ok(())
    }

    /// Fetch the caller's public IP as seen by the API (MYIP mode).
    pub async fn client_ip(&self) -> Result<String> {
        let body = self.http_client.post("MYIP", &json_only()).await?;
        let results: IpResults = Envelope::decode_success("MYIP", &body)?;
        Ok(results.ip)
    }

    /// Fetch the server's current Unix timestamp (TIME mode).
    pub async fn server_timestamp(&self) -> Result<u64> {
        let body = self.http_client.post("TIME", &json_only()).await?;
        let results: TimeResults = Envelope::decode_success("TIME", &body)?;
        Ok(results.timestamp)
    }

    fn credentials(&self) -> Result<(String, String)> {
        match (&self.config.user, &self.config.password) {
            (Some(user), Some(password)) => Ok((user.clone(), password.clone())),
            _ => Err(Error::MissingCredentials),
        }
    }
}

fn json_only() -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("output".to_string(), "json".to_string());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token_threshold_secs, 86_400);
        assert!(config.user.is_none());
        assert!(config.password.is_none());
        assert_eq!(config.output_format, OutputFormat::Xml);
    }

    #[test]
    fn output_format_wire_values() {
        assert_eq!(OutputFormat::Xml.as_str(), "xml");
        assert_eq!(OutputFormat::Json.as_str(), "json");
    }

    #[tokio::test]
    async fn auth_token_requires_credentials() {
        let mut client = SimwoodClient::new(ClientConfig::default());
        let err = client.auth_token().await.unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let client = SimwoodClient::new(ClientConfig {
            password: Some("hunter2".to_string()),
            ..ClientConfig::default()
        });
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("hunter2"));
    }
}
