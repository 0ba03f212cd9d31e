use std::collections::HashMap;

use reqwest::{Client, Response};
use tracing::debug;

use crate::{prelude::*, Error};

#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

async fn parse_response(response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    if status_code < 400 {
        return Ok(text);
    }
    Err(Error::Http {
        status: status_code,
        body: text,
    })
}

impl HttpClient {
    pub(crate) fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// POST to `<base_url>?mode=<mode>` with `params` as a form-encoded
    /// body. The body is omitted entirely when `params` is empty.
    pub(crate) async fn post(
        &self,
        mode: &str,
        params: &HashMap<String, String>,
    ) -> Result<String> {
        let full_url = format!("{}?mode={mode}", self.base_url);
        debug!(mode, url = %full_url, params = params.len(), "dispatching request");

        let mut builder = self.client.post(&full_url);
        if !params.is_empty() {
            builder = builder.form(params);
        }

        let result = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        parse_response(result).await
    }
}
