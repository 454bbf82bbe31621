use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::prelude::*;

/// Creates the blocking client shared by the providers. Requests are never timed out.
pub fn client() -> Result<Client> {
    let client = Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(Error::Client)?;

    log::debug!("Created reqwest client");

    Ok(client)
}

/// Posts `body` as JSON and returns the raw response body.
///
/// # Errors
///
/// Fails if the request can't be sent, the body can't be read, or the status is not a 1xx or 2xx.
pub fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    provider: &'static str,
    url: &str,
    headers: HeaderMap,
    body: &T,
) -> Result<String> {
    log::debug!("POST: {}", url);

    let response = client
        .post(url)
        .headers(headers)
        .json(body)
        .send()
        .map_err(|source| Error::Transport { provider, source })?;

    let status = response.status().as_u16();
    let body = response.text().map_err(Error::ReadBody)?;
    log::debug!("status: {}", status);
    log::debug!("response body: {}", body);

    check_status(provider, status, body)
}

fn check_status(provider: &'static str, status: u16, body: String) -> Result<String> {
    if status >= 300 {
        return Err(Error::Status {
            provider,
            status,
            body: body.trim().to_string(),
        });
    }

    Ok(body)
}
