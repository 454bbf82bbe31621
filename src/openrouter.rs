use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{http, prompt};

const OPEN_ROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "x-ai/grok-4-fast";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reasoning {
    pub exclude: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Reasoning>,
}

#[derive(Deserialize, Debug)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ChatError {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
    error: Option<ChatError>,
}

fn create_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {api_key}"))?,
    );

    Ok(headers)
}

/// Unwraps the first choice of a chat completion body.
pub fn parse_response(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(Error::Provider {
            provider: Client::NAME,
            message: error.message,
        });
    }

    match response.choices.into_iter().flatten().next() {
        Some(choice) => Ok(choice.message.content.unwrap_or_default()),
        None => Err(Error::NoChoices),
    }
}

/// OpenRouter chat completions client.
#[derive(Debug)]
pub struct Client {
    reqwest: ReqwestClient,
    headers: HeaderMap,
    url: String,
}

impl Provider for Client {
    const NAME: &'static str = "OpenRouter";
    const BIN_NAME: &'static str = "ask";
    const API_KEY_ENV: &'static str = "OPENROUTER_API_KEY";

    type Request = ChatRequest;

    fn new(api_key: String) -> Result<Self> {
        Ok(Self {
            reqwest: http::client()?,
            headers: create_headers(&api_key)?,
            url: OPEN_ROUTER_URL.to_string(),
        })
    }

    fn build_request(&self, mode: Mode, question: &str) -> ChatRequest {
        ChatRequest {
            model: MODEL.to_string(),
            messages: prompt::messages(mode, question),
            reasoning: Some(Reasoning { exclude: true }),
        }
    }

    fn send(&self, request: &ChatRequest) -> Result<String> {
        log::debug!("body: {:#?}", request);

        let body = http::post_json(
            &self.reqwest,
            Self::NAME,
            &self.url,
            self.headers.clone(),
            request,
        )?;

        parse_response(&body)
    }
}
