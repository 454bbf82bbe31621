use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::http;
use crate::prelude::*;

const DEFAULT_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const GENERATE_CONTENT_TEMPLATE: &str = "/models/{{model}}:generateContent";

/// One text chunk of a [`Content`] message.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Inline text.
    #[serde(default)]
    pub text: String,

    /// Whether the part is the model's reasoning rather than its answer.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A message made of text parts, with the role that produced it.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Ordered text parts of the message.
    #[serde(default)]
    pub parts: Vec<Part>,

    /// The producer of the content. Omitted for system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The name of the Model to use for generating the completion.
    #[serde(skip_serializing)]
    pub model: String,

    /// Developer set system instruction.
    pub system_instruction: Content,

    /// The content of the current conversation with the model.
    pub contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Candidate {
    /// Text of every non-thought part, concatenated.
    fn text(self) -> String {
        self.content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiError>,
}

/// Unwraps the first candidate of a `generateContent` body.
pub fn parse_response(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(Error::Provider {
            provider: Client::NAME,
            message: error.message,
        });
    }

    if let Some(candidate) = response.candidates.into_iter().flatten().next() {
        return Ok(candidate.text());
    }

    match response.prompt_feedback.and_then(|f| f.block_reason) {
        Some(reason) => Err(Error::Blocked(reason)),
        None => Err(Error::NoChoices),
    }
}

fn create_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("x-goog-api-key", HeaderValue::from_str(api_key)?);

    Ok(headers)
}

/// Gemini `generateContent` client.
#[derive(Debug)]
pub struct Client {
    reqwest: ReqwestClient,
    headers: HeaderMap,
    api_url: String,
}

impl Client {
    fn url(&self, model: &str) -> String {
        self.api_url.clone() + &GENERATE_CONTENT_TEMPLATE.replace("{{model}}", model)
    }
}

impl Provider for Client {
    const NAME: &'static str = "Gemini";
    const BIN_NAME: &'static str = "ask-gemini";
    const API_KEY_ENV: &'static str = "GOOGLE_API_KEY";

    type Request = GenerateContentRequest;

    fn new(api_key: String) -> Result<Self> {
        Ok(Self {
            reqwest: http::client()?,
            headers: create_headers(&api_key)?,
            api_url: DEFAULT_URL.to_string(),
        })
    }

    fn build_request(&self, mode: Mode, question: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            model: DEFAULT_MODEL.to_string(),
            system_instruction: Content {
                parts: vec![Part::text(mode.system_prompt())],
                role: None,
            },
            contents: vec![Content {
                parts: vec![Part::text(question)],
                role: Some("user".to_string()),
            }],
        }
    }

    fn send(&self, request: &GenerateContentRequest) -> Result<String> {
        log::debug!("body: {:#?}", request);

        let body = http::post_json(
            &self.reqwest,
            Self::NAME,
            &self.url(&request.model),
            self.headers.clone(),
            request,
        )?;

        parse_response(&body)
    }
}
