use crate::prelude::*;

/// A hosted LLM API that can answer a single question.
pub trait Provider: Sized {
    /// Human readable name used in error messages.
    const NAME: &'static str;
    /// Name of the binary that talks to this provider.
    const BIN_NAME: &'static str;
    /// Environment variable holding the API key.
    const API_KEY_ENV: &'static str;

    type Request: std::fmt::Debug;

    fn new(api_key: String) -> Result<Self>;

    /// Packages the fixed system prompt for `mode` with the user's question.
    fn build_request(&self, mode: Mode, question: &str) -> Self::Request;

    /// Sends the request and returns the text of the first choice.
    fn send(&self, request: &Self::Request) -> Result<String>;
}
