#[derive(thiserror::Error)]
pub enum Error {
    #[error("The environment variable {var} is not set, and there was an unexpected error loading {path}: {source}")]
    Dotenv {
        var: String,
        path: String,
        source: dotenvy::Error,
    },
    #[error("{0} environment variable not set")]
    MissingApiKey(String),
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Failed to create http client: {0}")]
    Client(reqwest::Error),
    #[error("Failed to call {provider}: {source}")]
    Transport {
        provider: &'static str,
        source: reqwest::Error,
    },
    #[error("Failed to read response: {0}")]
    ReadBody(reqwest::Error),
    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{provider} error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },
    #[error("Prompt blocked: {0}")]
    Blocked(String),
    #[error("No valid response")]
    NoChoices,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(Box<dyn std::error::Error + Send + Sync>),
}

pub(crate) fn format_error(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter,
) -> std::fmt::Result {
    write!(f, "{e}")?;

    let mut source = e.source();

    if e.source().is_some() {
        writeln!(f, "\ncaused by:")?;
        let mut i: usize = 0;
        while let Some(inner) = source {
            writeln!(f, "{i: >5}: {inner}")?;
            source = inner.source();
            i += 1;
        }
    }

    Ok(())
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_error(self, f)
    }
}
