use std::path::Path;

use crate::prelude::*;

const DOTENV_FILE: &str = ".env";

/// Resolves an API key from the environment, falling back to the `.env` file in the current
/// directory.
///
/// # Errors
///
/// Returns an error if the variable is unset and the `.env` file can't be read, or if neither
/// source holds a non-empty value.
pub fn load_api_key(var: &str) -> Result<String> {
    load_api_key_from(var, Path::new(DOTENV_FILE))
}

/// Same as [`load_api_key`] but reads the fallback values from `dotenv`.
pub fn load_api_key_from(var: &str, dotenv: &Path) -> Result<String> {
    if let Some(key) = non_empty(std::env::var(var).ok()) {
        log::debug!("found {} in the environment", var);
        return Ok(key);
    }

    log::debug!("{} not set, reading {}", var, dotenv.display());
    let key = non_empty(read_dotenv(var, dotenv)?);

    key.ok_or_else(|| Error::MissingApiKey(var.to_string()))
}

fn read_dotenv(var: &str, dotenv: &Path) -> Result<Option<String>> {
    let dotenv_error = |source| Error::Dotenv {
        var: var.to_string(),
        path: dotenv.display().to_string(),
        source,
    };

    for item in dotenvy::from_path_iter(dotenv).map_err(dotenv_error)? {
        let (key, value) = item.map_err(dotenv_error)?;
        if key == var {
            return Ok(Some(value));
        }
    }

    Ok(None)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
