//! Model directory lookup via the runtime's command-line listing facility.

use tokio::process::Command;
use tracing::debug;

use crate::config::OllamaConfig;
use crate::error::LookupError;

/// Whether the runtime binary is on `PATH`.
pub fn is_installed() -> bool {
    which::which("ollama").is_ok()
}

/// List the model identifiers currently installed in the local runtime.
///
/// Runs `ollama list` and takes the first whitespace-delimited field of each
/// line after the header. Header-only output means no models are installed
/// and yields an empty vector, not an error.
pub async fn list_models() -> Result<Vec<String>, LookupError> {
    list_models_with(&OllamaConfig::from_env()).await
}

/// Like [`list_models`], with an explicit config (binary override for tests).
pub async fn list_models_with(config: &OllamaConfig) -> Result<Vec<String>, LookupError> {
    if which::which(config.list_binary()).is_err() {
        return Err(LookupError::NotInstalled);
    }

    let output = Command::new(config.list_binary())
        .arg("list")
        .output()
        .await?;

    if !output.status.success() {
        return Err(LookupError::CommandFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let models = parse_listing(&stdout);
    debug!(count = models.len(), "listed local models");
    Ok(models)
}

/// Whether the runtime responds and reports at least one installed model.
pub async fn is_available() -> bool {
    matches!(list_models().await, Ok(models) if !models.is_empty())
}

fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .skip(1) // header line
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect()
}
