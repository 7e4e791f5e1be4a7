//! Shared HTTP helpers and error types for the CLI.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use postview_models::Endpoints;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) endpoints: Endpoints,
}

impl AppContext {
    /// GET `url` and decode the JSON body, classifying non-success statuses.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> CliResult<T> {
        tracing::debug!(url = %url, what, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CliError::failure(anyhow!("request for {what} failed: {err}")))?;

        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| CliError::failure(anyhow!("failed to parse {what}: {err}")))
        } else {
            Err(classify_problem(response, what).await)
        }
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Parse a URL produced by [`Endpoints`].
pub(crate) fn endpoint_url(raw: &str) -> CliResult<Url> {
    raw.parse::<Url>()
        .map_err(|err| CliError::failure(anyhow!("invalid endpoint URL '{raw}': {err}")))
}

/// Classify an HTTP response into a CLI error.
pub(crate) async fn classify_problem(response: reqwest::Response, what: &str) -> CliError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_status(status, what, body.trim())
}

fn classify_status(status: StatusCode, what: &str, body: &str) -> CliError {
    if status == StatusCode::NOT_FOUND {
        return CliError::validation(format!("{what} not found"));
    }
    if status.is_client_error() {
        let message = if body.is_empty() {
            format!("{what} request rejected with status {status}")
        } else {
            format!("{what} request rejected with status {status}: {body}")
        };
        return CliError::validation(message);
    }
    let detail = if body.is_empty() {
        format!("{what} request failed with status {status}")
    } else {
        format!("{what} request failed with status {status}: {body}")
    };
    CliError::failure(anyhow!(detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_a_validation_error() {
        let err = classify_status(StatusCode::NOT_FOUND, "post 9", "{}");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "post 9 not found");
    }

    #[test]
    fn server_errors_are_failures() {
        let err = classify_status(StatusCode::BAD_GATEWAY, "posts", "");
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("502"));
    }

    #[test]
    fn client_errors_keep_body_text() {
        let err = classify_status(StatusCode::BAD_REQUEST, "posts", "bad filter");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().ends_with("bad filter"));
    }

    #[test]
    fn parse_url_reports_input() {
        let err = parse_url("::nope").expect_err("invalid URL");
        assert!(err.contains("::nope"));
        assert!(parse_url("http://127.0.0.1:8080").is_ok());
    }
}
