use reqwest::StatusCode;

/// Appended to every error reported by the api.
pub const HELP_HINT: &str = "Use -h or --help for more information";

/// Extracts a message from an error response body.
///
/// A json object with a `detail` string yields that string, any other
/// body is used verbatim. An empty body falls back to the status
/// reason.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .map(String::from)
            .unwrap_or_else(|| status.as_str().to_string());
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
