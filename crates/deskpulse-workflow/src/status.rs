//! Integration availability report.

use serde::Serialize;

const MESSAGE_LIMIT: usize = 100;

/// Whether the automation service answered the probe at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

/// Result of probing the automation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationStatus {
    /// True only when the health endpoint answered 200.
    pub available: bool,
    pub url: String,
    pub workflows: Vec<String>,
    pub status: ConnectionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntegrationStatus {
    /// The service answered; `code` is the health endpoint's status.
    pub(crate) fn answered(url: String, workflows: Vec<String>, code: u16) -> Self {
        let available = code == 200;
        Self {
            available,
            url,
            workflows,
            status: ConnectionState::Connected,
            message: (!available).then(|| format!("Health check returned HTTP {code}")),
        }
    }

    /// The service could not be reached.
    pub(crate) fn unreachable(url: String, workflows: Vec<String>, error: &str) -> Self {
        Self {
            available: false,
            url,
            workflows,
            status: ConnectionState::Disconnected,
            message: Some(format!(
                "Workflow service not accessible: {}",
                truncate(error, MESSAGE_LIMIT)
            )),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_message_is_truncated() {
        let long = "x".repeat(500);
        let status = IntegrationStatus::unreachable("http://n8n".into(), Vec::new(), &long);
        assert!(!status.available);
        assert_eq!(status.status, ConnectionState::Disconnected);
        let message = status.message.unwrap();
        assert_eq!(message.matches('x').count(), 100);
    }

    #[test]
    fn test_non_200_is_connected_but_unavailable() {
        let status = IntegrationStatus::answered("http://n8n".into(), Vec::new(), 503);
        assert!(!status.available);
        assert_eq!(status.status, ConnectionState::Connected);

        let json = serde_json::to_value(IntegrationStatus::answered("u".into(), Vec::new(), 200)).unwrap();
        assert_eq!(json["status"], "connected");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
