//! Failure records forwarded to the logging service

use serde::{Deserialize, Serialize};

/// Fixed message codes understood by the logging service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCode {
    #[serde(rename = "import failed")]
    FailureGpxImport,
    #[serde(rename = "export failed")]
    FailureGpxExport,
}

impl MessageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FailureGpxImport => "import failed",
            Self::FailureGpxExport => "export failed",
        }
    }
}

impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw failure payload reported through a dialog's rejection channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureDetail {
    pub status: Option<u16>,
    pub body: serde_json::Value,
}

impl FailureDetail {
    pub fn new(status: Option<u16>, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Failure without a transport status, carrying only a message
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            status: None,
            body: serde_json::Value::String(text.into()),
        }
    }
}

/// A record handed to the logging service.
///
/// `modal` asks the sink to present the failure as a blocking notification
/// instead of a passive log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LogRecord {
    pub msg: MessageCode,
    pub http_response: Option<FailureDetail>,
    pub modal: bool,
    pub logged_at: chrono::DateTime<chrono::Utc>,
}

impl LogRecord {
    pub fn new(msg: MessageCode) -> Self {
        Self {
            msg,
            http_response: None,
            modal: false,
            logged_at: chrono::Utc::now(),
        }
    }

    pub fn with_response(mut self, detail: FailureDetail) -> Self {
        self.http_response = Some(detail);
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_code_wire_names() {
        assert_eq!(
            serde_json::to_string(&MessageCode::FailureGpxImport).unwrap(),
            "\"import failed\""
        );
        assert_eq!(MessageCode::FailureGpxExport.to_string(), "export failed");
    }

    #[test]
    fn test_log_record_builder() {
        let record = LogRecord::new(MessageCode::FailureGpxImport)
            .with_response(FailureDetail::new(Some(500), serde_json::json!("boom")))
            .modal(true);

        assert!(record.modal);
        assert_eq!(record.http_response.unwrap().status, Some(500));
    }
}
