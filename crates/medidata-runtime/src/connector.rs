use medidata_types::NotionOptions;
use std::fmt;

/// Why a workspace connection attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectError {
    pub reason: String,
}

impl ConnectError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ConnectError {}

/// Authorizes a workspace token once the connect delay has elapsed.
///
/// A failure is retryable: the session drops back to `Disconnected` and the
/// caller may submit again.
pub trait Connector {
    fn name(&self) -> &str;
    fn connect(&self, token: &str, options: &NotionOptions) -> Result<(), ConnectError>;
}

/// Accepts every non-empty token.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockConnector;

impl Connector for MockConnector {
    fn name(&self) -> &str {
        "mock"
    }

    fn connect(&self, _token: &str, _options: &NotionOptions) -> Result<(), ConnectError> {
        Ok(())
    }
}
