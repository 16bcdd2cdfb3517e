//! The command contract shared by every game request that changes state.

use uuid::Uuid;

use crate::language::Language;
use crate::session::SessionId;

/// A state-changing request against one language's endpoints.
///
/// Commands are built by the web layer from the session cookie and the
/// route, then handed to the game handlers. The accessors below are what
/// request logs are keyed on.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name of the command, `game.<operation>`, as it appears in the
    /// `command` field of request logs.
    fn command_type(&self) -> &'static str;

    /// Correlation ID tying the command's log lines together.
    fn correlation_id(&self) -> Uuid;

    /// Identifier presented by the client, `None` when the request carried
    /// no usable session cookie.
    fn session_id(&self) -> Option<SessionId>;

    /// Language of the endpoint the command arrived on.
    fn lang(&self) -> Language;
}
