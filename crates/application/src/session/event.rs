//! Session events

/// Events broadcast by the gateway about the session.
///
/// The gateway never navigates; it emits events and the embedding layer
/// decides what a "go to login" instruction means in its UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The stored credential was rejected by the server or discarded by
    /// an explicit logout. The caller should present the login view.
    AuthenticationRequired,
}
