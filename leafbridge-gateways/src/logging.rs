use leafbridge_core::gateways::transport::TransportGateway;
use leafbridge_entities::session::SessionId;

/// Writes every command to the log instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogTransport;

impl TransportGateway for LogTransport {
    fn send(&self, session: &SessionId, fragment: &str) {
        log::info!("Command for session {session}:\n{fragment}");
    }
}
