use std::io::{self, Write};

use leafbridge_core::gateways::transport::TransportGateway;
use leafbridge_entities::session::SessionId;

/// Prints every command to stdout, one blank line apart.
#[derive(Debug, Clone, Default)]
pub struct StdoutTransport;

impl TransportGateway for StdoutTransport {
    fn send(&self, session: &SessionId, fragment: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "// session: {session}\n{fragment}\n") {
            log::warn!("Unable to print command: {err}");
        }
    }
}
