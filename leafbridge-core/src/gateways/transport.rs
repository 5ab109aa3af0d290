use leafbridge_entities::session::SessionId;

/// Ships command fragments to the client of a session.
///
/// Delivery is best-effort: a lost fragment leaves the client out of
/// sync until the next full render.
pub trait TransportGateway {
    fn send(&self, session: &SessionId, fragment: &str);
}
