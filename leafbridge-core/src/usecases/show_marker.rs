use super::prelude::*;
use crate::attach::render_attachments;

/// Renders the marker and sends it to the client of the session.
///
/// Popup and tooltip bindings are appended to the command so that
/// they are applied together with the marker.
pub fn show_marker<T>(
    transport: &T,
    builder: &CommandBuilder,
    session: &SessionId,
    marker: &Marker,
) -> Result<Command>
where
    T: TransportGateway + ?Sized,
{
    let cmd = builder.build(marker)?;
    let fragment = match render_attachments(marker)? {
        Some(attachments) => format!("{cmd}\n{attachments}"),
        None => cmd.to_string(),
    };
    log::debug!("Sending marker {} to session {session}", marker.geometry());
    transport.send(session, &fragment);
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockTransport, *};
    use leafbridge_entities::builders::*;

    #[test]
    fn send_marker_with_attachments() {
        let transport = MockTransport::default();
        let session = SessionId::from("s1");
        let marker = Marker::build()
            .pos(52.5, 13.4)
            .tag("m1")
            .popup("Hello")
            .finish();
        let cmd = show_marker(&transport, &CommandBuilder::default(), &session, &marker).unwrap();
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let (to, fragment) = &sent[0];
        assert_eq!(to, &session);
        assert!(fragment.starts_with(cmd.as_str()));
        assert!(fragment.ends_with(r#"item.bindPopup("Hello");"#));
    }

    #[test]
    fn send_nothing_on_serialization_error() {
        let transport = MockTransport::default();
        let marker = Marker::new(f64::NAN, 0.0);
        let res = show_marker(
            &transport,
            &CommandBuilder::default(),
            &SessionId::from("s1"),
            &marker,
        );
        assert!(matches!(res, Err(Error::Serialization(_))));
        assert!(transport.sent.borrow().is_empty());
    }
}
