use anyhow::Result;
use leafbridge_boundary::InboundMessage;
use leafbridge_core::{
    command::CommandBuilder,
    entities::{EventEnvelope, Marker, SessionId},
    gateways::transport::TransportGateway,
    router::{EventRouter, Handler},
    usecases,
};
use parking_lot::Mutex;
use std::{io::BufRead, str, sync::Arc};

pub type Transport = Arc<dyn TransportGateway + Send + Sync>;

pub type SharedMarker = Arc<Mutex<Marker>>;

/// Opens the session, renders all markers and binds handlers to the
/// correlated ones.
pub fn open(
    router: &EventRouter,
    transport: &Transport,
    builder: &CommandBuilder,
    session: &SessionId,
    markers: Vec<Marker>,
) -> Result<Vec<SharedMarker>> {
    router.open_session(session.clone());
    let markers: Vec<_> = markers
        .into_iter()
        .map(|marker| Arc::new(Mutex::new(marker)))
        .collect();
    for marker in &markers {
        usecases::show_marker(&**transport, builder, session, &marker.lock())?;
        if marker.lock().correlation_tag().is_none() {
            continue;
        }
        let handlers = marker_handlers(marker, transport, builder, session);
        usecases::register_marker_handlers(router, session, &marker.lock(), handlers)?;
    }
    Ok(markers)
}

/// Dispatches every line of the input as a client message.
///
/// Invalid lines are logged and skipped. Returns the number of
/// handled events.
pub fn dispatch_lines<R: BufRead>(router: &EventRouter, session: &SessionId, input: R) -> usize {
    let mut handled = 0;
    for line in input.split(b'\n') {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Unable to read client messages: {err}");
                break;
            }
        };
        let Ok(line) = str::from_utf8(&line) else {
            log::warn!("Skipped client message that is not valid UTF-8");
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        let envelope = match serde_json::from_str::<InboundMessage>(line)
            .map_err(anyhow::Error::from)
            .and_then(|msg| EventEnvelope::try_from(msg).map_err(anyhow::Error::from))
        {
            Ok(envelope) => envelope,
            Err(err) => {
                log::warn!("Invalid client message '{line}': {err}");
                continue;
            }
        };
        match usecases::dispatch_event(router, session, envelope) {
            Ok(()) => handled += 1,
            Err(err) => log::debug!("Client message not handled: {err}"),
        }
    }
    handled
}

/// Drops the handlers of all markers and the session itself.
pub fn close(router: &EventRouter, session: &SessionId, markers: &[SharedMarker]) {
    for marker in markers {
        usecases::remove_marker(router, session, &marker.lock());
    }
    let dropped = router.close_session(session);
    log::info!("Closed session {session} ({dropped} remaining handlers)");
}

fn marker_handlers(
    marker: &SharedMarker,
    transport: &Transport,
    builder: &CommandBuilder,
    session: &SessionId,
) -> Vec<Handler> {
    let clicked = Arc::clone(marker);
    let on_click = Handler::on_click(move || {
        let marker = clicked.lock();
        log::info!(
            "Clicked marker '{}' at {}",
            marker.tag().unwrap_or_default(),
            marker.geometry()
        );
        Ok(())
    });

    let dragged = Arc::clone(marker);
    let transport = Arc::clone(transport);
    let builder = builder.clone();
    let session = session.clone();
    let on_drag_end = Handler::on_drag_end(move |lat, lon| {
        let mut marker = dragged.lock();
        marker.set_lat(lat);
        marker.set_lon(lon);
        usecases::show_marker(&*transport, &builder, &session, &marker)?;
        Ok(())
    });

    vec![on_click, on_drag_end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<String>>,
    }

    impl TransportGateway for RecordingTransport {
        fn send(&self, _: &SessionId, fragment: &str) {
            self.sent.lock().push(fragment.to_owned());
        }
    }

    fn markers() -> Vec<Marker> {
        vec![
            Marker::with_tag(52.5, 13.4, ""),
            Marker::with_tag(48.1, 11.6, "m2"),
            Marker::new(50.0, 8.0),
        ]
    }

    #[test]
    fn dispatch_drag_next_to_blank_tagged_marker() {
        let router = EventRouter::new();
        let recorder = Arc::new(RecordingTransport::default());
        let transport: Transport = recorder.clone();
        let session = SessionId::from("s1");

        let markers = open(
            &router,
            &transport,
            &CommandBuilder::default(),
            &session,
            self::markers(),
        )
        .unwrap();
        assert_eq!(recorder.sent.lock().len(), 3);
        assert_eq!(router.handler_count(&session), 2);

        let input = r#"{"method":"onMarkerDragged","args":["m2",48.2,11.7]}"#;
        assert_eq!(dispatch_lines(&router, &session, Cursor::new(input)), 1);
        assert_eq!(markers[1].lock().lat(), 48.2);
        assert_eq!(markers[1].lock().lon(), 11.7);
        let sent = recorder.sent.lock();
        assert_eq!(sent.len(), 4);
        assert!(sent[3].contains("L.marker([48.2,11.7]"));
    }

    #[test]
    fn skip_invalid_lines() {
        let router = EventRouter::new();
        let transport: Transport = Arc::new(RecordingTransport::default());
        let session = SessionId::from("s1");
        let markers = open(
            &router,
            &transport,
            &CommandBuilder::default(),
            &session,
            self::markers(),
        )
        .unwrap();

        let mut input = Vec::new();
        input.extend_from_slice(b"\xff\xfe\n");
        input.extend_from_slice(b"not json\n\n");
        input.extend_from_slice(br#"{"method":"onMarkerClick","args":[""]}"#);
        input.push(b'\n');
        input.extend_from_slice(br#"{"tag":"m2","kind":"click"}"#);
        input.push(b'\n');
        assert_eq!(dispatch_lines(&router, &session, Cursor::new(input)), 1);

        close(&router, &session, &markers);
        assert!(!router.has_session(&session));
    }
}
