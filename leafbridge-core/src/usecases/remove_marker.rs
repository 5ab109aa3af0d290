use super::prelude::*;

/// Drops the server-side handlers of a marker that has been removed
/// from the map.
///
/// Returns the number of removed handlers.
pub fn remove_marker(router: &EventRouter, session: &SessionId, marker: &Marker) -> usize {
    let Some(tag) = marker.correlation_tag() else {
        return 0;
    };
    let removed = router.unregister(session, &tag);
    log::debug!("Removed marker '{tag}' from session {session}");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_handlers_of_tagged_marker() {
        let router = EventRouter::new();
        let session = SessionId::from("s1");
        router.open_session(session.clone());
        let marker = Marker::with_tag(1.0, 2.0, "m1");
        router
            .register(&session, "m1".parse().unwrap(), Handler::on_click(|| Ok(())))
            .unwrap();
        assert_eq!(remove_marker(&router, &session, &marker), 1);
        assert_eq!(router.handler_count(&session), 0);
    }

    #[test]
    fn ignore_untagged_marker() {
        let router = EventRouter::new();
        let session = SessionId::from("s1");
        router.open_session(session.clone());
        assert_eq!(remove_marker(&router, &session, &Marker::new(0.0, 0.0)), 0);
    }
}
