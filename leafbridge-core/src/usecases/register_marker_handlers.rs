use super::prelude::*;

/// Binds server-side handlers to the tag of a marker.
///
/// Only tagged markers get client subscriptions, so untagged
/// markers are rejected.
pub fn register_marker_handlers<I>(
    router: &EventRouter,
    session: &SessionId,
    marker: &Marker,
    handlers: I,
) -> Result<Tag>
where
    I: IntoIterator<Item = Handler>,
{
    let tag = marker.correlation_tag().ok_or(Error::Untagged)?;
    for handler in handlers {
        router.register(session, tag.clone(), handler)?;
    }
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_click_and_drag_handlers() {
        let router = EventRouter::new();
        let session = SessionId::from("s1");
        router.open_session(session.clone());
        let marker = Marker::with_tag(1.0, 2.0, "m1");
        let handlers = vec![
            Handler::on_click(|| Ok(())),
            Handler::on_drag_end(|_, _| Ok(())),
        ];
        let tag = register_marker_handlers(&router, &session, &marker, handlers).unwrap();
        assert_eq!(tag.as_str(), "m1");
        assert_eq!(router.handler_count(&session), 2);
    }

    #[test]
    fn reject_untagged_markers() {
        let router = EventRouter::new();
        let session = SessionId::from("s1");
        router.open_session(session.clone());
        let marker = Marker::with_tag(1.0, 2.0, "  ");
        let res = register_marker_handlers(
            &router,
            &session,
            &marker,
            vec![Handler::on_click(|| Ok(()))],
        );
        assert!(matches!(res, Err(Error::Untagged)));
        assert_eq!(router.handler_count(&session), 0);
    }

    #[test]
    fn reject_unknown_sessions() {
        let router = EventRouter::new();
        let marker = Marker::with_tag(1.0, 2.0, "m1");
        let res = register_marker_handlers(
            &router,
            &SessionId::from("s1"),
            &marker,
            vec![Handler::on_click(|| Ok(()))],
        );
        assert!(matches!(res, Err(Error::Registration(_))));
    }
}
