use super::*;
use leafbridge_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    NonFiniteOption(#[from] e::icon::NonFiniteOption),
    #[error("Unknown event kind '{0}'")]
    EventKind(String),
    #[error("Unknown client method '{0}'")]
    Method(String),
    #[error("Missing correlation tag in call of '{0}'")]
    MissingTag(String),
}

impl From<Marker> for e::marker::Marker {
    fn from(from: Marker) -> Self {
        let Marker {
            lat,
            lng,
            tag,
            icon,
            popup,
            tooltip,
            draggable,
            alert_state,
        } = from;
        let mut marker = Self::new(lat, lng);
        marker.set_tag(tag);
        match icon {
            Some(Icon::Icon(options)) => marker.set_icon(options.into()),
            Some(Icon::DivIcon(options)) => marker.set_div_icon(options.into()),
            None => {}
        }
        let props = marker.properties_mut();
        props.set_popup(popup);
        props.set_tooltip(tooltip);
        props.set_draggable(draggable);
        props.set_alert_state(alert_state);
        marker
    }
}

impl TryFrom<&e::marker::Marker> for Marker {
    type Error = Error;
    fn try_from(from: &e::marker::Marker) -> Result<Self, Self::Error> {
        let icon = match from.icon() {
            Some(e::icon::IconVariant::Icon(options)) => Some(Icon::Icon(options.to_json()?)),
            Some(e::icon::IconVariant::DivIcon(options)) => {
                Some(Icon::DivIcon(options.to_json()?))
            }
            None => None,
        };
        Ok(Self {
            lat: from.lat(),
            lng: from.lon(),
            tag: from.tag().map(ToOwned::to_owned),
            icon,
            popup: from.popup().map(ToOwned::to_owned),
            tooltip: from.tooltip().map(ToOwned::to_owned),
            draggable: from.draggable(),
            alert_state: from.alert_state(),
        })
    }
}

impl From<DragPayload> for e::event::DragPosition {
    fn from(from: DragPayload) -> Self {
        let DragPayload { lat, lng } = from;
        Self { lat, lon: lng }
    }
}

impl TryFrom<EventEnvelope> for e::event::EventEnvelope {
    type Error = Error;
    fn try_from(from: EventEnvelope) -> Result<Self, Self::Error> {
        let EventEnvelope { tag, kind, payload } = from;
        let kind = kind.parse().map_err(|_| Error::EventKind(kind))?;
        Ok(Self {
            tag,
            kind,
            payload: payload.map(Into::into),
        })
    }
}

impl TryFrom<ClientCall> for e::event::EventEnvelope {
    type Error = Error;
    fn try_from(from: ClientCall) -> Result<Self, Self::Error> {
        let ClientCall { method, args } = from;
        let kind =
            e::event::EventKind::from_client_handler(&method).ok_or(Error::Method(method.clone()))?;
        let mut args = args.into_iter();
        let tag = match args.next() {
            Some(Value::String(tag)) => tag,
            _ => return Err(Error::MissingTag(method)),
        };
        // Incomplete positions are left to the router to reject.
        let payload = match (kind, args.next(), args.next()) {
            (e::event::EventKind::DragEnd, Some(lat), Some(lng)) => lat
                .as_f64()
                .zip(lng.as_f64())
                .map(|(lat, lon)| e::event::DragPosition { lat, lon }),
            _ => None,
        };
        Ok(Self { tag, kind, payload })
    }
}

impl TryFrom<InboundMessage> for e::event::EventEnvelope {
    type Error = Error;
    fn try_from(from: InboundMessage) -> Result<Self, Self::Error> {
        match from {
            InboundMessage::Call(call) => call.try_into(),
            InboundMessage::Event(event) => event.try_into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::event::{DragPosition, EventKind};

    #[test]
    fn convert_marker_into_entity() {
        let m: Marker = serde_json::from_str(
            r#"{
                "lat": 52.5, "lng": 13.4, "tag": "m1",
                "icon": {"type": "div-icon", "options": {"html": "<b>1</b>", "iconSize": [30, 30.5]}},
                "popup": "Hi", "draggable": true
            }"#,
        )
        .unwrap();
        let m = e::marker::Marker::from(m);
        assert_eq!((m.lat(), m.lon()), (52.5, 13.4));
        assert_eq!(m.tag(), Some("m1"));
        assert_eq!(m.popup(), Some("Hi"));
        assert!(m.tooltip().is_none());
        assert!(m.draggable());
        assert!(!m.alert_state());
        let icon = m.icon().unwrap();
        assert!(icon.is_div_icon());
        assert_eq!(
            icon.options().get("iconSize"),
            Some(&e::icon::OptionValue::List(vec![
                e::icon::OptionValue::Integer(30),
                e::icon::OptionValue::Number(30.5)
            ]))
        );
    }

    #[test]
    fn convert_entity_into_marker() {
        let mut m = e::marker::Marker::with_tag(1.0, 2.0, "x");
        m.set_icon(e::icon::IconOptions::new().with("iconUrl", "pin.png"));
        m.set_alert_state(true);
        let m = Marker::try_from(&m).unwrap();
        assert_eq!(m.tag.as_deref(), Some("x"));
        assert!(m.alert_state);
        assert!(matches!(m.icon, Some(Icon::Icon(ref options)) if options["iconUrl"] == "pin.png"));

        let mut m = e::marker::Marker::new(1.0, 2.0);
        m.set_icon(e::icon::IconOptions::new().with("opacity", f64::NAN));
        assert!(matches!(
            Marker::try_from(&m),
            Err(Error::NonFiniteOption(err)) if err.key == "opacity"
        ));
    }

    #[test]
    fn convert_client_calls() {
        let call: ClientCall =
            serde_json::from_str(r#"{"method":"onMarkerDragged","args":["m1",52.6,13.5]}"#)
                .unwrap();
        let ev = e::event::EventEnvelope::try_from(call).unwrap();
        assert_eq!(ev, e::event::EventEnvelope::drag_end("m1", 52.6, 13.5));

        let call: ClientCall =
            serde_json::from_str(r#"{"method":"onMarkerClick","args":["m1"]}"#).unwrap();
        let ev = e::event::EventEnvelope::try_from(call).unwrap();
        assert_eq!(ev, e::event::EventEnvelope::click("m1"));

        let call: ClientCall =
            serde_json::from_str(r#"{"method":"onMarkerDragged","args":["m1"]}"#).unwrap();
        let ev = e::event::EventEnvelope::try_from(call).unwrap();
        assert_eq!(ev.kind, EventKind::DragEnd);
        assert_eq!(ev.payload, None);
    }

    #[test]
    fn reject_invalid_client_calls() {
        let call = ClientCall {
            method: "alert".into(),
            args: vec![],
        };
        assert!(matches!(
            e::event::EventEnvelope::try_from(call),
            Err(Error::Method(_))
        ));
        let call = ClientCall {
            method: "onMarkerClick".into(),
            args: vec![Value::from(1)],
        };
        assert!(matches!(
            e::event::EventEnvelope::try_from(call),
            Err(Error::MissingTag(_))
        ));
    }

    #[test]
    fn convert_event_envelopes() {
        let ev = EventEnvelope {
            tag: "m1".into(),
            kind: "dragend".into(),
            payload: Some(DragPayload { lat: 1.0, lng: 2.0 }),
        };
        let ev = e::event::EventEnvelope::try_from(ev).unwrap();
        assert_eq!(ev.kind, EventKind::DragEnd);
        assert_eq!(ev.payload, Some(DragPosition { lat: 1.0, lon: 2.0 }));

        let ev = EventEnvelope {
            tag: "m1".into(),
            kind: "hover".into(),
            payload: None,
        };
        assert!(matches!(
            e::event::EventEnvelope::try_from(ev),
            Err(Error::EventKind(kind)) if kind == "hover"
        ));
    }
}
