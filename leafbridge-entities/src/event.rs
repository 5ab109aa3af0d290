use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Kind of interaction a client reports for a marker.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Click,
    DragEnd,
}

impl EventKind {
    /// Name of the server-side method the client invokes.
    pub const fn client_handler(self) -> &'static str {
        match self {
            Self::Click => "onMarkerClick",
            Self::DragEnd => "onMarkerDragged",
        }
    }

    pub fn from_client_handler(name: &str) -> Option<Self> {
        match name {
            "onMarkerClick" => Some(Self::Click),
            "onMarkerDragged" => Some(Self::DragEnd),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPosition {
    pub lat: f64,
    pub lon: f64,
}

/// Undecoded event as delivered by the transport.
///
/// The payload is only meaningful for [`EventKind::DragEnd`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    pub tag: String,
    pub kind: EventKind,
    pub payload: Option<DragPosition>,
}

impl EventEnvelope {
    pub fn click(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            kind: EventKind::Click,
            payload: None,
        }
    }

    pub fn drag_end(tag: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            tag: tag.into(),
            kind: EventKind::DragEnd,
            payload: Some(DragPosition { lat, lon }),
        }
    }
}

/// Decoded interaction of a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerEvent {
    Click,
    /// Position after the marker has been dropped.
    DragEnd { lat: f64, lon: f64 },
}

impl MarkerEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click => EventKind::Click,
            Self::DragEnd { .. } => EventKind::DragEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn event_kind_names() {
        assert_eq!(EventKind::Click.as_ref(), "click");
        assert_eq!(EventKind::DragEnd.as_ref(), "dragend");
        for kind in EventKind::iter() {
            assert_eq!(kind.to_string().parse::<EventKind>().unwrap(), kind);
        }
        assert!("drag".parse::<EventKind>().is_err());
    }

    #[test]
    fn client_handler_names() {
        for kind in EventKind::iter() {
            assert_eq!(EventKind::from_client_handler(kind.client_handler()), Some(kind));
        }
        assert_eq!(EventKind::from_client_handler("onMapClick"), None);
    }

    #[test]
    fn kind_of_event() {
        assert_eq!(MarkerEvent::Click.kind(), EventKind::Click);
        let ev = MarkerEvent::DragEnd { lat: 1.0, lon: 2.0 };
        assert_eq!(ev.kind(), EventKind::DragEnd);
    }
}
