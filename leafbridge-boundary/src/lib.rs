use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Marker {
    pub lat         : f64,
    pub lng         : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag         : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon        : Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup       : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip     : Option<String>,
    #[serde(default)]
    pub draggable   : bool,
    #[serde(default)]
    pub alert_state : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "type", content = "options", rename_all = "kebab-case")]
pub enum Icon {
    Icon(Map<String, Value>),
    DivIcon(Map<String, Value>),
}

/// A set of markers, e.g. loaded from a file.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MarkerSet {
    #[serde(default)]
    pub markers: Vec<Marker>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct DragPayload {
    pub lat: f64,
    pub lng: f64,
}

/// Typed event message sent by a client.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct EventEnvelope {
    pub tag: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<DragPayload>,
}

/// Invocation of a server proxy method by a client,
/// e.g. `onMarkerDragged("m1", 52.6, 13.5)`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ClientCall {
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Anything a client may send to the server.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum InboundMessage {
    Call(ClientCall),
    Event(EventEnvelope),
}
