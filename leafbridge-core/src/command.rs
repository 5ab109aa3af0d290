//! Rendering of markers into client-side (Leaflet) commands.
//!
//! A command is one flat script fragment that creates the marker,
//! attaches its icon, sets the alert state and, for tagged markers,
//! subscribes to `click` and `dragend`. The client executes it as a
//! whole, so there is no state where a marker exists without its icon
//! or its bindings.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::entities::*;

/// JS expression of the server proxy within the client component.
pub const DEFAULT_SERVER_PROXY: &str = "this.$server";

/// Name of the client-side variable holding the created marker.
pub const ITEM_VAR: &str = "item";

const SERVER_VAR: &str = "leafbridgeServer";

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Coordinates {0} are not finite")]
    NonFiniteCoordinates(Geometry),
    #[error(transparent)]
    NonFiniteOption(#[from] NonFiniteOption),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, SerializationError>;

/// Client-executable script fragment of one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command(String);

impl Command {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CommandBuilder {
    server_proxy: String,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_PROXY)
    }
}

impl CommandBuilder {
    pub fn new(server_proxy: impl Into<String>) -> Self {
        Self {
            server_proxy: server_proxy.into(),
        }
    }

    pub fn server_proxy(&self) -> &str {
        &self.server_proxy
    }

    pub fn build(&self, marker: &Marker) -> Result<Command> {
        let mut cmd = marker_fragment(marker)?;
        if let Some(tag) = marker.correlation_tag() {
            cmd.push_str(&self.event_bindings(&tag)?);
        }
        log::debug!("Rendered marker at {}", marker.geometry());
        Ok(Command(cmd))
    }

    fn event_bindings(&self, tag: &Tag) -> Result<String> {
        let tag = serde_json::to_string(tag.as_str())?;
        let click = EventKind::Click;
        let drag_end = EventKind::DragEnd;
        Ok(format!(
            "\nvar {SERVER_VAR} = {proxy};\
             \n{ITEM_VAR}.on('{click}', function (e) {{ {SERVER_VAR}.{on_click}({tag})}});\
             \n{ITEM_VAR}.on('{drag_end}', function (e) {{ var pos = e.target.getLatLng(); {SERVER_VAR}.{on_drag_end}({tag}, pos.lat, pos.lng)}});",
            proxy = self.server_proxy,
            on_click = click.client_handler(),
            on_drag_end = drag_end.client_handler(),
        ))
    }
}

/// Renders a marker with the default server proxy.
pub fn build_command(marker: &Marker) -> Result<Command> {
    CommandBuilder::default().build(marker)
}

fn marker_fragment(marker: &Marker) -> Result<String> {
    let geometry = marker.geometry();
    if !geometry.is_finite() {
        return Err(SerializationError::NonFiniteCoordinates(*geometry));
    }
    let coords = serde_json::to_string(geometry.coordinates())?;
    let icon = match marker.icon() {
        Some(icon) => format!(", icon: {}", icon_constructor(icon)?),
        None => String::new(),
    };
    Ok(format!(
        "let {ITEM_VAR} = L.marker({coords},{{draggable:{draggable}{icon} }});\
         {ITEM_VAR}.options.alert_state={alert_state};",
        draggable = marker.draggable(),
        alert_state = marker.alert_state(),
    ))
}

fn icon_constructor(icon: &IconVariant) -> Result<String> {
    let class = match icon.kind() {
        IconKind::Icon => "Icon",
        IconKind::DivIcon => "divIcon",
    };
    let options = Value::Object(icon.options().to_json()?);
    Ok(format!("new L.{class}({})", serde_json::to_string(&options)?))
}
