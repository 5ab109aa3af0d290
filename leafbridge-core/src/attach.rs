//! Popup and tooltip bindings layered on top of a marker command.

use crate::{
    command::{SerializationError, ITEM_VAR},
    entities::*,
};

/// Renders the client calls that bind popup and tooltip text to the
/// marker created by its command.
///
/// Returns `None` if the marker has neither.
pub fn render_attachments(marker: &Marker) -> Result<Option<String>, SerializationError> {
    let mut out = String::new();
    if let Some(popup) = marker.popup() {
        out.push_str(&format!(
            "{ITEM_VAR}.bindPopup({});",
            serde_json::to_string(popup)?
        ));
    }
    if let Some(tooltip) = marker.tooltip() {
        out.push_str(&format!(
            "{ITEM_VAR}.bindTooltip({});",
            serde_json::to_string(tooltip)?
        ));
    }
    Ok((!out.is_empty()).then_some(out))
}
