use crate::{geo::*, icon::*, tag::*};

/// Mutable visual and interaction state of a marker.
///
/// Unset fields fall back to the client-side defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerOptions {
    icon: Option<IconVariant>,
    popup: Option<String>,
    tooltip: Option<String>,
    draggable: bool,
    alert_state: bool,
}

impl MarkerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn icon(&self) -> Option<&IconVariant> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<IconVariant>) {
        self.icon = icon;
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    pub fn set_popup(&mut self, popup: Option<String>) {
        self.popup = popup;
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn set_tooltip(&mut self, tooltip: Option<String>) {
        self.tooltip = tooltip;
    }

    pub const fn draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub const fn alert_state(&self) -> bool {
        self.alert_state
    }

    pub fn set_alert_state(&mut self, alert_state: bool) {
        self.alert_state = alert_state;
    }
}

/// A single map pin.
///
/// The marker holds no visual state itself: positions are
/// delegated to its [`Geometry`], everything else to its
/// [`MarkerOptions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    geometry: Geometry,
    properties: MarkerOptions,
    tag: Option<String>,
}

impl Marker {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            geometry: Geometry::point(lat, lon),
            properties: MarkerOptions::default(),
            tag: None,
        }
    }

    pub fn with_tag(lat: f64, lon: f64, tag: impl Into<String>) -> Self {
        let mut marker = Self::new(lat, lon);
        marker.tag = Some(tag.into());
        marker
    }

    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    pub const fn properties(&self) -> &MarkerOptions {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut MarkerOptions {
        &mut self.properties
    }

    pub fn set_properties(&mut self, properties: MarkerOptions) {
        self.properties = properties;
    }

    pub const fn lat(&self) -> f64 {
        self.geometry.lat()
    }

    pub fn set_lat(&mut self, lat: f64) {
        self.geometry.set_lat(lat);
    }

    pub const fn lon(&self) -> f64 {
        self.geometry.lon()
    }

    pub fn set_lon(&mut self, lon: f64) {
        self.geometry.set_lon(lon);
    }

    // Both icon setters write the same slot and both getters read it.
    // Only the variant tells a div-icon apart from a plain icon.

    pub const fn icon(&self) -> Option<&IconVariant> {
        self.properties.icon()
    }

    pub fn set_icon(&mut self, options: IconOptions) {
        self.properties.set_icon(Some(IconVariant::Icon(options)));
    }

    pub const fn div_icon(&self) -> Option<&IconVariant> {
        self.properties.icon()
    }

    pub fn set_div_icon(&mut self, options: IconOptions) {
        self.properties.set_icon(Some(IconVariant::DivIcon(options)));
    }

    pub fn clear_icon(&mut self) {
        self.properties.set_icon(None);
    }

    pub fn popup(&self) -> Option<&str> {
        self.properties.popup()
    }

    pub fn set_popup(&mut self, popup: impl Into<String>) {
        self.properties.set_popup(Some(popup.into()));
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.properties.tooltip()
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.properties.set_tooltip(Some(tooltip.into()));
    }

    pub const fn draggable(&self) -> bool {
        self.properties.draggable()
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.properties.set_draggable(draggable);
    }

    /// Flag read by the client-side cluster to highlight the marker.
    ///
    /// Must be set before the marker is sent to the client.
    pub const fn alert_state(&self) -> bool {
        self.properties.alert_state()
    }

    pub fn set_alert_state(&mut self, alert_state: bool) {
        self.properties.set_alert_state(alert_state);
    }

    /// The tag as it was set, blank or not.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// The tag if it is usable for server callbacks.
    pub fn correlation_tag(&self) -> Option<Tag> {
        self.tag
            .as_deref()
            .and_then(|tag| Tag::try_from(tag).ok())
    }
}
