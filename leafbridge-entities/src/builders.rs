pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::marker_builder::*;

pub mod marker_builder {

    use super::*;
    use crate::{icon::*, marker::*};

    #[derive(Debug)]
    pub struct MarkerBuild {
        marker: Marker,
    }

    impl MarkerBuild {
        pub fn pos(mut self, lat: f64, lon: f64) -> Self {
            self.marker.set_lat(lat);
            self.marker.set_lon(lon);
            self
        }
        pub fn tag(mut self, tag: &str) -> Self {
            self.marker.set_tag(Some(tag.into()));
            self
        }
        pub fn icon_url(mut self, url: &str) -> Self {
            self.marker
                .set_icon(IconOptions::new().with("iconUrl", url));
            self
        }
        pub fn div_icon_html(mut self, html: &str) -> Self {
            self.marker
                .set_div_icon(IconOptions::new().with("html", html));
            self
        }
        pub fn popup(mut self, popup: &str) -> Self {
            self.marker.set_popup(popup);
            self
        }
        pub fn tooltip(mut self, tooltip: &str) -> Self {
            self.marker.set_tooltip(tooltip);
            self
        }
        pub fn draggable(mut self, draggable: bool) -> Self {
            self.marker.set_draggable(draggable);
            self
        }
        pub fn alert(mut self, alert_state: bool) -> Self {
            self.marker.set_alert_state(alert_state);
            self
        }
        pub fn finish(self) -> Marker {
            self.marker
        }
    }

    impl Builder for Marker {
        type Build = MarkerBuild;
        fn build() -> MarkerBuild {
            MarkerBuild {
                marker: Marker::new(0.0, 0.0),
            }
        }
    }
}
