mod dispatch_event;
mod error;
mod register_marker_handlers;
mod remove_marker;
mod show_marker;

#[cfg(test)]
pub mod tests;

pub use self::{
    dispatch_event::*, error::Error, register_marker_handlers::*, remove_marker::*,
    show_marker::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        command::*,
        entities::*,
        gateways::transport::TransportGateway,
        router::{EventRouter, Handler},
    };
}
