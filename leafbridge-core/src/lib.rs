pub mod attach;
pub mod command;
pub mod gateways;
pub mod router;
pub mod usecases;

pub mod entities {
    pub use leafbridge_entities::{event::*, geo::*, icon::*, marker::*, session::*, tag::*};
}
