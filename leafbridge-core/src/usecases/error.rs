use crate::{
    command::SerializationError,
    router::{DispatchError, RegistrationError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The marker has no correlation tag")]
    Untagged,
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
