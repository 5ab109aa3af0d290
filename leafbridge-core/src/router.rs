//! Server-side dispatch of client interaction events.
//!
//! Handlers are registered per session and per `(tag, kind)`.
//! Registering a handler for a pair that already has one replaces it.

use std::{
    collections::HashMap,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use parking_lot::RwLock;
use thiserror::Error;

use crate::entities::*;

pub type HandlerResult = anyhow::Result<()>;

type ClickFn = dyn Fn() -> HandlerResult + Send + Sync;
type DragEndFn = dyn Fn(f64, f64) -> HandlerResult + Send + Sync;

/// Server-side callback of one marker interaction.
pub enum Handler {
    Click(Box<ClickFn>),
    /// Called with the new latitude and longitude.
    DragEnd(Box<DragEndFn>),
}

impl Handler {
    pub fn on_click<F>(f: F) -> Self
    where
        F: Fn() -> HandlerResult + Send + Sync + 'static,
    {
        Self::Click(Box::new(f))
    }

    pub fn on_drag_end<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> HandlerResult + Send + Sync + 'static,
    {
        Self::DragEnd(Box::new(f))
    }

    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::DragEnd(_) => EventKind::DragEnd,
        }
    }

    fn invoke(&self, event: MarkerEvent) -> HandlerResult {
        match (self, event) {
            (Self::Click(f), MarkerEvent::Click) => f(),
            (Self::DragEnd(f), MarkerEvent::DragEnd { lat, lon }) => f(lat, lon),
            (handler, event) => {
                // Handlers are looked up by the kind of the event.
                unreachable!(
                    "{} handler invoked with {} event",
                    handler.kind(),
                    event.kind()
                )
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.kind()).finish()
    }
}

#[derive(Debug, Error)]
pub enum HandlerFailure {
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
    #[error("Handler panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Unknown session '{0}'")]
    UnknownSession(SessionId),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown session '{0}'")]
    UnknownSession(SessionId),
    #[error("No '{kind}' handler registered for tag '{tag}'")]
    UnknownCorrelation { tag: String, kind: EventKind },
    #[error("Missing or invalid '{kind}' payload for tag '{tag}'")]
    MalformedPayload { tag: String, kind: EventKind },
    #[error("The '{kind}' handler of tag '{tag}' failed")]
    HandlerFailure {
        tag: Tag,
        kind: EventKind,
        #[source]
        cause: HandlerFailure,
    },
}

type Handlers = HashMap<(Tag, EventKind), Arc<Handler>>;

/// Routes inbound events to the handlers registered for them.
///
/// Lookups take a shared lock only; handlers run after the lock
/// has been released and may register or unregister handlers.
#[derive(Debug, Default)]
pub struct EventRouter {
    sessions: RwLock<HashMap<SessionId, Handlers>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the session was already open.
    pub fn open_session(&self, session: SessionId) -> bool {
        let mut sessions = self.sessions.write();
        if sessions.contains_key(&session) {
            return false;
        }
        log::info!("Open session {session}");
        sessions.insert(session, Handlers::new());
        true
    }

    /// Drops the session with all of its handlers.
    ///
    /// Returns the number of dropped handlers.
    pub fn close_session(&self, session: &SessionId) -> usize {
        let removed = self.sessions.write().remove(session);
        match removed {
            Some(handlers) => {
                log::info!(
                    "Closed session {session} with {} handler(s)",
                    handlers.len()
                );
                handlers.len()
            }
            None => 0,
        }
    }

    pub fn has_session(&self, session: &SessionId) -> bool {
        self.sessions.read().contains_key(session)
    }

    pub fn handler_count(&self, session: &SessionId) -> usize {
        self.sessions.read().get(session).map_or(0, HashMap::len)
    }

    pub fn register(
        &self,
        session: &SessionId,
        tag: Tag,
        handler: Handler,
    ) -> Result<(), RegistrationError> {
        let mut sessions = self.sessions.write();
        let handlers = sessions
            .get_mut(session)
            .ok_or_else(|| RegistrationError::UnknownSession(session.clone()))?;
        let kind = handler.kind();
        log::debug!("Register '{kind}' handler for tag '{tag}' in session {session}");
        if handlers
            .insert((tag.clone(), kind), Arc::new(handler))
            .is_some()
        {
            log::debug!("Replaced previous '{kind}' handler of tag '{tag}'");
        }
        Ok(())
    }

    /// Removes all handlers of a tag, e.g. when its marker is removed
    /// from the map.
    ///
    /// Returns the number of removed handlers.
    pub fn unregister(&self, session: &SessionId, tag: &Tag) -> usize {
        let mut sessions = self.sessions.write();
        let Some(handlers) = sessions.get_mut(session) else {
            return 0;
        };
        let count = handlers.len();
        handlers.retain(|(t, _), _| t != tag);
        let removed = count - handlers.len();
        log::debug!("Unregistered {removed} handler(s) of tag '{tag}' in session {session}");
        removed
    }

    /// Decodes the event and invokes the matching handler.
    ///
    /// Every error is scoped to this single event: it is logged, the
    /// event is dropped and the router keeps serving other events.
    pub fn dispatch(&self, session: &SessionId, envelope: EventEnvelope) -> Result<(), DispatchError> {
        let res = self.try_dispatch(session, envelope);
        if let Err(err) = &res {
            log::warn!("Dropped event in session {session}: {err}");
        }
        res
    }

    fn try_dispatch(&self, session: &SessionId, envelope: EventEnvelope) -> Result<(), DispatchError> {
        let EventEnvelope { tag, kind, payload } = envelope;
        let event = decode(kind, payload).ok_or_else(|| DispatchError::MalformedPayload {
            tag: tag.clone(),
            kind,
        })?;
        let Ok(tag) = Tag::try_from(tag.as_str()) else {
            return Err(DispatchError::UnknownCorrelation { tag, kind });
        };
        let handler = {
            let sessions = self.sessions.read();
            let handlers = sessions
                .get(session)
                .ok_or_else(|| DispatchError::UnknownSession(session.clone()))?;
            handlers
                .get(&(tag.clone(), kind))
                .cloned()
                .ok_or_else(|| DispatchError::UnknownCorrelation {
                    tag: tag.to_string(),
                    kind,
                })?
        };
        log::debug!("Dispatch '{kind}' event of tag '{tag}' in session {session}");
        let res = match panic::catch_unwind(AssertUnwindSafe(|| handler.invoke(event))) {
            Ok(res) => res.map_err(HandlerFailure::from),
            Err(panic) => Err(HandlerFailure::Panicked(panic_message(panic.as_ref()))),
        };
        res.map_err(|cause| DispatchError::HandlerFailure { tag, kind, cause })
    }
}

fn decode(kind: EventKind, payload: Option<DragPosition>) -> Option<MarkerEvent> {
    match kind {
        EventKind::Click => Some(MarkerEvent::Click),
        EventKind::DragEnd => payload
            .filter(|p| p.lat.is_finite() && p.lon.is_finite())
            .map(|DragPosition { lat, lon }| MarkerEvent::DragEnd { lat, lon }),
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown cause".to_owned()
    }
}
