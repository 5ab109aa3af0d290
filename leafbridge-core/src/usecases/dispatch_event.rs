use super::prelude::*;

pub fn dispatch_event(
    router: &EventRouter,
    session: &SessionId,
    envelope: EventEnvelope,
) -> Result<()> {
    router.dispatch(session, envelope)?;
    Ok(())
}
