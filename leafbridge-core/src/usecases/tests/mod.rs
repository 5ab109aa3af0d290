use crate::{entities::SessionId, gateways::transport::TransportGateway};
use std::cell::RefCell;

#[derive(Default)]
pub struct MockTransport {
    pub sent: RefCell<Vec<(SessionId, String)>>,
}

impl TransportGateway for MockTransport {
    fn send(&self, session: &SessionId, fragment: &str) {
        self.sent
            .borrow_mut()
            .push((session.clone(), fragment.to_owned()));
    }
}
