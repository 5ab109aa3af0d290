use jfs::Store;
use leafbridge_core::gateways::transport::TransportGateway;
use leafbridge_entities::session::SessionId;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};
use time::OffsetDateTime;

/// A transport that stores every command as a JSON file,
/// e.g. for inspecting the generated scripts.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct JsonCommand {
    pub session: String,
    pub fragment: String,
}

impl JsonCommand {
    fn new(session: &SessionId, fragment: &str) -> Self {
        let session = session.as_str().to_owned();
        let fragment = fragment.to_owned();
        Self { session, fragment }
    }
}

impl TransportGateway for SendToJsonFile {
    fn send(&self, session: &SessionId, fragment: &str) {
        let now = OffsetDateTime::now_utc().unix_timestamp_nanos();
        let key = format!("{now}-{session}");
        let cmd = JsonCommand::new(session, fragment);
        if let Err(err) = self.json_store.save_with_id(&cmd, &key) {
            log::warn!("Unable to save command in JSON file: {err}");
        }
    }
}
