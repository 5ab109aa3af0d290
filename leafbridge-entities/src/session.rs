use std::fmt;

use uuid::Uuid;

/// Identifier of a client session (one browser map).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_simple().to_string())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for SessionId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for SessionId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid_and_unique() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert!(a.is_valid());
        assert_ne!(a, b);
        assert!(!SessionId::from("").is_valid());
    }
}
