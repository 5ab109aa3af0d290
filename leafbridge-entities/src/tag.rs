use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;

/// Correlation tag linking a client-side object to server-side handlers.
///
/// A tag always contains at least one non-whitespace character.
/// Uniqueness is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Blank correlation tag")]
pub struct BlankTag;

pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

impl Tag {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for Tag {
    type Error = BlankTag;
    fn try_from(from: String) -> Result<Self, Self::Error> {
        if is_blank(&from) {
            return Err(BlankTag);
        }
        Ok(Self(from))
    }
}

impl TryFrom<&str> for Tag {
    type Error = BlankTag;
    fn try_from(from: &str) -> Result<Self, Self::Error> {
        from.to_owned().try_into()
    }
}

impl FromStr for Tag {
    type Err = BlankTag;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl From<Tag> for String {
    fn from(from: Tag) -> Self {
        from.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
