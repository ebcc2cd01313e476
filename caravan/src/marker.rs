//! A [Marker] identifies a single camel in the race. Markers are written as a single,
//! non-whitespace character, conventionally the first letter of the camel's colour.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(char);

impl Marker {
    pub fn new(symbol: char) -> Self {
        Self::try_new(symbol).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_new(symbol: char) -> Result<Self, InvalidMarkerId> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(InvalidMarkerId(symbol.escape_default().to_string()));
        }
        Ok(Self(symbol))
    }

    pub fn symbol(&self) -> char {
        self.0
    }
}

/// The five camels of the standard game: red, blue, green, yellow and purple.
pub const STANDARD_SYMBOLS: [char; 5] = ['r', 'b', 'g', 'y', 'p'];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid marker '{0}'")]
pub struct InvalidMarkerId(pub String);

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Marker {
    type Err = InvalidMarkerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_new(symbol),
            _ => Err(InvalidMarkerId(s.into())),
        }
    }
}

impl TryFrom<String> for Marker {
    type Error = InvalidMarkerId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0.to_string()
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}
