//! Key/value domains and the tagged datum stored in a table.

use crate::error::Error;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Data kind governing how a key or value is interpreted and hashed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Integer,
    Character,
    String,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Integer, Domain::Character, Domain::String];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Integer => "integer",
            Domain::Character => "character",
            Domain::String => "string",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw tags follow declaration order: 0 integer, 1 character, 2 string.
impl TryFrom<i32> for Domain {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Domain::Integer),
            1 => Ok(Domain::Character),
            2 => Ok(Domain::String),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized domain tag {other}"
            ))),
        }
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unrecognized domain {s:?}")))
    }
}

/// Which of the table's two domain tags an operation targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Key,
    Value,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Selector::Key => "key",
            Selector::Value => "value",
        })
    }
}

impl TryFrom<i32> for Selector {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Selector::Key),
            1 => Ok(Selector::Value),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized selector tag {other}"
            ))),
        }
    }
}

/// A single key or value. Tables store these behind `Rc` and compare them
/// by identity, never by content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Datum {
    Integer(i64),
    Character(char),
    String(String),
}

impl Datum {
    pub fn domain(&self) -> Domain {
        match self {
            Datum::Integer(_) => Domain::Integer,
            Datum::Character(_) => Domain::Character,
            Datum::String(_) => Domain::String,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Datum::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Datum::Character(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Datum::Integer(v)
    }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self {
        Datum::Integer(i64::from(v))
    }
}

impl From<char> for Datum {
    fn from(c: char) -> Self {
        Datum::Character(c)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::String(s.to_owned())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::String(s)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Integer(i) => write!(f, "{i}"),
            Datum::Character(c) => write!(f, "{c:?}"),
            Datum::String(s) => write!(f, "{s:?}"),
        }
    }
}
