use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Server-assigned identifier of an analysis segment.
///
/// Serialized as a JSON integer. Deserialization also accepts a string of
/// digits or a whole-number float, since the API has been observed to
/// return each form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SegmentId(u64);

impl SegmentId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SegmentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SegmentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ModelError::InvalidSegmentId(s.to_string()))
    }
}

struct SegmentIdVisitor;

impl de::Visitor<'_> for SegmentIdVisitor {
    type Value = SegmentId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer segment id")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<SegmentId, E> {
        Ok(SegmentId(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<SegmentId, E> {
        u64::try_from(value)
            .map(SegmentId)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    /// Whole numbers such as `10.0` are accepted.
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<SegmentId, E> {
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
            Ok(SegmentId(value as u64))
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SegmentId, E> {
        value
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for SegmentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SegmentIdVisitor)
    }
}
