use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Optional ordering value on a policy.
///
/// Tier priorities arrive as integers while policy priorities arrive as
/// floating-point numbers; both share this type so display code handles
/// them uniformly. A value the server did not send is `Absent`, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum OptionalPriority {
    #[default]
    Absent,
    Integer(i64),
    Float(f64),
}

impl OptionalPriority {
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionalPriority::Absent)
    }
}

impl From<i64> for OptionalPriority {
    fn from(value: i64) -> Self {
        OptionalPriority::Integer(value)
    }
}

impl From<i32> for OptionalPriority {
    fn from(value: i32) -> Self {
        OptionalPriority::Integer(i64::from(value))
    }
}

impl From<f64> for OptionalPriority {
    fn from(value: f64) -> Self {
        OptionalPriority::Float(value)
    }
}

impl<T: Into<OptionalPriority>> From<Option<T>> for OptionalPriority {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl Serialize for OptionalPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionalPriority::Absent => serializer.serialize_none(),
            OptionalPriority::Integer(v) => serializer.serialize_i64(*v),
            OptionalPriority::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

struct PriorityVisitor;

impl<'de> Visitor<'de> for PriorityVisitor {
    type Value = OptionalPriority;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(OptionalPriority::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match i64::try_from(v) {
            Ok(v) => Ok(OptionalPriority::Integer(v)),
            Err(_) => Ok(OptionalPriority::Float(v as f64)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(OptionalPriority::Float(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionalPriority::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionalPriority::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(PriorityVisitor)
    }
}

impl<'de> Deserialize<'de> for OptionalPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(PriorityVisitor)
    }
}
