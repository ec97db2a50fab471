// ABOUTME: Tri-state field types distinguishing an absent key, an explicit null, and a value
// ABOUTME: Nullable<T> and Keyed<T> with serde impls that preserve key presence on round-trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presence-aware optional fields
//!
//! JSON distinguishes `{}` from `{"x": null}`, and the Hevy API treats the two
//! differently. `Option<T>` collapses both into `None`, so payload fields use
//! [`Nullable`] instead.
//!
//! Fields must be declared with `#[serde(default, skip_serializing_if =
//! "Omittable::is_omitted")]` so that an absent key deserializes to
//! [`Nullable::Missing`] and a missing value is left out on serialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Types with a state that serializes as "no key at all"
pub trait Omittable {
    /// Whether the field should be left out of the serialized object
    fn is_omitted(&self) -> bool;
}

/// Optional, nullable value
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    /// Key not present
    Missing,
    /// Key present with JSON `null`
    Null,
    /// Key present with a value
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> Nullable<T> {
    /// Key was not present
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Key was present and null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the value, if any
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    /// Turn `Missing` into an explicit `Null`, leaving other states untouched
    #[must_use]
    pub fn or_null(self) -> Self {
        match self {
            Self::Missing => Self::Null,
            other => other,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T> Omittable for Nullable<T> {
    fn is_omitted(&self) -> bool {
        self.is_missing()
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reached when the enclosing field forgot `skip_serializing_if`
            Self::Missing | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Property-key presence without any null semantics of its own
///
/// `Keyed<Nullable<T>>` yields four states. `Present(Nullable::Missing)` is a
/// key that exists but holds no value; it serializes by omitting the key.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyed<T> {
    /// Key not present
    Absent,
    /// Key present
    Present(T),
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Keyed<T> {
    /// Key was present
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the inner value, if the key was present
    #[must_use]
    pub const fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(inner) => Some(inner),
            Self::Absent => None,
        }
    }
}

impl<T> Keyed<Nullable<T>> {
    /// Turn an absent key into an explicit `null`; a present key is kept as-is
    #[must_use]
    pub fn or_present_null(self) -> Self {
        match self {
            Self::Absent => Self::Present(Nullable::Null),
            present @ Self::Present(_) => present,
        }
    }
}

impl<T: Omittable> Omittable for Keyed<T> {
    fn is_omitted(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Present(inner) => inner.is_omitted(),
        }
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Present(inner) => inner.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Present)
    }
}
