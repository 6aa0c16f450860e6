//! The authenticated-user value carried through the codec chain
//!
//! An [`Identity`] is a URN naming the principal (e.g. `urn:github:346236`)
//! plus an order-irrelevant map of string properties. Identities are
//! immutable: every encode/decode call constructs a fresh value, nothing is
//! mutated in place, and equality is purely structural.
//!
//! The distinguished [`ANONYMOUS`] identity stands for "no authenticated
//! user". It is constructed once behind a `Lazy` and compared by value, never
//! by reference.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// URN of the distinguished anonymous identity.
pub const ANONYMOUS_URN: &str = "urn:veil:anonymous";

/// The identity representing "no authenticated user".
///
/// Returned by the `Safe` stage whenever decoding fails, and by an upstream
/// authentication pass when a request carries no credentials at all.
pub static ANONYMOUS: Lazy<Identity> = Lazy::new(|| Identity::new(ANONYMOUS_URN));

/// An authenticated user: a URN plus free-form string properties.
///
/// Two identities are equal iff both the URN and the full property map are
/// equal. Properties live in a `BTreeMap` so the canonical text form produced
/// by the plain codec is deterministic regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    urn: String,
    properties: BTreeMap<String, String>,
}

impl Identity {
    /// Creates an identity with the given URN and no properties.
    pub fn new(urn: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Creates an identity with the given URN and property map.
    pub fn with_properties(
        urn: impl Into<String>,
        properties: BTreeMap<String, String>,
    ) -> Self {
        Self {
            urn: urn.into(),
            properties,
        }
    }

    /// Returns a copy of this identity with one more property set.
    ///
    /// Builder-style; setting a name twice keeps the later value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the anonymous identity.
    pub fn anonymous() -> Self {
        ANONYMOUS.clone()
    }

    /// The URN naming this identity.
    pub fn urn(&self) -> &str {
        &self.urn
    }

    /// All properties of this identity.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Looks up a single property by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// True iff this is the anonymous identity.
    pub fn is_anonymous(&self) -> bool {
        *self == *ANONYMOUS
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.urn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Identity::new("urn:test:1").with_property("name", "Jeff");
        let b = Identity::new("urn:test:1").with_property("name", "Jeff");
        assert_eq!(a, b);

        let c = Identity::new("urn:test:1").with_property("name", "Walter");
        assert_ne!(a, c, "differing properties must not compare equal");
    }

    #[test]
    fn anonymous_is_a_single_value() {
        assert!(Identity::anonymous().is_anonymous());
        assert_eq!(Identity::anonymous(), Identity::new(ANONYMOUS_URN));
    }

    #[test]
    fn anonymous_with_properties_is_not_anonymous() {
        let id = Identity::new(ANONYMOUS_URN).with_property("name", "nobody");
        assert!(!id.is_anonymous());
    }

    #[test]
    fn later_property_wins() {
        let id = Identity::new("urn:test:1")
            .with_property("name", "first")
            .with_property("name", "second");
        assert_eq!(id.property("name"), Some("second"));
    }

    #[test]
    fn display_is_the_urn() {
        let id = Identity::new("urn:test:42");
        assert_eq!(id.to_string(), "urn:test:42");
    }
}
