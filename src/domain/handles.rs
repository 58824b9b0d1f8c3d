// SPDX-License-Identifier: MPL-2.0
//! Opaque record identifiers.
//!
//! Every record in a tree is addressed by a handle: a unique, opaque string
//! assigned by whatever produced the tree file. Handles are typed per record
//! kind so a citation handle cannot be passed where a media handle is
//! expected, replacing the structural typing of looser object models.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a handle from its string form.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the handle's string form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_handle!(
    /// Identifier of a [`Person`](crate::domain::Person) record.
    PersonHandle
);
define_handle!(
    /// Identifier of a [`Family`](crate::domain::Family) record.
    FamilyHandle
);
define_handle!(
    /// Identifier of an [`Event`](crate::domain::Event) record.
    EventHandle
);
define_handle!(
    /// Identifier of a [`Citation`](crate::domain::Citation) record.
    CitationHandle
);
define_handle!(
    /// Identifier of a [`Media`](crate::domain::Media) record.
    MediaHandle
);
