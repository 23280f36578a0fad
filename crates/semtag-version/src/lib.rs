//! An immutable semantic version value: `MAJOR.MINOR.PATCH`, with an optional pre-release and
//! optional build metadata.
//!
//! ```rust
//! use std::str::FromStr;
//! use semtag_version::Version;
//!
//! let version = Version::from_str("1.2.3-rc.1+build.5").unwrap();
//! let bumped = version.increment_minor().unwrap();
//! assert_eq!(bumped.to_string(), "1.3.0");
//! assert!(version < bumped);
//! ```
//!
//! The rules are close to [Semantic Versioning 2.0.0](https://semver.org), with a few deliberate
//! departures worth knowing about:
//!
//! * The patch number may be omitted when parsing, `1.2` is read as `1.2.0`.
//! * A bare run of digits such as `42` is read as `42.0.0`, so that build numbers used as tags
//!   are accepted. Leading zeros are tolerated in that form only.
//! * Numeric pre-release identifiers are compared by value, so `1.0.0-rc.01` and `1.0.0-rc.1`
//!   have the same precedence. Leading zeros are not rejected.
//! * Build metadata is carried and rendered, but it never affects ordering, equality or hashing:
//!   `1.0.0+a == 1.0.0+b`.
//! * Every derivation (`with_*`, `increment_*`) returns a new, re-validated value. Increments
//!   drop both labels, `1.2.3-rc.1+b7` bumped on the patch is `1.2.4`.
#![deny(missing_docs)]

pub use {
    label::{Identifier, Label},
    version::{Component, ParseError, ValidationError, Version},
};

mod label;
mod version;
