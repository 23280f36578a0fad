#[cfg(feature = "schemars")]
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::Label;

/// Matches `MAJOR.MINOR[.PATCH][-PRERELEASE][+BUILD]`.
///
/// The label classes are looser than the label grammar (they allow empty identifiers such as
/// `a..b`) so that a malformed label is reported as a validation error rather than as an
/// unrecognized version.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<major>0|[1-9][0-9]*)
        \.
        (?P<minor>0|[1-9][0-9]*)
        (?:\.(?P<patch>0|[1-9][0-9]*))?    # patch defaults to 0
        (?:-(?P<pre>[0-9A-Za-z.-]+))?
        (?:\+(?P<build>[0-9A-Za-z.-]+))?
        $
        ",
    )
    .unwrap()
});

/// One of the three numeric fields of a [`Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Component {
    /// `X` in `X.Y.Z`
    Major,
    /// `Y` in `X.Y.Z`
    Minor,
    /// `Z` in `X.Y.Z`
    Patch,
}

impl FromStr for Component {
    type Err = String;

    fn from_str(component: &str) -> Result<Self, Self::Err> {
        match component.to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(format!(
                "'{component}' isn't a version component, expected one of major, minor or patch"
            )),
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => f.write_str("major"),
            Self::Minor => f.write_str("minor"),
            Self::Patch => f.write_str("patch"),
        }
    }
}

/// A candidate version broke one of the [`Version`] invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A major, minor or patch number below zero.
    #[error("Version numbers must be non-negative, but the {component} version is {value}")]
    NegativeField {
        /// The offending field.
        component: Component,
        /// The rejected number.
        value: i64,
    },
    /// A pre-release that isn't a dot-separated list of `[0-9A-Za-z-]+` identifiers.
    #[error(
        "Invalid pre-release `{0}`: expected dot-separated identifiers made of ASCII letters, digits and hyphens"
    )]
    MalformedPreRelease(String),
    /// Build metadata that isn't a dot-separated list of `[0-9A-Za-z-]+` identifiers.
    #[error(
        "Invalid build metadata `{0}`: expected dot-separated identifiers made of ASCII letters, digits and hyphens"
    )]
    MalformedBuildMetadata(String),
    /// An increment of a field that is already `u64::MAX`.
    #[error("Can't increment the {component} version past {value}")]
    Overflow {
        /// The field being incremented.
        component: Component,
        /// The current value of the field.
        value: u64,
    },
}

/// A string could not be parsed into a [`Version`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Neither `MAJOR.MINOR[.PATCH][-PRERELEASE][+BUILD]` nor a bare number.
    #[error("Invalid version format: `{0}`")]
    InvalidFormat(String),
    /// A numeric field with more digits than a `u64` can hold.
    #[error("The {component} version in `{text}` doesn't fit in a 64-bit integer")]
    NumberTooLarge {
        /// The full input.
        text: String,
        /// The field that overflowed.
        component: Component,
    },
    /// The input has the right shape, but one of its labels is malformed, e.g. `1.0.0-rc..1`.
    #[error("Version `{text}` is not valid")]
    Invalid {
        /// The full input.
        text: String,
        /// Why the parsed fields were rejected.
        #[source]
        source: ValidationError,
    },
}

/// A version such as `1.2.3`, `1.0.0-rc.1` or `2.0.0-beta+exp.sha.5114f85`.
///
/// A `Version` is immutable and always valid: every constructor and every derivation runs the
/// same validation and either returns a complete value or an error. Derivations return a new
/// value and leave the receiver untouched.
///
/// Ordering is version precedence. Build metadata takes no part in it, which is also true of
/// [`PartialEq`] and [`Hash`]: `1.0.0+a == 1.0.0+b`. Use the accessors to compare the fields
/// themselves.
///
/// ```rust
/// use std::str::FromStr;
/// use semtag_version::Version;
///
/// let version = Version::from_str("1.0.0-rc.1").unwrap();
/// assert!(version < Version::new(1, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Label>,
    build_metadata: Option<Label>,
}

impl Version {
    /// Create a release version such as `1.2.3`, without labels.
    pub fn new(major: i64, minor: i64, patch: i64) -> Result<Self, ValidationError> {
        Self::from_parts(major, minor, patch, None, None)
    }

    /// Create a version from all of its fields.
    ///
    /// Fails if a number is negative or if a label doesn't match the identifier grammar. Numbers
    /// are checked before labels, and major before minor before patch.
    pub fn from_parts(
        major: i64,
        minor: i64,
        patch: i64,
        pre_release: Option<&str>,
        build_metadata: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::validated(
            non_negative(Component::Major, major)?,
            non_negative(Component::Minor, minor)?,
            non_negative(Component::Patch, patch)?,
            pre_release,
            build_metadata,
        )
    }

    /// The single place where a `Version` is assembled, checking both labels.
    fn validated(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build_metadata: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let pre_release = pre_release
            .map(|label| {
                Label::parse(label)
                    .ok_or_else(|| ValidationError::MalformedPreRelease(label.to_string()))
            })
            .transpose()?;
        let build_metadata = build_metadata
            .map(|label| {
                Label::parse(label)
                    .ok_or_else(|| ValidationError::MalformedBuildMetadata(label.to_string()))
            })
            .transpose()?;
        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        })
    }

    /// The major version, `X` in `X.Y.Z`.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version, `Y` in `X.Y.Z`.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version, `Z` in `X.Y.Z`.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The numeric triple `(major, minor, patch)`.
    pub fn release(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// The pre-release label, such as `rc.1` in `1.0.0-rc.1`.
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// The build metadata label, such as `build.5` in `1.0.0+build.5`.
    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// The pre-release as a parsed [`Label`].
    pub fn pre_release_label(&self) -> Option<&Label> {
        self.pre_release.as_ref()
    }

    /// The build metadata as a parsed [`Label`].
    pub fn build_metadata_label(&self) -> Option<&Label> {
        self.build_metadata.as_ref()
    }

    /// Whether this is a stable release, i.e. there is no pre-release. Build metadata doesn't
    /// matter.
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_none()
    }
}

impl Version {
    /// Returns a copy with the major version replaced; labels are kept.
    pub fn with_major(&self, major: i64) -> Result<Self, ValidationError> {
        Self::validated(
            non_negative(Component::Major, major)?,
            self.minor,
            self.patch,
            self.pre_release(),
            self.build_metadata(),
        )
    }

    /// Returns a copy with the minor version replaced; labels are kept.
    pub fn with_minor(&self, minor: i64) -> Result<Self, ValidationError> {
        Self::validated(
            self.major,
            non_negative(Component::Minor, minor)?,
            self.patch,
            self.pre_release(),
            self.build_metadata(),
        )
    }

    /// Returns a copy with the patch version replaced; labels are kept.
    pub fn with_patch(&self, patch: i64) -> Result<Self, ValidationError> {
        Self::validated(
            self.major,
            self.minor,
            non_negative(Component::Patch, patch)?,
            self.pre_release(),
            self.build_metadata(),
        )
    }

    /// Returns a copy with the pre-release replaced, or removed if `None`.
    pub fn with_pre_release(&self, pre_release: Option<&str>) -> Result<Self, ValidationError> {
        Self::validated(
            self.major,
            self.minor,
            self.patch,
            pre_release,
            self.build_metadata(),
        )
    }

    /// Returns a copy with the build metadata replaced, or removed if `None`.
    pub fn with_build_metadata(
        &self,
        build_metadata: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::validated(
            self.major,
            self.minor,
            self.patch,
            self.pre_release(),
            build_metadata,
        )
    }

    /// `X.Y.Z` to `(X+1).0.0`. Both labels are dropped.
    pub fn increment_major(&self) -> Result<Self, ValidationError> {
        Self::validated(increment(Component::Major, self.major)?, 0, 0, None, None)
    }

    /// `X.Y.Z` to `X.(Y+1).0`. Both labels are dropped.
    pub fn increment_minor(&self) -> Result<Self, ValidationError> {
        Self::validated(
            self.major,
            increment(Component::Minor, self.minor)?,
            0,
            None,
            None,
        )
    }

    /// `X.Y.Z` to `X.Y.(Z+1)`. Both labels are dropped.
    pub fn increment_patch(&self) -> Result<Self, ValidationError> {
        Self::validated(
            self.major,
            self.minor,
            increment(Component::Patch, self.patch)?,
            None,
            None,
        )
    }

    /// Increment the given component, see [`Version::increment_major`],
    /// [`Version::increment_minor`] and [`Version::increment_patch`].
    pub fn bump(&self, component: Component) -> Result<Self, ValidationError> {
        match component {
            Component::Major => self.increment_major(),
            Component::Minor => self.increment_minor(),
            Component::Patch => self.increment_patch(),
        }
    }
}

fn non_negative(component: Component, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeField { component, value })
}

fn increment(component: Component, value: u64) -> Result<u64, ValidationError> {
    value
        .checked_add(1)
        .ok_or(ValidationError::Overflow { component, value })
}

impl Default for Version {
    /// `1.0.0`
    fn default() -> Self {
        Self {
            major: 1,
            minor: 0,
            patch: 0,
            pre_release: None,
            build_metadata: None,
        }
    }
}

/// Renders `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{pre_release}")?;
        }
        if let Some(build_metadata) = &self.build_metadata {
            write!(f, "+{build_metadata}")?;
        }
        Ok(())
    }
}

/// A release without a pre-release outranks any pre-release of the same numeric triple.
fn compare_pre_release(this: Option<&Label>, other: Option<&Label>) -> Ordering {
    match (this, other) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(this), Some(other)) => this.cmp_precedence(other),
    }
}

impl PartialEq<Self> for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    /// Custom implementation ignoring build metadata and the leading zeros of numeric
    /// pre-release identifiers, because `PartialEq` ignores them too
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.is_stable().hash(state);
        if let Some(pre_release) = &self.pre_release {
            for identifier in pre_release.identifiers() {
                identifier.hash(state);
            }
        }
    }
}

impl PartialOrd<Self> for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// 1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta < 1.0.0-beta.2
    /// < 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0 < 1.0.1 < 1.1.0 < 2.0.0
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| {
                compare_pre_release(self.pre_release.as_ref(), other.pre_release.as_ref())
            })
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Parses `MAJOR.MINOR[.PATCH][-PRERELEASE][+BUILD]`, such as `1.2`, `1.2.3-rc.1` or
    /// `1.2.3+build.5`, or a bare number such as `42` as `42.0.0`.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let Some(captures) = VERSION_RE.captures(version) else {
            return Self::from_bare_number(version);
        };

        let number = |name: &str, component: Component| -> Result<u64, ParseError> {
            captures
                .name(name)
                .map_or(Ok(0), |digits| parse_number(version, digits.as_str(), component))
        };
        let major = number("major", Component::Major)?;
        let minor = number("minor", Component::Minor)?;
        let patch = number("patch", Component::Patch)?;
        let pre_release = captures.name("pre").map(|pre| pre.as_str());
        let build_metadata = captures.name("build").map(|build| build.as_str());

        Self::validated(major, minor, patch, pre_release, build_metadata).map_err(|source| {
            #[cfg(feature = "tracing")]
            {
                debug!("Rejecting version `{version}`: {source}");
            }
            ParseError::Invalid {
                text: version.to_string(),
                source,
            }
        })
    }
}

impl Version {
    /// Accept a bare run of digits, such as a build number used as a tag, as a major version.
    fn from_bare_number(version: &str) -> Result<Self, ParseError> {
        if version.is_empty() || !version.bytes().all(|byte| byte.is_ascii_digit()) {
            #[cfg(feature = "tracing")]
            {
                debug!("Rejecting version `{version}`: not `MAJOR.MINOR[.PATCH]` or a bare number");
            }
            return Err(ParseError::InvalidFormat(version.to_string()));
        }

        let major = parse_number(version, version, Component::Major)?;
        #[cfg(feature = "tracing")]
        {
            debug!("Interpreting bare number `{version}` as version {major}.0.0");
        }
        Self::validated(major, 0, 0, None, None).map_err(|source| ParseError::Invalid {
            text: version.to_string(),
            source,
        })
    }
}

/// The regex only lets ASCII digits through, so the only possible failure is overflow.
fn parse_number(text: &str, digits: &str, component: Component) -> Result<u64, ParseError> {
    digits
        .parse::<u64>()
        .map_err(|_| ParseError::NumberTooLarge {
            text: text.to_string(),
            component,
        })
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Version {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Version")
    }

    fn json_schema(_gen: &mut schemars::generate::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "description": "A version such as `1.2.3`, `1.2.3-rc.1` or `1.2.3+build.5`"
        })
    }
}
