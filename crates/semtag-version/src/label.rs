use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// A validated pre-release or build metadata label, such as `rc.1` in `1.0.0-rc.1` or
/// `build.5` in `1.0.0+build.5`.
///
/// A label is a dot-separated sequence of one or more identifiers. Each identifier is non-empty
/// and made only of ASCII letters, digits and hyphens, so `rc..1`, `.rc`, `rc.` and `rc_1` are all
/// rejected.
///
/// Equality and hashing compare the label text exactly. Precedence between two pre-releases is
/// [`Label::cmp_precedence`], where `rc.01` and `rc.1` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Box<str>);

impl Label {
    /// Validate a label, returning `None` if it does not match the identifier grammar.
    pub(crate) fn parse(label: &str) -> Option<Self> {
        if is_valid(label) {
            Some(Self(Box::from(label)))
        } else {
            None
        }
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated identifiers of this label.
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        self.0.split('.').map(Identifier::new)
    }

    /// Compare two pre-release labels identifier by identifier.
    ///
    /// The first differing identifier decides. If every compared identifier is equal, the label
    /// with fewer identifiers has lower precedence, so `alpha < alpha.1 < alpha.beta`.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.identifiers().cmp(other.identifiers())
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` if every dot-separated identifier is non-empty and only contains
/// `[0-9A-Za-z-]`.
fn is_valid(label: &str) -> bool {
    label.split('.').all(|identifier| {
        !identifier.is_empty()
            && identifier
                .bytes()
                .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
    })
}

/// One dot-separated component of a [`Label`].
///
/// Ordering follows the pre-release precedence rules: two numeric identifiers compare by value,
/// a numeric identifier is always lower than an alphanumeric one, and two alphanumeric
/// identifiers compare byte-wise (so `RC < rc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// An identifier made only of digits, with leading zeros stripped: `007` is held as `7` and
    /// `000` as `0`. Not bounded by any integer width.
    Numeric(&'a str),
    /// An identifier containing at least one letter or hyphen.
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    fn new(identifier: &'a str) -> Self {
        if identifier.bytes().all(|byte| byte.is_ascii_digit()) {
            let digits = identifier.trim_start_matches('0');
            Self::Numeric(if digits.is_empty() { "0" } else { digits })
        } else {
            Self::Alphanumeric(identifier)
        }
    }

    /// Returns the identifier text, normalized for numeric identifiers.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Numeric(identifier) | Self::Alphanumeric(identifier) => identifier,
        }
    }

    /// Whether this identifier is made only of digits.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl Display for Identifier<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Without leading zeros, a longer digit string is a larger number.
            (Self::Numeric(n1), Self::Numeric(n2)) => {
                n1.len().cmp(&n2.len()).then_with(|| n1.cmp(n2))
            }
            (Self::Numeric(_), Self::Alphanumeric(_)) => Ordering::Less,
            (Self::Alphanumeric(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alphanumeric(s1), Self::Alphanumeric(s2)) => s1.cmp(s2),
        }
    }
}
