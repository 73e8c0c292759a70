//! The parsed commit message and its typed components.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use indexmap::IndexMap;
use winnow::Parser;

use crate::parser;
use crate::{Error, ErrorKind};

/// Canonical footer token for breaking-change entries.
const BREAKING_PHRASE: &str = "BREAKING CHANGE";
/// Canonical footer token for issue-closing entries.
const CLOSES: &str = "Closes";
/// Tokens that alias to [`CLOSES`], compared case-insensitively.
const CLOSES_ALIASES: [&str; 4] = ["fix", "fixes", "close", "closes"];

/// A parsed commit message.
///
/// All components borrow from the input string. A `Commit` is built in one
/// step by [`Commit::parse`] and never mutated afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Commit<'a> {
    ty: Type<'a>,
    scope: Option<Scope<'a>>,
    title: &'a str,
    body: Option<&'a str>,
    breaking: bool,
    footer: IndexMap<FooterToken<'a>, Vec<&'a str>>,
}

impl<'a> Commit<'a> {
    /// Parse a commit message into its structured representation.
    ///
    /// The header line must match `type(scope)!: subject`, with scope and
    /// `!` optional. Everything after it is split into a free-text body and
    /// a footer block; see [`Commit::footer`] for how footer lines are
    /// folded into the map.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::EmptyMessage`] on blank input and
    /// [`ErrorKind::MalformedHeader`] when the first line does not match
    /// the header form. Nothing else fails: the commit type is not checked
    /// against any vocabulary, and footer lines that match no pattern are
    /// consumed as continuations of the previous footer value.
    pub fn parse(message: &'a str) -> Result<Self, Error> {
        let parsed = parser::message(message)?;

        let mut footer: IndexMap<FooterToken<'a>, Vec<&'a str>> = IndexMap::new();
        for (token, value) in parsed.footers {
            footer
                .entry(FooterToken::new_unchecked(normalize(token)))
                .or_default()
                .push(value);
        }

        let breaking = parsed.bang
            || footer
                .get(BREAKING_PHRASE)
                .is_some_and(|values| !values.is_empty());

        Ok(Self {
            ty: Type::new_unchecked(parsed.ty),
            scope: parsed.scope.map(Scope::new_unchecked),
            title: parsed.title,
            body: (!parsed.body.is_empty()).then_some(parsed.body),
            breaking,
            footer,
        })
    }

    /// The type of the commit.
    ///
    /// Any word-character run is accepted; comparing against the well-known
    /// constants ([`crate::FEAT`], [`crate::FIX`], …) is case-insensitive.
    pub fn type_(&self) -> Type<'a> {
        self.ty
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<Scope<'a>> {
        self.scope
    }

    /// The header subject: everything after the `": "` separator.
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// The free text between the header and the footer block, trimmed of
    /// surrounding blank lines. `None` when the message has no body.
    pub fn body(&self) -> Option<&'a str> {
        self.body
    }

    /// A flag to signal that the commit contains breaking changes.
    ///
    /// This flag is set either when the commit has an exclamation mark
    /// after the message type and scope, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// Or when a `BREAKING CHANGE` (or `BREAKING-CHANGE`) footer is
    /// defined:
    /// ```text
    /// feat: my commit title
    ///
    /// BREAKING CHANGE: this is a breaking change
    /// ```
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// The footer block as an ordered map from token to values.
    ///
    /// Tokens are normalized case-insensitively before insertion:
    /// `BREAKING-CHANGE` becomes `BREAKING CHANGE`, and `fix`, `fixes`,
    /// `close` and `closes` become `Closes`. A repeated token appends to
    /// its value list in encounter order. Unrecognized tokens keep their
    /// original casing, and casings that differ are distinct keys.
    ///
    /// A footer line not matching `token: value` or `token #value` extends
    /// the previous value across its `\n`, so values may span several
    /// source lines. Values never contain the separator that introduced
    /// them.
    pub fn footer(&self) -> &IndexMap<FooterToken<'a>, Vec<&'a str>> {
        &self.footer
    }
}

/// Renders the commit in canonical form: normalized footer tokens, `": "`
/// separators, and no breaking `!` marker. Not a byte-level inverse of
/// [`Commit::parse`].
impl fmt::Display for Commit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.as_str())?;

        if let Some(scope) = &self.scope {
            write!(f, "({scope})")?;
        }

        write!(f, ": {}", self.title)?;

        if let Some(body) = self.body {
            write!(f, "\n\n{body}")?;
        }

        for (token, values) in &self.footer {
            for value in values {
                write!(f, "\n\n{token}: {value}")?;
            }
        }

        Ok(())
    }
}

/// Case-insensitive aliasing of footer tokens to their canonical names.
///
/// `BREAKING CHANGE` itself only ever parses in its canonical spelling (a
/// token run cannot contain a space), so it needs no alias entry.
fn normalize(token: &str) -> &str {
    if unicase::eq(token, "breaking-change") {
        BREAKING_PHRASE
    } else if CLOSES_ALIASES.iter().any(|alias| unicase::eq(token, *alias)) {
        CLOSES
    } else {
        token
    }
}

macro_rules! unicase_components {
    ($($ty:ident),+) => (
        $(
            /// A component of the commit header.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty<'a>(unicase::UniCase<&'a str>);

            impl<'a> $ty<'a> {
                /// See [`Commit::parse`] for ensuring the data is valid.
                pub const fn new_unchecked(value: &'a str) -> Self {
                    $ty(unicase::UniCase::unicode(value))
                }

                /// Access `str` representation
                pub fn as_str(&self) -> &'a str {
                    self.0.into_inner()
                }
            }

            impl Deref for $ty<'_> {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.as_str()
                }
            }

            impl PartialEq<&'_ str> for $ty<'_> {
                fn eq(&self, other: &&str) -> bool {
                    *self == $ty::new_unchecked(*other)
                }
            }

            impl fmt::Display for $ty<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty<'_> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self)
                }
            }
        )+
    )
}

unicase_components![Type, Scope];

impl<'a> Type<'a> {
    /// Parse a `str` into a `Type`.
    pub fn parse(s: &'a str) -> Result<Self, Error> {
        parser::type_
            .parse(s)
            .map(Self::new_unchecked)
            .map_err(|_| Error::new(ErrorKind::MalformedHeader))
    }
}

impl<'a> Scope<'a> {
    /// Parse a `str` into a `Scope`.
    pub fn parse(s: &'a str) -> Result<Self, Error> {
        parser::scope
            .parse(s)
            .map(Self::new_unchecked)
            .map_err(|_| Error::new(ErrorKind::MalformedHeader))
    }
}

/// A footer token, as it appears as a key of [`Commit::footer`].
///
/// Tokens are stored after normalization and compare case-sensitively:
/// aliased tokens are already canonical (`Closes`, `BREAKING CHANGE`), and
/// unrecognized tokens keep the casing they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FooterToken<'a>(&'a str);

impl<'a> FooterToken<'a> {
    pub(crate) const fn new_unchecked(value: &'a str) -> Self {
        Self(value)
    }

    /// Access `str` representation
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self.0 == BREAKING_PHRASE
    }
}

impl Deref for FooterToken<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

// Lets `&str` stand in for a key in map lookups: `footer["Closes"]`.
impl Borrow<str> for FooterToken<'_> {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl PartialEq<&'_ str> for FooterToken<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FooterToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FooterToken<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0)
    }
}
