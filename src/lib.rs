//! A parser library for [Conventional Commit] messages.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! # Example
//!
//! ```rust
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     fix(parser)!: handle multi-line footers
//!
//!     Continuation lines extend the previous footer value instead of
//!     being discarded.
//!
//!     BREAKING CHANGE: footer values may now contain newlines
//!     Reviewed-by: Lisa Simpson <lisa@simpsons.fam>
//!     Closes #12
//! ");
//!
//! let commit = conventional_message::Commit::parse(message).unwrap();
//!
//! // You can access all components of the header.
//! assert_eq!(commit.type_(), conventional_message::FIX);
//! assert_eq!(commit.scope().unwrap(), "parser");
//! assert_eq!(commit.title(), "handle multi-line footers");
//!
//! // And the free-form commit body.
//! assert!(commit.body().unwrap().contains("extend the previous"));
//!
//! // If a commit is marked with a bang (`!`) OR has a footer with the key
//! // "BREAKING CHANGE", it is considered a "breaking" commit.
//! assert!(commit.breaking());
//!
//! // Footers are an ordered map from normalized token to the values seen
//! // for it; `Closes #12` uses the ` #` separator and aliases to `Closes`.
//! let footer = commit.footer();
//! assert_eq!(footer.len(), 3);
//! assert_eq!(
//!     footer["BREAKING CHANGE"],
//!     vec!["footer values may now contain newlines"]
//! );
//! assert_eq!(footer["Reviewed-by"], vec!["Lisa Simpson <lisa@simpsons.fam>"]);
//! assert_eq!(footer["Closes"], vec!["12"]);
//! ```

#![warn(missing_docs)]

mod commit;
mod error;
mod lines;
mod parser;

pub use commit::{Commit, FooterToken, Scope, Type};
pub use error::{Error, ErrorKind};

/// Commit type when introducing new features (correlates with `minor` in semver)
pub const FEAT: Type<'static> = Type::new_unchecked("feat");
/// Commit type when patching a bug (correlates with `patch` in semver)
pub const FIX: Type<'static> = Type::new_unchecked("fix");
/// Possible commit type when reverting changes.
pub const REVERT: Type<'static> = Type::new_unchecked("revert");
/// Possible commit type for changing documentation.
pub const DOCS: Type<'static> = Type::new_unchecked("docs");
/// Possible commit type for changing code style.
pub const STYLE: Type<'static> = Type::new_unchecked("style");
/// Possible commit type for refactoring code structure.
pub const REFACTOR: Type<'static> = Type::new_unchecked("refactor");
/// Possible commit type for performance optimizations.
pub const PERF: Type<'static> = Type::new_unchecked("perf");
/// Possible commit type for addressing tests.
pub const TEST: Type<'static> = Type::new_unchecked("test");
/// Possible commit type for other things.
pub const CHORE: Type<'static> = Type::new_unchecked("chore");
