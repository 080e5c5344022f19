//! Channel-ordered Semantic Version numbers.
//!
//! ## Motivation
//!
//! Dependency bookkeeping needs one question answered: is the version we want
//! newer than the version we have? This crate answers it for version strings
//! that follow the `MAJOR.MINOR.PATCH[-PRE][+BUILD]` shape, but orders
//! pre-releases by their release channel rather than by semver identifiers.
//!
//! The differences to semver precedence include:
//!
//! - Pre-releases are ordered by their kind first: `alpha` < `beta` < `rc`.
//!   Unknown kinds (e.g. `snapshot`) come before `alpha`.
//! - The kind is compared ignoring case (`RC1` and `rc1` are equal).
//! - Whatever follows the kind is compared character by character,
//!   so `alpha.9` is higher than `alpha.10`.
//! - Pre-release identifiers may also be separated by `~`.
//!
//! The core numbers are parsed strictly: exactly three numbers, no leading zeros,
//! no surrounding whitespace.
//!
//! ## Examples
//!
//! ```rust
//! assert!(channel_semver::compare("2.0.0", "1.9.9").unwrap() > 0);
//! assert!(channel_semver::compare("1.0.0-rc", "1.0.0").unwrap() < 0);
//! assert!(channel_semver::compare("1.0.0-beta", "1.0.0-alpha").unwrap() > 0);
//!
//! // the part after the kind is compared as text
//! assert!(channel_semver::compare("1.0.0-alpha.9", "1.0.0-alpha.10").unwrap() > 0);
//!
//! // build metadata does not take part in the ordering
//! assert_eq!(channel_semver::compare("1.0.0+a", "1.0.0+b").unwrap(), 0);
//!
//! // we have rc.1 and want the final release
//! assert!(channel_semver::should_replace("1.0.0-rc.1", "1.0.0").unwrap());
//! ```
//!
//! Invalid input is reported with the offending part:
//!
//! ```rust
//! let error = channel_semver::compare("1.0", "1.0.0").unwrap_err();
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Could not parse the patch identifier: No input
//! |    1.0
//! |    ~~~
//! "
//! );
//! ```
//!
//! ## Parsing into custom types
//!
//! The parser does not allocate and can fill any type that implements [`VersionBuilder`].
//!
//! ```rust
//! use channel_semver::VersionBuilder;
//!
//! /// Only checks for a pre-release label
//! #[derive(Debug, Default)]
//! struct IsPreRelease(bool);
//!
//! impl VersionBuilder<'_> for IsPreRelease {
//!     type Out = bool;
//!
//!     fn new() -> Self {
//!         Self::default()
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self.0
//!     }
//!
//!     fn set_pre_release(&mut self, _pre_release: &str) {
//!         self.0 = true;
//!     }
//! }
//!
//! fn is_pre_release(v: &str) -> bool {
//!     channel_semver::parse_into::<IsPreRelease>(v).unwrap_or_default()
//! }
//!
//! assert!(is_pre_release("1.2.3-pre"));
//! assert!(!is_pre_release("1.2.3"));
//! assert!(!is_pre_release("1.2.3+build"));
//! ```
//!
//! ## Features
//!
//! - `semver` (default): convert a [`Version`] into a `semver::Version`
//! - `serde`: serialize and deserialize [`Version`] as a string, borrowing from the input
//!
//! ## Logging
//!
//! Comparisons and replacement decisions are reported as [`tracing`] events
//! at the `trace` and `debug` level. No subscriber is installed by this crate.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{cmp::Ordering, fmt::Display};
use tracing::{debug, trace};

pub use channel_semver_parser::{
    validate, Error as ParseError, ErrorKind, OwnedError as OwnedParseError, VersionBuilder,
};
pub use channel_version::{
    compare as compare_versions, compare_pre_release, precedence, PreRelease, PreReleaseError,
    Version, NOT_FOUND, PRE_RELEASE_PRECEDENCE,
};

/// Parse a string slice into a [`Version`].
///
/// ## Examples
///
/// ```rust
/// use channel_semver::Version;
///
/// let version = channel_semver::parse("1.2.3-rc~1+build.5").unwrap();
/// assert_eq!(version.pre, Some("rc~1"));
/// assert_eq!(version.build, Some("build.5"));
///
/// assert!(channel_semver::parse("1.2").is_err());
/// assert!(channel_semver::parse("1.2.3.4").is_err());
/// assert!(channel_semver::parse("01.2.3").is_err());
/// ```
pub fn parse(input: &str) -> Result<Version<'_>, ParseError<'_>> {
    parse_into::<Version<'_>>(input)
}

/// Parse a string slice into any type that implements [`VersionBuilder`].
///
/// ## Examples
///
/// ```rust
/// use channel_semver::Version;
///
/// let version = channel_semver::parse_into::<Version>("1.2.3");
/// assert_eq!(version, Ok(Version::new(1, 2, 3)));
/// ```
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, ParseError<'input>>
where
    V: VersionBuilder<'input>,
{
    channel_semver_parser::parse::<V>(input).map_err(|error| {
        debug!(input, error = %error, "invalid version");
        error
    })
}

/// Compares two version strings by precedence.
///
/// The result is positive if `a` is higher, negative if `b` is higher,
/// and zero if both have the same precedence. Only the sign is meaningful.
///
/// ## Examples
///
/// ```rust
/// assert!(channel_semver::compare("1.0.0", "1.0.0-alpha").unwrap() > 0);
/// assert!(channel_semver::compare("1.0.0-alpha", "1.0.0-beta").unwrap() < 0);
/// assert!(channel_semver::compare("1.0.0-rc", "1.0.0-rc1").unwrap() < 0);
/// assert_eq!(channel_semver::compare("1.2.3", "1.2.3").unwrap(), 0);
/// ```
///
/// ## Errors
///
/// Fails with [`Error::InvalidVersionFormat`] if either string is not a valid version,
/// reporting `a` before `b`.
/// Fails with [`Error::InvalidPrereleaseFormat`] if both versions have the same core
/// and a pre-release label, and one of the labels does not contain any letter.
///
/// ```rust
/// use channel_semver::Error;
///
/// let error = channel_semver::compare("1.0.0-1", "1.0.0-alpha").unwrap_err();
/// assert!(matches!(error, Error::InvalidPrereleaseFormat(_)));
/// assert_eq!(error.to_string(), "Could not find a pre-release type in `1`");
/// ```
pub fn compare<'input>(a: &'input str, b: &'input str) -> Result<i64, Error<'input>> {
    let left = parse(a)?;
    let right = parse(b)?;
    let result = compare_versions(&left, &right).map_err(|error| {
        debug!(a, b, error = %error, "incomparable pre-release");
        error
    })?;
    trace!(a, b, result, "compared versions");
    Ok(result)
}

/// Compares two version strings by precedence and returns an [`Ordering`].
///
/// ## Examples
///
/// ```rust
/// use std::cmp::Ordering;
///
/// assert_eq!(channel_semver::compare_ordering("1.0.0-beta", "1.0.0-rc"), Ok(Ordering::Less));
/// assert_eq!(channel_semver::compare_ordering("1.0.0+a", "1.0.0+b"), Ok(Ordering::Equal));
/// ```
///
/// ## Errors
///
/// See [`compare`].
pub fn compare_ordering<'input>(
    a: &'input str,
    b: &'input str,
) -> Result<Ordering, Error<'input>> {
    compare(a, b).map(|result| result.cmp(&0))
}

/// Returns true if the `current` version should be replaced by the `wanted` one,
/// that is if `wanted` has a higher precedence.
///
/// ## Examples
///
/// ```rust
/// assert!(channel_semver::should_replace("1.0.0-beta", "1.0.0-rc").unwrap());
/// assert!(!channel_semver::should_replace("1.0.0", "1.0.0-rc").unwrap());
/// assert!(!channel_semver::should_replace("1.0.0+a", "1.0.0+b").unwrap());
/// ```
///
/// ## Errors
///
/// See [`compare`].
pub fn should_replace<'input>(
    current: &'input str,
    wanted: &'input str,
) -> Result<bool, Error<'input>> {
    let replace = compare(current, wanted)? < 0;
    debug!(current, wanted, replace, "replacement decision");
    Ok(replace)
}

/// Possible errors that happen during comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<'input> {
    /// One of the inputs is not a valid version.
    InvalidVersionFormat(ParseError<'input>),
    /// A pre-release label has no kind to compare.
    InvalidPrereleaseFormat(PreReleaseError<'input>),
}

impl<'input> Error<'input> {
    /// Returns an owned version of this error, which does not borrow from the input.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use channel_semver::OwnedError;
    /// fn compare_owned(a: String, b: String) -> Result<i64, OwnedError> {
    ///     channel_semver::compare(&a, &b).map_err(|e| e.owned())
    /// }
    ///
    /// let error = compare_owned(String::from("1.0.0-1"), String::from("1.0.0-2")).unwrap_err();
    /// assert_eq!(error.to_string(), "Could not find a pre-release type in `1`");
    /// ```
    pub fn owned(&self) -> OwnedError {
        match self {
            Error::InvalidVersionFormat(error) => OwnedError::InvalidVersionFormat(error.owned()),
            Error::InvalidPrereleaseFormat(error) => OwnedError::InvalidPrereleaseFormat {
                label: error.label().to_string(),
            },
        }
    }
}

impl<'input> From<ParseError<'input>> for Error<'input> {
    fn from(error: ParseError<'input>) -> Self {
        Error::InvalidVersionFormat(error)
    }
}

impl<'input> From<PreReleaseError<'input>> for Error<'input> {
    fn from(error: PreReleaseError<'input>) -> Self {
        Error::InvalidPrereleaseFormat(error)
    }
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidVersionFormat(error) => Display::fmt(error, f),
            Error::InvalidPrereleaseFormat(error) => Display::fmt(error, f),
        }
    }
}

impl std::error::Error for Error<'_> {}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedError {
    /// One of the inputs is not a valid version.
    InvalidVersionFormat(OwnedParseError),
    /// A pre-release label has no kind to compare.
    InvalidPrereleaseFormat {
        /// The label without a kind.
        label: String,
    },
}

impl OwnedError {
    /// Returns the error kind if this is a parse error.
    pub fn parse_error_kind(&self) -> Option<ErrorKind> {
        match self {
            OwnedError::InvalidVersionFormat(error) => Some(error.error_kind()),
            OwnedError::InvalidPrereleaseFormat { .. } => None,
        }
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnedError::InvalidVersionFormat(error) => Display::fmt(error, f),
            OwnedError::InvalidPrereleaseFormat { label } => {
                write!(f, "Could not find a pre-release type in `{}`", label)
            }
        }
    }
}

impl std::error::Error for OwnedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OwnedError::InvalidVersionFormat(error) => Some(error),
            OwnedError::InvalidPrereleaseFormat { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
