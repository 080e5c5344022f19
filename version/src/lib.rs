//! Channel-ordered semantic version.
//!
//! Companion version struct for the channel_semver_parser parser,
//! together with the precedence rules between two versions.
//!
//! Compared to [`semver::Version`](https://docs.rs/semver), this version:
//!  - Does not allocate Strings for metadata
//!  - Orders pre-releases by channel (`alpha` < `beta` < `rc`) and then
//!    character by character, instead of by dot-separated identifiers
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

use std::{
    cmp::Ordering,
    fmt::{self, Display, Write},
};

mod compare;
mod pre_release;
pub use compare::{compare, compare_pre_release};
pub use pre_release::{
    precedence, PreRelease, PreReleaseError, NOT_FOUND, PRE_RELEASE_PRECEDENCE,
};

/// Represents a semantic version number.
///
/// The version is bound to the lifetime of the input string.
///
/// # Correctness Warning
///
/// This version implements [`PartialEq`] and [`Hash`](std::hash::Hash) by deriving them,
/// which compares all components including the build metadata.
/// It does not implement [`PartialOrd`], use [`compare`] or
/// [`Version::cmp_precedence`] to order versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version<'input> {
    /// The major version.
    pub major: u64,
    /// The minor version.
    pub minor: u64,
    /// The patch version.
    pub patch: u64,
    /// The pre-release label.
    pub pre: Option<&'input str>,
    /// The build metadata.
    pub build: Option<&'input str>,
}

impl<'input> Version<'input> {
    /// Constructs a new, empty version
    ///
    /// ## Examples
    ///
    /// ```
    /// # use channel_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub const fn empty() -> Self {
        Version::new(0, 0, 0)
    }

    /// Constructs a new version out of the three regular version components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use channel_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
            build: None,
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// For the accepted grammar, see [`channel_semver_parser`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use channel_version::Version;
    ///
    /// let version = Version::parse("1.2.3-rc.1+build.42").unwrap();
    /// assert_eq!(version.pre, Some("rc.1"));
    /// assert_eq!(version.build, Some("build.42"));
    ///
    /// assert!(Version::parse("1.2").is_err());
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse(input: &'input str) -> Result<Self, channel_semver_parser::Error<'input>> {
        channel_semver_parser::parse::<Self>(input)
    }

    /// Returns a copy of this version with the given pre-release label.
    ///
    /// The label is not validated.
    pub fn with_pre_release(self, pre: &'input str) -> Self {
        Version {
            pre: Some(pre),
            ..self
        }
    }

    /// Returns a copy of this version with the given build metadata.
    ///
    /// The metadata is not validated.
    pub fn with_build(self, build: &'input str) -> Self {
        Version {
            build: Some(build),
            ..self
        }
    }

    /// Returns true if this version has a pre-release label.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use channel_version::Version;
    ///
    /// let version = Version::parse("1.0.0").unwrap();
    /// assert!(!version.is_pre_release());
    ///
    /// let version = Version::parse("1.0.0-pre").unwrap();
    /// assert!(version.is_pre_release());
    ///
    /// let version = Version::parse("1.0.0+build").unwrap();
    /// assert!(!version.is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        self.pre.is_some()
    }

    /// Splits the pre-release label into kind and tail, if there is a label.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use channel_version::Version;
    ///
    /// let version = Version::parse("1.0.0-beta.2").unwrap();
    /// let pre = version.pre_release().unwrap().unwrap();
    /// assert_eq!((pre.kind(), pre.tail()), ("beta", "2"));
    ///
    /// assert!(Version::parse("1.0.0").unwrap().pre_release().is_none());
    /// assert!(Version::parse("1.0.0-42").unwrap().pre_release().unwrap().is_err());
    /// ```
    pub fn pre_release(&self) -> Option<Result<PreRelease<'input>, PreReleaseError<'input>>> {
        self.pre.map(PreRelease::parse)
    }

    /// Compares this version to another one by precedence.
    ///
    /// This is the sign of [`compare`] as an [`Ordering`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use channel_version::Version;
    /// use std::cmp::Ordering;
    ///
    /// let rc = Version::parse("1.0.0-rc").unwrap();
    /// let release = Version::parse("1.0.0").unwrap();
    /// assert_eq!(rc.cmp_precedence(&release), Ok(Ordering::Less));
    /// ```
    pub fn cmp_precedence(&self, other: &Self) -> Result<Ordering, PreReleaseError<'input>> {
        compare(self, other).map(|diff| diff.cmp(&0))
    }
}

impl Default for Version<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'input> From<(u64, u64, u64)> for Version<'input> {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl<'input> From<[u64; 3]> for Version<'input> {
    fn from(v: [u64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

#[cfg(feature = "parser")]
impl<'input> std::convert::TryFrom<&'input str> for Version<'input> {
    type Error = channel_semver_parser::Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(pre) = self.pre {
            result.push('-');
            result.push_str(pre);
        }
        if let Some(build) = self.build {
            result.push('+');
            result.push_str(build);
        }

        f.pad(result.as_ref())
    }
}

#[cfg(feature = "parser")]
impl<'input> channel_semver_parser::VersionBuilder<'input> for Version<'input> {
    type Out = Self;

    fn new() -> Self {
        Version::default()
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn set_pre_release(&mut self, pre_release: &'input str) {
        self.pre = Some(pre_release);
    }

    fn set_build(&mut self, build: &'input str) {
        self.build = Some(build);
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for Version<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
impl<'de: 'input, 'input> Deserialize<'de> for Version<'input> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor<'input>(std::marker::PhantomData<&'input ()>);

        impl<'de: 'input, 'input> Visitor<'de> for VersionVisitor<'input> {
            type Value = Version<'input>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_borrowed_str<E>(self, v: &'input str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor(std::marker::PhantomData))
    }
}

#[cfg(feature = "semver")]
impl std::convert::TryFrom<&Version<'_>> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &Version<'_>) -> Result<Self, Self::Error> {
        let mut version = semver::Version::new(v.major, v.minor, v.patch);
        if let Some(pre) = v.pre {
            version.pre = semver::Prerelease::new(pre)?;
        }
        if let Some(build) = v.build {
            version.build = semver::BuildMetadata::new(build)?;
        }
        Ok(version)
    }
}
