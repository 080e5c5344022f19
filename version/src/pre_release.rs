use std::fmt::{self, Display};

/// Pre-release kinds, ordered from lowest to highest precedence.
///
/// Lookups into this table ignore ASCII case.
pub const PRE_RELEASE_PRECEDENCE: [&str; 4] = ["alpha", "beta", "rc", ""];

/// Precedence of a kind that is not listed in [`PRE_RELEASE_PRECEDENCE`].
///
/// Unknown kinds are not an error, they order below every listed kind.
pub const NOT_FOUND: i64 = -1;

/// Returns the position of a pre-release kind in [`PRE_RELEASE_PRECEDENCE`].
///
/// ## Examples
///
/// ```rust
/// use channel_version::{precedence, NOT_FOUND};
///
/// assert_eq!(precedence("alpha"), 0);
/// assert_eq!(precedence("Beta"), 1);
/// assert_eq!(precedence("RC"), 2);
/// assert_eq!(precedence("snapshot"), NOT_FOUND);
/// ```
pub fn precedence(kind: &str) -> i64 {
    PRE_RELEASE_PRECEDENCE
        .iter()
        .position(|known| known.eq_ignore_ascii_case(kind))
        .map_or(NOT_FOUND, |index| index as i64)
}

/// A pre-release label, split into its kind and the tail that follows it.
///
/// The kind is the first run of ASCII letters in the label, wherever it starts.
/// The tail is everything after the kind, with at most one leading
/// separator (`-`, `~`, `+`, or `.`) removed.
///
/// ## Examples
///
/// ```rust
/// # use channel_version::PreRelease;
/// let pre = PreRelease::parse("rc.10").unwrap();
/// assert_eq!(pre.kind(), "rc");
/// assert_eq!(pre.tail(), "10");
///
/// // the scan for the kind is not anchored at the start
/// let pre = PreRelease::parse("20beta~3").unwrap();
/// assert_eq!(pre.kind(), "beta");
/// assert_eq!(pre.tail(), "3");
///
/// // without any letter, there is no kind
/// assert!(PreRelease::parse("42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreRelease<'input> {
    kind: &'input str,
    tail: &'input str,
}

impl<'input> PreRelease<'input> {
    /// Splits a pre-release label into kind and tail.
    ///
    /// Fails if the label does not contain a single ASCII letter.
    pub fn parse(label: &'input str) -> Result<Self, PreReleaseError<'input>> {
        let start = label
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or(PreReleaseError { label })?;
        let rest = &label[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or_else(|| rest.len());
        let (kind, tail) = rest.split_at(end);
        let tail = tail
            .strip_prefix(|c: char| matches!(c, '-' | '~' | '+' | '.'))
            .unwrap_or(tail);
        Ok(Self { kind, tail })
    }

    /// The kind of this pre-release, e.g. `alpha` or `RC`, as it appeared in the input.
    pub fn kind(&self) -> &'input str {
        self.kind
    }

    /// Everything after the kind and its separator.
    pub fn tail(&self) -> &'input str {
        self.tail
    }

    /// The precedence of the kind, see [`precedence`].
    pub fn precedence(&self) -> i64 {
        precedence(self.kind)
    }
}

/// A pre-release label without any letter, which therefore has no kind.
///
/// ## Examples
///
/// ```rust
/// # use channel_version::PreRelease;
/// let error = PreRelease::parse("1.2").unwrap_err();
/// assert_eq!(error.label(), "1.2");
/// assert_eq!(error.to_string(), "Could not find a pre-release type in `1.2`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreReleaseError<'input> {
    label: &'input str,
}

impl<'input> PreReleaseError<'input> {
    /// The label that could not be split.
    pub fn label(&self) -> &'input str {
        self.label
    }
}

impl Display for PreReleaseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not find a pre-release type in `{}`", self.label)
    }
}

impl std::error::Error for PreReleaseError<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("alpha" => ("alpha", ""); "kind only")]
    #[test_case("alpha.1" => ("alpha", "1"); "dot")]
    #[test_case("beta-2" => ("beta", "2"); "hyphen")]
    #[test_case("rc~3" => ("rc", "3"); "tilde")]
    #[test_case("rc+4" => ("rc", "4"); "plus")]
    #[test_case("rc5" => ("rc", "5"); "no separator")]
    #[test_case("rc..1" => ("rc", ".1"); "only one separator is removed")]
    #[test_case("alpha.beta" => ("alpha", "beta"); "second word")]
    #[test_case("alpha1.2" => ("alpha", "1.2"); "dotted tail")]
    #[test_case("RC1" => ("RC", "1"); "upper case is kept")]
    #[test_case("123abc" => ("abc", ""); "digits before the kind")]
    #[test_case("1.rc.2" => ("rc", "2"); "number before the kind")]
    #[test_case("x-y" => ("x", "y"); "single letters")]
    fn test_split(label: &str) -> (&str, &str) {
        let pre = PreRelease::parse(label).unwrap();
        (pre.kind(), pre.tail())
    }

    #[test_case(""; "empty")]
    #[test_case("123"; "number")]
    #[test_case("1.2"; "dotted numbers")]
    #[test_case("-"; "hyphen")]
    #[test_case("0~1-2"; "separated numbers")]
    fn test_without_kind(label: &str) {
        assert_eq!(PreRelease::parse(label), Err(PreReleaseError { label }));
    }

    #[test_case("alpha" => 0; "alpha")]
    #[test_case("beta" => 1; "beta")]
    #[test_case("rc" => 2; "rc")]
    #[test_case("" => 3; "empty kind")]
    #[test_case("ALPHA" => 0; "alpha upper")]
    #[test_case("bEtA" => 1; "beta sponge")]
    #[test_case("Rc" => 2; "rc pascal")]
    #[test_case("gamma" => NOT_FOUND; "unknown")]
    #[test_case("alphas" => NOT_FOUND; "longer than alpha")]
    #[test_case("r" => NOT_FOUND; "prefix of rc")]
    fn test_precedence(kind: &str) -> i64 {
        precedence(kind)
    }

    #[test]
    fn test_descriptor_precedence() {
        assert_eq!(PreRelease::parse("Beta.2").unwrap().precedence(), 1);
        assert_eq!(PreRelease::parse("M1").unwrap().precedence(), NOT_FOUND);
    }
}
