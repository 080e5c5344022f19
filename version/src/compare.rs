use crate::{PreRelease, PreReleaseError, Version};
use std::cmp::Ordering;

/// Compares two versions by precedence.
///
/// The result is positive if `a` has the higher precedence, negative if `b` has,
/// and zero if both are equal. Only the sign carries meaning; the magnitude is
/// whatever difference decided the comparison.
///
/// The numeric core is compared first (`major`, then `minor`, then `patch`).
/// If it is the same for both versions, [`compare_pre_release`] breaks the tie.
/// Build metadata never takes part in the comparison.
///
/// ## Examples
///
/// ```rust
/// use channel_version::{compare, Version};
///
/// let a = Version::parse("2.0.0").unwrap();
/// let b = Version::parse("1.9.9").unwrap();
/// assert!(compare(&a, &b).unwrap() > 0);
///
/// let a = Version::parse("1.0.0-rc.1").unwrap();
/// let b = Version::parse("1.0.0").unwrap();
/// assert!(compare(&a, &b).unwrap() < 0);
/// ```
///
/// ## Errors
///
/// Comparing two versions with the same core, where both have a pre-release
/// label and one of the labels has no kind, fails with [`PreReleaseError`].
pub fn compare<'input>(
    a: &Version<'input>,
    b: &Version<'input>,
) -> Result<i64, PreReleaseError<'input>> {
    let core = [(a.major, b.major), (a.minor, b.minor), (a.patch, b.patch)];
    match core
        .iter()
        .map(|&(a, b)| difference(a, b))
        .find(|&diff| diff != 0)
    {
        Some(diff) => Ok(diff),
        None => compare_pre_release(a, b),
    }
}

/// Compares the pre-release labels of two versions that share the same core.
///
/// - A version without a label is higher than one with a label.
/// - Two labelled versions are ordered by the [`precedence`](crate::precedence) of their kinds.
/// - Kinds with the same precedence are ordered by their tails, one character at a time.
///   This is a plain character comparison, so a tail of `9` is higher than a tail of `10`.
///   If one tail is a prefix of the other, the longer one is higher.
///
/// ## Examples
///
/// ```rust
/// use channel_version::{compare_pre_release, Version};
///
/// let alpha = Version::parse("1.0.0-alpha").unwrap();
/// let beta = Version::parse("1.0.0-beta").unwrap();
/// assert!(compare_pre_release(&alpha, &beta).unwrap() < 0);
///
/// let nine = Version::parse("1.0.0-alpha.9").unwrap();
/// let ten = Version::parse("1.0.0-alpha.10").unwrap();
/// assert!(compare_pre_release(&nine, &ten).unwrap() > 0);
/// ```
pub fn compare_pre_release<'input>(
    a: &Version<'input>,
    b: &Version<'input>,
) -> Result<i64, PreReleaseError<'input>> {
    let (a, b) = match (a.pre, b.pre) {
        (None, None) => return Ok(0),
        (None, Some(_)) => return Ok(1),
        (Some(_), None) => return Ok(-1),
        (Some(a), Some(b)) => (PreRelease::parse(a)?, PreRelease::parse(b)?),
    };

    let kind = a.precedence() - b.precedence();
    if kind != 0 {
        return Ok(kind);
    }

    Ok(compare_tails(a.tail(), b.tail()))
}

/// `a - b`, saturated so that the sign is always exact.
fn difference(a: u64, b: u64) -> i64 {
    let diff = i128::from(a) - i128::from(b);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn compare_tails(a: &str, b: &str) -> i64 {
    a.chars()
        .zip(b.chars())
        .map(|(a, b)| i64::from(u32::from(a)) - i64::from(u32::from(b)))
        .find(|&diff| diff != 0)
        .unwrap_or_else(|| match a.len().cmp(&b.len()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
}
