use channel_semver_parser::parse;
use channel_version::Version as ChannelVersion;
use regex::Regex;
use semver::Version;
use std::{cmp::Ordering, convert::TryFrom};

const INPUT_S: &str = "1.0.0";
const INPUT_XL: &str = "1.2.3-rc.1.alpha1.9+build5.7.3aedf.01337";
pub const INPUTS: [&str; 2] = [INPUT_S, INPUT_XL];

pub const PAIRS: [(&str, &str); 4] = [
    ("1.0.0", "1.0.1"),
    ("1.0.0-beta", "1.0.0-rc"),
    ("1.0.0-alpha.9", "1.0.0-alpha.10"),
    ("1.2.3-rc.1+build.5", "1.2.3-rc.1+build.7"),
];

pub fn mega_input() -> String {
    format!("1.2.3-rc.{}+{}", "a9".repeat(5_000), "b7".repeat(5_000))
}

#[inline(always)]
pub fn channel_version(input: &str) -> ChannelVersion<'_> {
    parse::<ChannelVersion<'_>>(input).unwrap()
}

#[inline(always)]
pub fn channel_semver(input: &str) -> Version {
    Version::try_from(&channel_version(input)).unwrap()
}

#[inline(always)]
pub fn semver(input: &str) -> Version {
    Version::parse(input).unwrap()
}

#[inline(always)]
pub fn channel_compare((a, b): (&str, &str)) -> i64 {
    channel_semver::compare(a, b).unwrap()
}

#[inline(always)]
pub fn semver_compare((a, b): (&str, &str)) -> Ordering {
    let (a, b) = (semver(a), semver(b));
    (a.major, a.minor, a.patch, a.pre).cmp(&(b.major, b.minor, b.patch, b.pre))
}

#[inline(always)]
pub fn regex<'input>(re: &Regex, input: &'input str) -> ChannelVersion<'input> {
    regex_parser(re, input).unwrap()
}

/// The version grammar as a regular expression, as a reference for the hand-written parser.
pub fn parsing_regex() -> Regex {
    Regex::new(r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>[0-9a-zA-Z-]+(?:[.~][0-9a-zA-Z-]+)*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$").unwrap()
}

pub fn regex_parser<'input>(re: &Regex, input: &'input str) -> Option<ChannelVersion<'input>> {
    let caps = re.captures(input)?;

    let mut version = ChannelVersion::new(
        caps.name("major")?.as_str().parse().ok()?,
        caps.name("minor")?.as_str().parse().ok()?,
        caps.name("patch")?.as_str().parse().ok()?,
    );
    version.pre = caps.name("prerelease").map(|pre| pre.as_str());
    version.build = caps.name("buildmetadata").map(|build| build.as_str());

    Some(version)
}
