//! Property-based tests for version comparison.
//!
//! Ordering laws are checked on generated versions whose pre-release labels
//! always carry a kind, so that every comparison succeeds.

use channel_semver::{compare, parse};
use proptest::prelude::*;
use regex::Regex;

const CORE: &str = r"(0|[1-9][0-9]{0,5})\.(0|[1-9][0-9]{0,5})\.(0|[1-9][0-9]{0,5})";
const LABEL: &str = r"(alpha|beta|rc|RC|Beta|dev|M|snapshot)([.~-]?[0-9A-Za-z]{1,3}){0,2}";
const BUILD: &str = r"[0-9A-Za-z-]{1,6}(\.[0-9A-Za-z-]{1,6}){0,2}";

const GRAMMAR: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(-[0-9A-Za-z-]+([.~][0-9A-Za-z-]+)*)?(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$";

fn version() -> impl Strategy<Value = String> {
    let core = prop::string::string_regex(CORE).unwrap();
    let label = prop::option::of(prop::string::string_regex(LABEL).unwrap());
    (core, label).prop_map(|(core, label)| match label {
        Some(label) => format!("{}-{}", core, label),
        None => core,
    })
}

fn build() -> impl Strategy<Value = String> {
    prop::string::string_regex(BUILD).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn compare_is_reflexive(v in version()) {
        prop_assert_eq!(compare(&v, &v).unwrap(), 0);
    }

    #[test]
    fn compare_is_antisymmetric(a in version(), b in version()) {
        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();
        prop_assert_eq!(ab.signum(), -ba.signum(), "{} vs {}", a, b);
    }

    #[test]
    fn build_metadata_is_ignored(a in version(), b in version(), x in build(), y in build()) {
        let ax = format!("{}+{}", a, x);
        let ay = format!("{}+{}", a, y);
        prop_assert_eq!(compare(&ax, &ay).unwrap(), 0);
        prop_assert_eq!(compare(&ax, &b).unwrap().signum(), compare(&a, &b).unwrap().signum());
    }

    #[test]
    fn release_is_higher_than_its_pre_releases(v in version()) {
        let release = parse(&v).unwrap();
        let release = format!("{}.{}.{}", release.major, release.minor, release.patch);
        if release != v {
            prop_assert!(compare(&release, &v).unwrap() > 0);
        }
    }

    #[test]
    fn generated_versions_round_trip(v in version(), x in build()) {
        let input = format!("{}+{}", v, x);
        let version = parse(&input).unwrap();
        prop_assert_eq!(version.to_string(), input);
    }

    #[test]
    fn parser_agrees_with_grammar(s in "[0-9a-cA-C.~+-]{0,16}") {
        let grammar = Regex::new(GRAMMAR).unwrap();
        prop_assert_eq!(parse(&s).is_ok(), grammar.is_match(&s), "{:?}", s);
    }

    #[test]
    fn parse_doesnt_panic(s in "\\PC{0,64}") {
        let _ = parse(&s);
    }

    #[test]
    fn compare_doesnt_panic(a in "\\PC{0,32}", b in "\\PC{0,32}") {
        let _ = compare(&a, &b);
    }
}
