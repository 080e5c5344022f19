//! Some of these tests are replicated in the crate documentation as a doc test
//! Please try to keep them in sync

mod custom_test {
    use crate::VersionBuilder;

    /// Simpler version struct that lives only on the stack
    #[derive(Debug, Default)]
    struct MyVersion {
        numbers: [u64; 3],
        is_pre_release: bool,
    }

    /// The VersionBuilder trait is generic over the lifetime of the input string.
    /// We don't store references to those strings, so we don't care about the specific lifetime.
    impl VersionBuilder<'_> for MyVersion {
        /// We will modify the target struct directly
        type Out = Self;

        /// Construct a new builder instance.
        fn new() -> Self {
            Self::default()
        }

        /// Construct the final result. In this case, we can just return ourselves.
        fn build(self) -> Self::Out {
            self
        }

        fn set_major(&mut self, major: u64) {
            self.numbers[0] = major;
        }

        fn set_minor(&mut self, minor: u64) {
            self.numbers[1] = minor;
        }

        fn set_patch(&mut self, patch: u64) {
            self.numbers[2] = patch;
        }

        /// Called once with the whole label.
        /// For this implementation, we don't care about the value, just it's presence.
        fn set_pre_release(&mut self, _pre_release: &str) {
            self.is_pre_release = true
        }
    }

    #[test]
    fn test_custom_version_builder() {
        let input = "1.3.37-alpha21+build.42";

        let my_version = crate::parse_into::<MyVersion>(input).unwrap();

        assert_eq!([1, 3, 37], my_version.numbers);
        assert!(my_version.is_pre_release);
    }

    #[test]
    fn test_custom_version_builder_error() {
        let error = crate::parse_into::<MyVersion>("1.3.3.7").unwrap_err();
        assert_eq!(error.error_kind(), crate::ErrorKind::UnexpectedInput);
        assert_eq!(error.erroneous_input(), ".");
    }
}

mod builder_as_validation_test {

    //! This test is replicated in the crate documentation as a doc test
    //! Please try to keep them in sync

    use crate::VersionBuilder;

    /// newtype around bool, so we can implement the VersionBuilder trait for it
    #[derive(Debug, Default)]
    struct IsPreRelease(bool);

    impl VersionBuilder<'_> for IsPreRelease {
        /// Here we parse into a different value than Self
        type Out = bool;

        fn new() -> Self {
            Self::default()
        }

        /// Return the wrapped bool
        fn build(self) -> Self::Out {
            self.0
        }

        /// We only care about this method and can ignore all the other ones
        fn set_pre_release(&mut self, _pre_release: &str) {
            self.0 = true;
        }
    }

    /// This method also return false for invalid version strings,
    /// which is technically true, as those are not pre-release versions.
    /// Usually you would want to have a better error handling.
    fn is_pre_release(v: &str) -> bool {
        crate::parse_into::<IsPreRelease>(v).unwrap_or_default()
    }

    #[test]
    fn test_custom_version_validation() {
        assert!(is_pre_release("1.2.3-pre"));
        assert!(!is_pre_release("1.2.3"));
        assert!(!is_pre_release("1.2.3+build"));
        assert!(!is_pre_release("1.2-pre"));
    }
}

mod compare_test {
    use crate::{Error, ErrorKind};
    use std::cmp::Ordering;
    use test_case::test_case;

    #[test_case("2.0.0", "1.9.9" => Ordering::Greater; "major")]
    #[test_case("1.2.3", "1.2.4" => Ordering::Less; "patch")]
    #[test_case("1.2.3", "1.2.3" => Ordering::Equal; "same")]
    #[test_case("1.0.0", "1.0.0-alpha" => Ordering::Greater; "release")]
    #[test_case("1.0.0-alpha", "1.0.0-beta" => Ordering::Less; "alpha beta")]
    #[test_case("1.0.0-beta", "1.0.0-rc" => Ordering::Less; "beta rc")]
    #[test_case("1.0.0-rc", "1.0.0-rc1" => Ordering::Less; "rc rc1")]
    #[test_case("1.0.0-alpha.9", "1.0.0-alpha.10" => Ordering::Greater; "alpha tails")]
    #[test_case("1.0.0+a", "1.0.0+b" => Ordering::Equal; "build")]
    #[test_case("1.0.0-M1", "1.0.0-alpha" => Ordering::Less; "milestone")]
    fn test_compare_ordering(a: &str, b: &str) -> Ordering {
        crate::compare_ordering(a, b).unwrap()
    }

    #[test_case("1.0", "1.0.0" => ErrorKind::MissingPatchNumber; "left missing patch")]
    #[test_case("1.0.0", "1.0.0.0" => ErrorKind::UnexpectedInput; "right fourth number")]
    #[test_case("1.0", "1.0.0.0" => ErrorKind::MissingPatchNumber; "left is reported first")]
    #[test_case("v1.0.0", "1.0.0" => ErrorKind::MajorNotANumber; "leading v")]
    #[test_case("1.0.0", "1.00.0" => ErrorKind::MinorLeadingZero; "leading zero")]
    fn test_compare_invalid_version(a: &str, b: &str) -> ErrorKind {
        match crate::compare(a, b) {
            Err(Error::InvalidVersionFormat(error)) => error.error_kind(),
            otherwise => panic!("expected an invalid version, got {:?}", otherwise),
        }
    }

    #[test_case("1.0.0-1", "1.0.0-rc" => "1"; "left without kind")]
    #[test_case("1.0.0-rc", "1.0.0-2.0" => "2.0"; "right without kind")]
    #[test_case("1.0.0-1", "1.0.0-2" => "1"; "left is reported first")]
    fn test_compare_invalid_pre_release(a: &str, b: &str) -> String {
        match crate::compare(a, b) {
            Err(Error::InvalidPrereleaseFormat(error)) => error.label().to_string(),
            otherwise => panic!("expected an invalid pre-release, got {:?}", otherwise),
        }
    }

    #[test_case("1.0.0-7"; "number")]
    #[test_case("1.0.0-1.2+build"; "dotted numbers")]
    fn test_label_without_kind_is_not_reflexive(v: &str) {
        let label = crate::parse(v).unwrap().pre.unwrap();
        assert_eq!(
            crate::compare(v, v),
            Err(Error::InvalidPrereleaseFormat(
                crate::PreRelease::parse(label).unwrap_err()
            ))
        );
    }

    #[test]
    fn test_plus_ends_the_label() {
        assert_eq!(crate::parse("1.0.0-rc+1").unwrap().pre, Some("rc"));
        assert_eq!(crate::compare("1.0.0-rc+1", "1.0.0-rc+2"), Ok(0));
    }

    #[test]
    fn test_label_without_kind_against_release() {
        assert_eq!(crate::compare("1.0.0-1", "1.0.0"), Ok(-1));
        assert_eq!(crate::compare("1.0.0", "1.0.0-1"), Ok(1));
    }

    #[test]
    fn test_owned_error() {
        let a = String::from("1.0.0-rc");
        let b = String::from("1.0");
        let error = crate::compare(&a, &b).unwrap_err().owned();
        drop(a);
        drop(b);

        assert_eq!(error.parse_error_kind(), Some(ErrorKind::MissingPatchNumber));
        assert_eq!(
            error.to_string(),
            "Could not parse the patch identifier: No input"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_owned_pre_release_error() {
        let error = crate::compare("1.0.0-42", "1.0.0-rc").unwrap_err().owned();
        assert_eq!(
            error,
            crate::OwnedError::InvalidPrereleaseFormat {
                label: String::from("42")
            }
        );
        assert_eq!(error.parse_error_kind(), None);
        assert!(std::error::Error::source(&error).is_none());
    }
}

mod replace_test {
    use test_case::test_case;

    #[test_case("1.0.0", "1.0.1" => true; "newer patch")]
    #[test_case("1.0.0-rc.1", "1.0.0" => true; "release after rc")]
    #[test_case("1.0.0-alpha", "1.0.0-beta" => true; "beta after alpha")]
    #[test_case("1.0.1", "1.0.0" => false; "older patch")]
    #[test_case("1.0.0", "1.0.0" => false; "same version")]
    #[test_case("1.0.0+a", "1.0.0+b" => false; "only build differs")]
    #[test_case("1.0.0", "1.0.0-rc" => false; "release over rc")]
    fn test_should_replace(current: &str, wanted: &str) -> bool {
        crate::should_replace(current, wanted).unwrap()
    }

    /// Keeps the highest version of each dependency, the way a manifest merge would.
    #[test]
    fn test_dependency_bookkeeping() {
        let mut recorded = vec![("core", "1.0.0-beta"), ("ui", "2.1.0")];
        let wanted = [
            ("core", "1.0.0-rc.1"),
            ("ui", "2.0.9"),
            ("core", "1.0.0-alpha"),
            ("ui", "2.1.0+build.7"),
        ];

        for (name, version) in wanted.iter() {
            for (recorded_name, recorded_version) in recorded.iter_mut() {
                if recorded_name == name
                    && crate::should_replace(recorded_version, version).unwrap()
                {
                    *recorded_version = *version;
                }
            }
        }

        assert_eq!(recorded, vec![("core", "1.0.0-rc.1"), ("ui", "2.1.0")]);
    }
}

mod version_test {
    use crate::Version;

    #[test]
    fn test_version() {
        let input = "1.3.37-beta~21+build.42";
        // make an owned copy, so we don't cheat by using the 'static lifetime.
        let input = String::from(input);

        // This version references slices from the `input` String
        let version = crate::parse(input.as_ref()).unwrap();

        // Which prevents us from dropping the input
        // drop(input);

        let pre = version.pre_release().unwrap().unwrap();
        assert_eq!(pre.kind(), "beta");
        assert_eq!(pre.tail(), "21");

        // Copy the label, so that the version can outlive the input
        let label = version.pre.map(ToOwned::to_owned).unwrap();
        let version = Version::new(version.major, version.minor, version.patch);
        drop(input);

        let version = version.with_pre_release(label.as_ref());
        assert_eq!("1.3.37-beta~21".to_string(), version.to_string());
    }

    #[test]
    fn test_into_semver() {
        use std::convert::TryFrom;

        let version = crate::parse("1.0.0-rc.1+build.5").unwrap();
        let semver = semver::Version::try_from(&version).unwrap();
        assert_eq!(semver, semver::Version::parse("1.0.0-rc.1+build.5").unwrap());
    }
}

mod serde_test {

    use crate::Version;
    use serde::Deserialize;
    #[derive(Debug, Deserialize)]
    struct DependencySpec<'input> {
        /// Refer to name as owned value
        name: String,
        /// Borrows from the input string
        #[serde(borrow)]
        version: Version<'input>,
    }

    #[test]
    fn test_serde_feature() {
        let input = "
            {
                \"name\": \"channel_semver\",
                \"version\": \"1.3.37-rc.1+build.42\"
            }";
        // make an owned copy, so we don't cheat by using the 'static lifetime.
        let input = String::from(input);

        // use serde as one would normally do
        let dep = serde_json::from_str::<DependencySpec<'_>>(input.as_ref()).unwrap();

        // cannot move out of `input` because it is borrowed
        // drop(input);

        let expected = Version::new(1, 3, 37)
            .with_pre_release("rc.1")
            .with_build("build.42");

        assert_eq!(dep.name, "channel_semver");
        assert_eq!(dep.version, expected);
        assert!(crate::should_replace("1.3.37-beta", &dep.version.to_string()).unwrap());

        // now we can drop the input
        drop(input);
    }
}
