//! Strict release-tag parsing
//!
//! Release tags look exactly like `v<major>.<minor>.<patch>`. Anything else
//! (pre-release suffixes, partial versions, unprefixed tags) is not a
//! release tag.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

static RELEASE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+\.\d+\.\d+$").expect("Failed to compile release pattern"));

/// Parses a tag name into a version, accepting only exact `vX.Y.Z` tags.
///
/// Tags whose numeric components fail to parse (e.g. overflow u64) are
/// discarded rather than surfaced as errors.
pub fn parse(tag: &str) -> Option<Version> {
    if !RELEASE_TAG.is_match(tag) {
        return None;
    }
    Version::parse(tag.strip_prefix('v')?).ok()
}

/// Renders a version back into tag form.
pub fn render(version: &Version) -> String {
    format!("v{version}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v1.2.3", Some((1, 2, 3)))]
    #[case("v0.0.0", Some((0, 0, 0)))]
    #[case("v10.200.3000", Some((10, 200, 3000)))]
    #[case("1.2.3", None)] // missing v prefix
    #[case("v1.2", None)] // missing patch component
    #[case("v1.2.3.4", None)] // extra component
    #[case("v1.2.3-rc.1", None)] // pre-release suffix
    #[case("v1.2.3+build", None)] // build metadata
    #[case("version-1.2.3", None)] // not anchored at the start
    #[case("v1.2.x", None)]
    #[case("v99999999999999999999999.0.0", None)] // overflows u64
    fn parse_accepts_only_exact_release_tags(
        #[case] tag: &str,
        #[case] expected: Option<(u64, u64, u64)>,
    ) {
        assert_eq!(
            parse(tag),
            expected.map(|(major, minor, patch)| Version::new(major, minor, patch))
        );
    }

    #[rstest]
    #[case(Version::new(1, 2, 3), "v1.2.3")]
    #[case(Version::new(1, 10, 0), "v1.10.0")]
    fn render_restores_tag_form(#[case] version: Version, #[case] expected: &str) {
        assert_eq!(render(&version), expected);
    }
}
