//! Version arithmetic for release bumps
//!
//! Versions are always a three-integer tuple (`semver::Version` with no
//! prerelease or build metadata). Input strings are parsed leniently:
//! missing or non-numeric components default to 0, so "1.4", "" and
//! "1.x.2" all normalize to a full tuple before a bump is applied.

use clap::ValueEnum;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Which version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BumpClass {
  /// Increment the third component
  Patch,
  /// Increment the second component, reset the third
  Minor,
  /// Increment the first component, reset the second and third
  Major,
}

impl BumpClass {
  /// Apply the bump to an already-normalized version
  pub fn apply(&self, current: &Version) -> Version {
    match self {
      BumpClass::Major => Version::new(current.major + 1, 0, 0),
      BumpClass::Minor => Version::new(current.major, current.minor + 1, 0),
      BumpClass::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
  }

  /// Normalize a raw version string, then apply the bump
  pub fn bump(&self, raw: &str) -> Version {
    self.apply(&parse_lenient(raw))
  }
}

/// Parse a version string with 0-3 dot-separated components.
///
/// Components that are absent or fail to parse as a non-negative integer
/// become 0. Extra components past the third are ignored.
pub fn parse_lenient(raw: &str) -> Version {
  let mut parts = [0u64; 3];
  for (i, piece) in raw.split('.').take(3).enumerate() {
    parts[i] = piece.trim().parse().unwrap_or(0);
  }
  Version::new(parts[0], parts[1], parts[2])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_lenient_full() {
    assert_eq!(parse_lenient("1.4.2"), Version::new(1, 4, 2));
  }

  #[test]
  fn test_parse_lenient_partial_and_invalid() {
    assert_eq!(parse_lenient("1.4"), Version::new(1, 4, 0));
    assert_eq!(parse_lenient("2"), Version::new(2, 0, 0));
    assert_eq!(parse_lenient(""), Version::new(0, 0, 0));
    assert_eq!(parse_lenient("1.x.2"), Version::new(1, 0, 2));
    assert_eq!(parse_lenient("not-a-version"), Version::new(0, 0, 0));
    assert_eq!(parse_lenient("-1.2.3"), Version::new(0, 2, 3));
  }

  #[test]
  fn test_parse_lenient_ignores_extra_components() {
    assert_eq!(parse_lenient("1.2.3.4"), Version::new(1, 2, 3));
  }

  #[test]
  fn test_bump_patch_only_touches_third_component() {
    assert_eq!(BumpClass::Patch.bump("1.2.3"), Version::new(1, 2, 4));
    assert_eq!(BumpClass::Patch.bump("0.1.0"), Version::new(0, 1, 1));
  }

  #[test]
  fn test_bump_minor_zeroes_patch() {
    assert_eq!(BumpClass::Minor.bump("1.2.3"), Version::new(1, 3, 0));
    assert_eq!(BumpClass::Minor.bump("0.1.5"), Version::new(0, 2, 0));
  }

  #[test]
  fn test_bump_major_zeroes_minor_and_patch() {
    assert_eq!(BumpClass::Major.bump("1.2.3"), Version::new(2, 0, 0));
    assert_eq!(BumpClass::Major.bump("0.5.1"), Version::new(1, 0, 0));
  }

  #[test]
  fn test_bump_normalizes_before_applying() {
    assert_eq!(BumpClass::Patch.bump("1.0"), Version::new(1, 0, 1));
    assert_eq!(BumpClass::Minor.bump(""), Version::new(0, 1, 0));
  }

  #[test]
  fn test_bump_sequence_is_exact() {
    // minor, minor, patch must stay distinguishable from three patch bumps
    let v = BumpClass::Minor.bump("1.0.0");
    let v = BumpClass::Minor.apply(&v);
    let v = BumpClass::Patch.apply(&v);
    assert_eq!(v, Version::new(1, 2, 1));
    assert_eq!(v.to_string(), "1.2.1");
  }

  #[test]
  fn test_minor_past_one_digit() {
    let mut v = parse_lenient("1.9.0");
    v = BumpClass::Minor.apply(&v);
    v = BumpClass::Minor.apply(&v);
    assert_eq!(v, Version::new(1, 11, 0));
  }
}
