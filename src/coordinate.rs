//! Maven dependency coordinates.
//!
//! The substitution values handed to the renderer are opaque strings, but in
//! practice the one value the built-in catalog needs is a dependency line of
//! the form `group:artifact:version`. [`Coordinate`] validates that shape
//! once, up front, so a malformed coordinate fails loudly instead of being
//! baked into a generated build script.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordinateError;

/// A validated `group:artifact:version` dependency coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group: String,
    artifact: String,
    version: String,
}

impl Coordinate {
    /// Build a coordinate from its three parts, validating each.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, CoordinateError> {
        let coordinate = Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// The group identifier, e.g. `org.junit`.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artifact identifier, e.g. `junit-bom`.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// The version part. Opaque: snapshot and hash-suffixed versions are
    /// common for this kind of dependency and are not semver.
    pub fn version(&self) -> &str {
        &self.version
    }

    fn validate(&self) -> Result<(), CoordinateError> {
        let input = || self.to_string();
        for part in [&self.group, &self.artifact, &self.version] {
            if part.is_empty() {
                return Err(CoordinateError::EmptySegment { input: input() });
            }
            if part.chars().any(char::is_whitespace) {
                return Err(CoordinateError::Whitespace { input: input() });
            }
            if part.contains(':') {
                return Err(CoordinateError::Malformed { input: input() });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(artifact), Some(version), None) => {
                Self::new(group, artifact, version)
            }
            _ => Err(CoordinateError::Malformed { input: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_coordinate() {
        let coordinate: Coordinate = "net.minestom:minestom-snapshots:1f34e60ea6".parse().unwrap();
        assert_eq!(coordinate.group(), "net.minestom");
        assert_eq!(coordinate.artifact(), "minestom-snapshots");
        assert_eq!(coordinate.version(), "1f34e60ea6");
        assert_eq!(coordinate.to_string(), "net.minestom:minestom-snapshots:1f34e60ea6");
    }

    #[test]
    fn test_parse_wrong_part_count() {
        for input in ["", "group", "group:artifact", "a:b:c:d"] {
            let err = input.parse::<Coordinate>().unwrap_err();
            assert!(matches!(err, CoordinateError::Malformed { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_empty_segment() {
        let err = "group::1.0".parse::<Coordinate>().unwrap_err();
        assert!(matches!(err, CoordinateError::EmptySegment { .. }));
    }

    #[test]
    fn test_parse_whitespace() {
        let err = "com.example:my lib:1.0".parse::<Coordinate>().unwrap_err();
        assert!(matches!(err, CoordinateError::Whitespace { .. }));
    }

    #[test]
    fn test_new_rejects_colon_in_part() {
        let err = Coordinate::new("com.example", "lib:extra", "1.0").unwrap_err();
        assert!(matches!(err, CoordinateError::Malformed { .. }));
    }
}
