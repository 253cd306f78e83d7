//! MCCMD target version and version predicates.

/// A `(major, minor, patch)` version tuple, compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub u16, pub u16, pub u16);

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Version(major, minor, patch)
    }
}

impl Default for Version {
    /// The default target used across this crate's examples and tests.
    fn default() -> Self {
        Version::new(1, 19, 80)
    }
}

/// A gate evaluated against the Marker's target version to decide whether
/// a branch is eligible.
///
/// First-class values, built from `le`/`lt`/`ge`. Kept as a
/// closed enum rather than a boxed closure so `Branch` stays `Copy` and
/// frozen nodes need no heap allocation per version gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPredicate {
    Always,
    Le(Version),
    Lt(Version),
    Ge(Version),
}

impl VersionPredicate {
    pub fn holds(&self, v: Version) -> bool {
        match *self {
            VersionPredicate::Always => true,
            VersionPredicate::Le(bound) => v <= bound,
            VersionPredicate::Lt(bound) => v < bound,
            VersionPredicate::Ge(bound) => v >= bound,
        }
    }
}

pub fn version_le(bound: Version) -> VersionPredicate {
    VersionPredicate::Le(bound)
}

pub fn version_lt(bound: Version) -> VersionPredicate {
    VersionPredicate::Lt(bound)
}

pub fn version_ge(bound: Version) -> VersionPredicate {
    VersionPredicate::Ge(bound)
}

impl Default for VersionPredicate {
    fn default() -> Self {
        VersionPredicate::Always
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version::new(1, 19, 50) < Version::new(1, 19, 80));
        assert!(Version::new(1, 19, 80) < Version::new(1, 20, 0));
        assert!(Version::new(0, 99, 99) < Version::new(1, 0, 0));
    }

    #[test]
    fn always_holds_for_any_version() {
        assert!(VersionPredicate::Always.holds(Version::new(0, 0, 0)));
        assert!(VersionPredicate::Always.holds(Version::new(99, 99, 99)));
    }

    #[test]
    fn ge_and_lt_are_exact_complements_at_the_bound() {
        let bound = Version::new(1, 19, 50);
        let ge = version_ge(bound);
        let lt = version_lt(bound);
        assert_eq!(ge.holds(bound), true);
        assert_eq!(lt.holds(bound), false);
        assert_eq!(ge.holds(Version::new(1, 19, 49)), false);
        assert_eq!(lt.holds(Version::new(1, 19, 49)), true);
    }

    #[test]
    fn le_is_inclusive() {
        let bound = Version::new(1, 19, 80);
        let le = version_le(bound);
        assert!(le.holds(bound));
        assert!(le.holds(Version::new(1, 19, 79)));
        assert!(!le.holds(Version::new(1, 19, 81)));
    }
}
