//! Ordered schema migration chain
//!
//! Each step is a pure transform on the raw JSON shape, keyed by the
//! version it upgrades to. At load time every step whose target version is
//! newer than the blob's recorded version runs, in order. The shipping
//! chain is empty; the machinery exists so a future shape change is one
//! entry, not a rewrite.

use log::debug;
use serde_json::Value;

/// A parsed `major.minor.patch` version tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// The oldest representable version; unparseable tags collapse to this
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
    };

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `"major.minor.patch"` tag
    pub fn parse(tag: &str) -> Option<Self> {
        let mut parts = tag.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }
}

/// One migration: a pure `old shape -> new shape` transform
pub struct MigrationStep {
    /// Version the blob is at after this step runs
    pub target: Version,
    /// The transform itself
    pub run: fn(&mut Value),
}

/// Steps registered for this build, oldest target first
pub fn chain() -> &'static [MigrationStep] {
    // No shape changes shipped yet
    &[]
}

/// Run every step newer than `from` against the raw blob, in order
///
/// Returns the version the blob ends at.
pub fn run_chain(value: &mut Value, from: Version, steps: &[MigrationStep]) -> Version {
    let mut version = from;
    for step in steps {
        if version < step.target {
            debug!(
                "migrating persisted state to {}.{}.{}",
                step.target.major, step.target.minor, step.target.patch
            );
            (step.run)(value);
            version = step.target;
        }
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_parse() {
        assert_eq!(Version::parse("1.0.0"), Some(Version::new(1, 0, 0)));
        assert_eq!(Version::parse("0.12.3"), Some(Version::new(0, 12, 3)));
        assert_eq!(Version::parse("1.0"), None);
        assert_eq!(Version::parse("1.0.0.0"), None);
        assert_eq!(Version::parse("banana"), None);
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::ZERO < Version::new(0, 0, 1));
        assert!(Version::new(0, 9, 9) < Version::new(1, 0, 0));
        assert!(Version::new(1, 2, 0) < Version::new(1, 10, 0));
    }

    fn rename_colour(value: &mut Value) {
        if let Some(map) = value.as_object_mut() {
            if let Some(v) = map.remove("colour") {
                map.insert("theme".to_string(), v);
            }
        }
    }

    fn add_wallpaper(value: &mut Value) {
        if let Some(map) = value.as_object_mut() {
            map.entry("wallpaper").or_insert_with(|| json!("slate"));
        }
    }

    fn synthetic_chain() -> Vec<MigrationStep> {
        vec![
            MigrationStep {
                target: Version::new(0, 9, 0),
                run: rename_colour,
            },
            MigrationStep {
                target: Version::new(1, 0, 0),
                run: add_wallpaper,
            },
        ]
    }

    #[test]
    fn test_run_chain_applies_newer_steps_in_order() {
        let mut blob = json!({ "colour": "aurora" });
        let end = run_chain(&mut blob, Version::ZERO, &synthetic_chain());

        assert_eq!(end, Version::new(1, 0, 0));
        assert_eq!(blob["theme"], "aurora");
        assert_eq!(blob["wallpaper"], "slate");
        assert!(blob.get("colour").is_none());
    }

    #[test]
    fn test_run_chain_skips_already_applied_steps() {
        let mut blob = json!({ "colour": "aurora" });
        let end = run_chain(&mut blob, Version::new(0, 9, 0), &synthetic_chain());

        assert_eq!(end, Version::new(1, 0, 0));
        // The 0.9.0 rename must not run on a blob already at 0.9.0
        assert_eq!(blob["colour"], "aurora");
        assert_eq!(blob["wallpaper"], "slate");
    }

    #[test]
    fn test_run_chain_noop_when_current() {
        let mut blob = json!({ "theme": "aurora" });
        let before = blob.clone();
        let end = run_chain(&mut blob, Version::new(1, 0, 0), &synthetic_chain());

        assert_eq!(end, Version::new(1, 0, 0));
        assert_eq!(blob, before);
    }

    #[test]
    fn test_shipping_chain_is_empty() {
        assert!(chain().is_empty());
    }
}
