// Compact set notation: "3x5", "1x5+", "3x8-12", optionally followed by a weight token

use once_cell::sync::Lazy;
use regex::Regex;

use super::weight_resolver::LoadToken;
use crate::models::RepSpec;

static SET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*[xX]\s*(\d+)(?:-(\d+)|(\+))?(?:\s+(.+))?$")
        .expect("set pattern is valid")
});

/// Upper bound on the set count of a single segment
pub const MAX_SETS: u32 = 100;

/// One comma-separated segment of an exercise line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetSpec {
    pub sets: u32,
    pub reps: RepSpec,
    pub load: Option<LoadToken>,
}

impl SetSpec {
    /// Parse a single segment such as `1x5+ 95%`. `None` when the segment does
    /// not follow the grammar, including an unrecognized weight token or more
    /// than [`MAX_SETS`] sets.
    pub fn parse(segment: &str) -> Option<Self> {
        let caps = SET_PATTERN.captures(segment.trim())?;

        let sets: u32 = caps[1].parse().ok()?;
        if sets > MAX_SETS {
            return None;
        }
        let base: u32 = caps[2].parse().ok()?;

        let reps = match (caps.get(3), caps.get(4)) {
            (Some(high), _) => RepSpec::Range(base, high.as_str().parse().ok()?),
            (None, Some(_)) => RepSpec::Amrap(base),
            (None, None) => RepSpec::Fixed(base),
        };

        let load = match caps.get(5) {
            Some(token) => Some(LoadToken::parse(token.as_str())?),
            None => None,
        };

        Some(SetSpec { sets, reps, load })
    }

    /// One rep target per individual set
    pub fn expand(&self) -> impl Iterator<Item = RepSpec> + '_ {
        std::iter::repeat(self.reps).take(self.sets as usize)
    }
}

/// Parse every comma-separated segment of a set list. Empty segments are
/// ignored; `None` if any non-empty segment is malformed.
pub fn parse_set_list(list: &str) -> Option<Vec<SetSpec>> {
    list.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(SetSpec::parse)
        .collect()
}

/// Concatenated per-set rep targets of a set list, left to right
pub fn expand_set_list(specs: &[SetSpec]) -> Vec<RepSpec> {
    specs.iter().flat_map(SetSpec::expand).collect()
}
