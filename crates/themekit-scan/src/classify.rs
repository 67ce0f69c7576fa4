//! Dynamic hue/shade classification.
//!
//! The static table only covers enumerated pairs. In full scan depth the
//! classifier handles arbitrary family/shade combinations: parse the
//! candidate into `{ family, shade }`, dispatch on the family's hue
//! bucket with an exhaustive match, and let shade depth drive an opacity
//! suffix from a bounded lookup table. The two stages stay separate from
//! the static rules so each is testable on its own.

/// A parsed color utility candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCandidate {
    pub family: String,
    pub shade: u16,
}

/// Hue bucket a color family belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyBucket {
    Success,
    Destructive,
    Warning,
    Primary,
    Info,
    Accent,
    Neutral,
    Unknown,
}

/// Parses `<family>-<shade>` (e.g. `teal-300`) into a candidate.
pub fn parse_candidate(text: &str) -> Option<ColorCandidate> {
    let (family, shade) = text.rsplit_once('-')?;
    let shade: u16 = shade.parse().ok()?;
    if family.is_empty() || !family.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    Some(ColorCandidate {
        family: family.to_string(),
        shade,
    })
}

/// Buckets a family name by hue group.
pub fn bucket(family: &str) -> FamilyBucket {
    match family {
        "green" | "emerald" | "lime" | "teal" => FamilyBucket::Success,
        "red" | "rose" => FamilyBucket::Destructive,
        "yellow" | "amber" | "orange" => FamilyBucket::Warning,
        "blue" => FamilyBucket::Primary,
        "cyan" | "sky" => FamilyBucket::Info,
        "purple" | "violet" | "indigo" => FamilyBucket::Accent,
        "gray" | "grey" | "neutral" | "zinc" | "slate" | "stone" => FamilyBucket::Neutral,
        _ => FamilyBucket::Unknown,
    }
}

/// Opacity suffix for light shades. Bounded: anything at or past 400 is
/// treated as solid.
fn opacity_suffix(shade: u16) -> &'static str {
    match shade {
        0..=50 => "/5",
        51..=100 => "/10",
        101..=200 => "/20",
        201..=300 => "/30",
        _ => "",
    }
}

/// Derives a semantic suggestion for an arbitrary family/shade pair.
///
/// Returns `None` for unknown families — the finding still surfaces, it
/// just carries no replacement.
pub fn dynamic_suggestion(candidate: &ColorCandidate) -> Option<String> {
    let base = match bucket(&candidate.family) {
        FamilyBucket::Success => "success",
        FamilyBucket::Destructive => "destructive",
        FamilyBucket::Warning => "warning",
        FamilyBucket::Primary => "primary",
        FamilyBucket::Info => "info",
        FamilyBucket::Accent => "accent",
        FamilyBucket::Neutral => {
            if candidate.shade >= 600 {
                "foreground"
            } else {
                "muted"
            }
        }
        FamilyBucket::Unknown => return None,
    };
    Some(format!("{}{}", base, opacity_suffix(candidate.shade)))
}
