//! Static compliance rules.
//!
//! Maps well-known color+shade utility pairs to the semantic token that
//! should replace them, or to `None` when a pair is recognized but has no
//! safe mapping. Pairs absent from the table are simply unknown; in full
//! scan depth the dynamic classifier (see [`crate::classify`]) gets a
//! second look at those.

/// A single compliance rule: disallowed family/shade pair and its
/// recommended semantic token, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceRule {
    pub family: &'static str,
    pub shade: u16,
    pub suggestion: Option<&'static str>,
}

/// Well-known pairs. Shades 500/600 of the branded families map to their
/// semantic counterparts; the gray ramp splits between muted and
/// foreground by depth.
pub const STATIC_RULES: &[ComplianceRule] = &[
    ComplianceRule { family: "blue", shade: 500, suggestion: Some("primary") },
    ComplianceRule { family: "blue", shade: 600, suggestion: Some("primary") },
    ComplianceRule { family: "blue", shade: 700, suggestion: Some("primary-hover") },
    ComplianceRule { family: "indigo", shade: 500, suggestion: Some("accent") },
    ComplianceRule { family: "violet", shade: 500, suggestion: Some("accent") },
    ComplianceRule { family: "red", shade: 500, suggestion: Some("destructive") },
    ComplianceRule { family: "red", shade: 600, suggestion: Some("destructive") },
    ComplianceRule { family: "rose", shade: 500, suggestion: Some("destructive") },
    ComplianceRule { family: "green", shade: 500, suggestion: Some("success") },
    ComplianceRule { family: "green", shade: 600, suggestion: Some("success") },
    ComplianceRule { family: "emerald", shade: 500, suggestion: Some("success") },
    ComplianceRule { family: "yellow", shade: 500, suggestion: Some("warning") },
    ComplianceRule { family: "amber", shade: 500, suggestion: Some("warning") },
    ComplianceRule { family: "orange", shade: 500, suggestion: Some("warning") },
    ComplianceRule { family: "cyan", shade: 500, suggestion: Some("info") },
    ComplianceRule { family: "sky", shade: 500, suggestion: Some("info") },
    ComplianceRule { family: "gray", shade: 50, suggestion: Some("muted") },
    ComplianceRule { family: "gray", shade: 100, suggestion: Some("muted") },
    ComplianceRule { family: "gray", shade: 400, suggestion: Some("muted-foreground") },
    ComplianceRule { family: "gray", shade: 500, suggestion: Some("muted-foreground") },
    ComplianceRule { family: "gray", shade: 900, suggestion: Some("foreground") },
    ComplianceRule { family: "slate", shade: 100, suggestion: Some("muted") },
    ComplianceRule { family: "slate", shade: 900, suggestion: Some("foreground") },
    // Recognized, deliberately unmapped: brand pinks have no semantic home.
    ComplianceRule { family: "pink", shade: 500, suggestion: None },
    ComplianceRule { family: "fuchsia", shade: 500, suggestion: None },
];

/// Looks a pair up in the static table. `None` means the pair is not in
/// the table at all (distinct from a rule that maps to no suggestion).
pub fn static_rule(family: &str, shade: u16) -> Option<&'static ComplianceRule> {
    STATIC_RULES
        .iter()
        .find(|rule| rule.family == family && rule.shade == shade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue_500_maps_to_primary() {
        let rule = static_rule("blue", 500).unwrap();
        assert_eq!(rule.suggestion, Some("primary"));
    }

    #[test]
    fn test_unmapped_shade_misses_table() {
        assert!(static_rule("blue", 300).is_none());
    }

    #[test]
    fn test_recognized_but_null_mapping() {
        let rule = static_rule("pink", 500).unwrap();
        assert_eq!(rule.suggestion, None);
    }
}
