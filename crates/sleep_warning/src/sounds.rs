//! Static catalog of warning sound cues.
//!
//! Maps the host audio engine's internal cue names to the labels shown in
//! the settings menu. Cues missing from the catalog (custom audio packs)
//! fall back to the raw cue name.

/// Cue played when no explicit choice has been made.
pub const DEFAULT_SOUND: &str = "crystal";

/// (internal cue name, settings-menu label) pairs.
const SOUND_LABELS: &[(&str, &str)] = &[
    ("crystal", "Ding (Default)"),
    ("phone", "Telephone Ring"),
    ("ghost", "Ghost Moan"),
    ("owl", "Owl Hoot"),
    ("trainWhistle", "Train Whistle"),
    ("doorbell", "Doorbell"),
];

/// Cue names offered by the settings menu, in catalog order.
pub fn allowed_sounds() -> Vec<String> {
    SOUND_LABELS.iter().map(|(cue, _)| cue.to_string()).collect()
}

/// Settings-menu label for a sound cue.
///
/// Unmapped cues pass through unchanged so a hand-edited config still
/// renders something meaningful.
pub fn format_sound(cue: &str) -> &str {
    SOUND_LABELS
        .iter()
        .find(|(name, _)| *name == cue)
        .map(|(_, label)| *label)
        .unwrap_or(cue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sound_label() {
        assert_eq!(format_sound("crystal"), "Ding (Default)");
    }

    #[test]
    fn test_unknown_cue_passes_through() {
        assert_eq!(format_sound("unknown_xyz"), "unknown_xyz");
    }

    #[test]
    fn test_allowed_sounds_include_default() {
        let allowed = allowed_sounds();
        assert!(allowed.contains(&DEFAULT_SOUND.to_string()));
        assert_eq!(allowed.len(), SOUND_LABELS.len());
    }

    #[test]
    fn test_every_catalog_cue_has_a_label() {
        for cue in allowed_sounds() {
            let label = format_sound(&cue);
            assert!(!label.is_empty());
            assert_ne!(label, cue, "catalog cue {cue} should map to a label");
        }
    }
}
