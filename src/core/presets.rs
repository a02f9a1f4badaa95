use crate::domain::model::SearchType;
use serde::Serialize;

/// A ready-made origin/destination/category combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub category: SearchType,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        label: "US license in Japan",
        origin: "United States",
        destination: "Japan",
        category: SearchType::Tourist,
    },
    Preset {
        label: "Moving from UK to Spain",
        origin: "United Kingdom",
        destination: "Spain",
        category: SearchType::Resident,
    },
    Preset {
        label: "Road trip in Australia",
        origin: "India",
        destination: "Australia",
        category: SearchType::Tourist,
    },
];

/// Looks a preset up by its 1-based position in [`PRESETS`].
pub fn by_number(number: usize) -> Option<&'static Preset> {
    number.checked_sub(1).and_then(|index| PRESETS.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::CountryRegistry;

    #[test]
    fn presets_use_registry_names_and_distinct_pairs() {
        let registry = CountryRegistry::builtin();
        for preset in PRESETS {
            assert!(registry.by_name(preset.origin).is_some(), "{}", preset.origin);
            assert!(registry.by_name(preset.destination).is_some(), "{}", preset.destination);
            assert_ne!(preset.origin, preset.destination);
        }
    }

    #[test]
    fn numbering_is_one_based() {
        assert_eq!(by_number(1).map(|p| p.destination), Some("Japan"));
        assert!(by_number(0).is_none());
        assert!(by_number(PRESETS.len() + 1).is_none());
    }
}
