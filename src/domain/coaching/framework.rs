//! Framework enum representing the 4 selectable consulting methodologies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::CoachingError;

/// The 4 consulting frameworks offered by the coach.
///
/// A framework is a label interpolated into prompts and templates; it
/// carries no behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    GlobisKokorozashi,
    BlueOceanStrategy,
    EmotionalIntelligence,
    ScenarioPlanning,
}

impl Framework {
    /// Returns all frameworks in selector order.
    pub fn all() -> &'static [Framework] {
        &[
            Framework::GlobisKokorozashi,
            Framework::BlueOceanStrategy,
            Framework::EmotionalIntelligence,
            Framework::ScenarioPlanning,
        ]
    }

    /// Returns the display name shown in the selector and interpolated
    /// into prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::GlobisKokorozashi => "GLOBIS Kokorozashi",
            Framework::BlueOceanStrategy => "Blue Ocean Strategy",
            Framework::EmotionalIntelligence => "Emotional Intelligence",
            Framework::ScenarioPlanning => "Scenario Planning",
        }
    }

    /// Returns the snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::GlobisKokorozashi => "globis_kokorozashi",
            Framework::BlueOceanStrategy => "blue_ocean_strategy",
            Framework::EmotionalIntelligence => "emotional_intelligence",
            Framework::ScenarioPlanning => "scenario_planning",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Framework {
    type Err = CoachingError;

    /// Accepts either the wire identifier or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::all()
            .iter()
            .find(|fw| fw.as_str() == s || fw.display_name() == s)
            .copied()
            .ok_or_else(|| CoachingError::unknown_framework(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_4_frameworks() {
        assert_eq!(Framework::all().len(), 4);
    }

    #[test]
    fn all_returns_frameworks_in_selector_order() {
        let all = Framework::all();
        assert_eq!(all[0], Framework::GlobisKokorozashi);
        assert_eq!(all[1], Framework::BlueOceanStrategy);
        assert_eq!(all[2], Framework::EmotionalIntelligence);
        assert_eq!(all[3], Framework::ScenarioPlanning);
    }

    #[test]
    fn display_names_match_selector_labels() {
        assert_eq!(
            Framework::GlobisKokorozashi.display_name(),
            "GLOBIS Kokorozashi"
        );
        assert_eq!(
            Framework::BlueOceanStrategy.display_name(),
            "Blue Ocean Strategy"
        );
        assert_eq!(
            Framework::EmotionalIntelligence.display_name(),
            "Emotional Intelligence"
        );
        assert_eq!(
            Framework::ScenarioPlanning.display_name(),
            "Scenario Planning"
        );
    }

    #[test]
    fn parses_wire_identifier() {
        assert_eq!(
            "blue_ocean_strategy".parse::<Framework>().unwrap(),
            Framework::BlueOceanStrategy
        );
    }

    #[test]
    fn parses_display_name() {
        assert_eq!(
            "Scenario Planning".parse::<Framework>().unwrap(),
            Framework::ScenarioPlanning
        );
    }

    #[test]
    fn rejects_unknown_framework() {
        let result = "waterfall".parse::<Framework>();
        assert!(matches!(
            result,
            Err(CoachingError::UnknownFramework { .. })
        ));
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Framework::GlobisKokorozashi).unwrap();
        assert_eq!(json, "\"globis_kokorozashi\"");

        let json = serde_json::to_string(&Framework::EmotionalIntelligence).unwrap();
        assert_eq!(json, "\"emotional_intelligence\"");
    }

    #[test]
    fn round_trips_through_serde() {
        for fw in Framework::all() {
            let json = serde_json::to_string(fw).unwrap();
            let back: Framework = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *fw);
        }
    }
}
