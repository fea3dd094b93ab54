use serde::{Deserialize, Serialize};

/// Clinical severity tier of an ingredient/disease pairing.
///
/// The variant order IS the total order used everywhere in the engine:
/// `Safe < Low < Medium < High < Critical`. `Ord` is derived from it, so
/// "keep the worst tier" is `Iterator::max`, with no dictionary-order tricks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    #[default]
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    /// Fixed, process-wide severity score table.
    pub fn score(self) -> u8 {
        match self {
            SeverityTier::Critical => 90, // life-threatening (celiac, allergies)
            SeverityTier::High => 80,     // major health risk
            SeverityTier::Medium => 60,   // moderate risk
            SeverityTier::Low => 40,      // minor concern
            SeverityTier::Safe => 10,     // safe or beneficial
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Critical => "critical",
            SeverityTier::High => "high",
            SeverityTier::Medium => "medium",
            SeverityTier::Low => "low",
            SeverityTier::Safe => "safe",
        }
    }
}
