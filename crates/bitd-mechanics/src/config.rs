//! Roll settings.

/// Feature toggles for the opposed roll types.
///
/// Action and threat rolls are optional table rules; hosts switch them off
/// per game. The other roll types are always offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSettings {
    /// Offer the action roll (position and effect).
    pub action_roll: bool,
    /// Offer the threat roll (position and extra threats).
    pub threat_roll: bool,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            action_roll: true,
            threat_roll: true,
        }
    }
}

impl RollSettings {
    /// Enable or disable the action roll.
    pub fn with_action_roll(mut self, enabled: bool) -> Self {
        self.action_roll = enabled;
        self
    }

    /// Enable or disable the threat roll.
    pub fn with_threat_roll(mut self, enabled: bool) -> Self {
        self.threat_roll = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offers_both() {
        let s = RollSettings::default();
        assert!(s.action_roll);
        assert!(s.threat_roll);
    }

    #[test]
    fn builder_methods() {
        let s = RollSettings::default()
            .with_action_roll(false)
            .with_threat_roll(false);
        assert!(!s.action_roll);
        assert!(!s.threat_roll);
    }
}
