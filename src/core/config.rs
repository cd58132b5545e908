//! Combat configuration.
//!
//! The run layer decides how generous a combat is (energy, hand size) and
//! which act it takes place in. The engine reads these numbers and never
//! hardcodes them.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one combat.
///
/// ```
/// use forge_combat::core::CombatConfig;
///
/// let config = CombatConfig::default().with_hand_size(6).with_act(2);
/// assert_eq!(config.max_energy, 3);
/// assert_eq!(config.hand_size, 6);
/// assert_eq!(config.act, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Energy restored at the start of every player turn.
    pub max_energy: u32,

    /// Cards drawn at the start of every player turn.
    pub hand_size: usize,

    /// Act the combat takes place in (1-based).
    pub act: u32,

    /// Extra enemy max HP, in percent, per act above an enemy's home act.
    pub hp_scaling_percent_per_act: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            max_energy: 3,
            hand_size: 5,
            act: 1,
            hp_scaling_percent_per_act: 10,
        }
    }
}

impl CombatConfig {
    /// Set energy per turn.
    #[must_use]
    pub fn with_max_energy(mut self, energy: u32) -> Self {
        self.max_energy = energy;
        self
    }

    /// Set cards drawn per turn.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the act.
    #[must_use]
    pub fn with_act(mut self, act: u32) -> Self {
        self.act = act.max(1);
        self
    }

    /// Set per-act HP scaling.
    #[must_use]
    pub fn with_hp_scaling(mut self, percent_per_act: u32) -> Self {
        self.hp_scaling_percent_per_act = percent_per_act;
        self
    }

    /// Max HP for an enemy whose definition belongs to `home_act`.
    ///
    /// Enemies fought in a later act than their own gain
    /// `hp_scaling_percent_per_act` percent per act of difference.
    #[must_use]
    pub fn scaled_hp(&self, base_hp: u32, home_act: u32) -> u32 {
        let acts_above = self.act.saturating_sub(home_act);
        let percent = acts_above
            .saturating_mul(self.hp_scaling_percent_per_act)
            .saturating_add(100);
        base_hp.saturating_mul(percent) / 100
    }
}
