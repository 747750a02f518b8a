//! Experience balance and the four global upgrade tracks.
//!
//! HP upgrades are applied to live towers once, at purchase time (see
//! `purchase::buy_upgrade`). The other three tracks are read every tick
//! through [`Economy::effective_stats`], so they apply to every tower
//! regardless of when it was placed.

use serde::{Deserialize, Serialize};

use outpost_core::components::Tower;
use outpost_core::constants::*;
use outpost_core::enums::UpgradeTrack;
use outpost_core::error::CommandError;
use outpost_core::state::{UpgradeView, UpgradesView};

/// Level and next-purchase cost of one upgrade track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeTrackState {
    pub level: u32,
    pub cost: u32,
}

impl Default for UpgradeTrackState {
    fn default() -> Self {
        Self {
            level: 0,
            cost: UPGRADE_BASE_COST,
        }
    }
}

impl UpgradeTrackState {
    /// `1 + level * 1%`.
    pub fn multiplier(&self) -> f64 {
        1.0 + self.level as f64 * UPGRADE_STEP
    }

    fn view(&self) -> UpgradeView {
        UpgradeView {
            level: self.level,
            cost: self.cost,
        }
    }
}

/// A tower's stats with the current global upgrades applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    pub range: f64,
    pub fire_rate: f64,
    pub attack: i32,
}

impl EffectiveStats {
    /// Seconds that must pass between two shots.
    pub fn cooldown_secs(&self) -> f64 {
        1.0 / self.fire_rate
    }
}

#[derive(Debug, Clone)]
pub struct Economy {
    experience: u32,
    hp: UpgradeTrackState,
    damage: UpgradeTrackState,
    attack_speed: UpgradeTrackState,
    range: UpgradeTrackState,
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(STARTING_EXPERIENCE)
    }
}

impl Economy {
    pub fn new(starting_experience: u32) -> Self {
        Self {
            experience: starting_experience,
            hp: UpgradeTrackState::default(),
            damage: UpgradeTrackState::default(),
            attack_speed: UpgradeTrackState::default(),
            range: UpgradeTrackState::default(),
        }
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn award(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Deduct `cost`, or reject without touching the balance.
    pub fn spend(&mut self, cost: u32) -> Result<(), CommandError> {
        if self.experience < cost {
            return Err(CommandError::InsufficientExperience {
                have: self.experience,
                need: cost,
            });
        }
        self.experience -= cost;
        Ok(())
    }

    pub fn track(&self, track: UpgradeTrack) -> &UpgradeTrackState {
        match track {
            UpgradeTrack::Hp => &self.hp,
            UpgradeTrack::Damage => &self.damage,
            UpgradeTrack::AttackSpeed => &self.attack_speed,
            UpgradeTrack::Range => &self.range,
        }
    }

    pub fn track_mut(&mut self, track: UpgradeTrack) -> &mut UpgradeTrackState {
        match track {
            UpgradeTrack::Hp => &mut self.hp,
            UpgradeTrack::Damage => &mut self.damage,
            UpgradeTrack::AttackSpeed => &mut self.attack_speed,
            UpgradeTrack::Range => &mut self.range,
        }
    }

    /// Buy one level of `track`. Returns the new level.
    pub fn purchase(&mut self, track: UpgradeTrack) -> Result<u32, CommandError> {
        let cost = self.track(track).cost;
        self.spend(cost)?;
        let state = self.track_mut(track);
        state.level += 1;
        state.cost += UPGRADE_COST_INCREMENT;
        Ok(state.level)
    }

    /// Apply the damage, attack speed and range tracks to a tower's base stats.
    pub fn effective_stats(&self, tower: &Tower) -> EffectiveStats {
        EffectiveStats {
            range: tower.range * self.range.multiplier(),
            fire_rate: tower.fire_rate * self.attack_speed.multiplier(),
            attack: (tower.attack as f64 * self.damage.multiplier()) as i32,
        }
    }

    pub fn upgrades_view(&self) -> UpgradesView {
        UpgradesView {
            hp: self.hp.view(),
            damage: self.damage.view(),
            attack_speed: self.attack_speed.view(),
            range: self.range.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower(range: f64, fire_rate: f64, attack: i32) -> Tower {
        Tower {
            preset: 0,
            range,
            fire_rate,
            attack,
            base_health: 100,
            current_health: 100,
            last_shot_secs: 0.0,
        }
    }

    #[test]
    fn tracks_start_at_level_zero_cost_fifty() {
        let economy = Economy::default();
        assert_eq!(economy.experience(), STARTING_EXPERIENCE);
        for track in UpgradeTrack::ALL {
            assert_eq!(economy.track(track).level, 0);
            assert_eq!(economy.track(track).cost, 50);
        }
    }

    #[test]
    fn purchase_increments_level_and_cost() {
        let mut economy = Economy::new(200);
        assert_eq!(economy.purchase(UpgradeTrack::Damage), Ok(1));
        assert_eq!(economy.experience(), 150);
        assert_eq!(economy.track(UpgradeTrack::Damage).cost, 60);

        assert_eq!(economy.purchase(UpgradeTrack::Damage), Ok(2));
        assert_eq!(economy.experience(), 90);
        assert_eq!(economy.track(UpgradeTrack::Damage).cost, 70);

        // Other tracks untouched
        assert_eq!(economy.track(UpgradeTrack::Range).level, 0);
    }

    #[test]
    fn purchase_rejected_when_short() {
        let mut economy = Economy::new(49);
        let err = economy.purchase(UpgradeTrack::Range).unwrap_err();
        assert_eq!(err, CommandError::InsufficientExperience { have: 49, need: 50 });
        assert_eq!(economy.experience(), 49);
        assert_eq!(*economy.track(UpgradeTrack::Range), UpgradeTrackState::default());
    }

    #[test]
    fn purchase_with_exact_balance_succeeds() {
        let mut economy = Economy::new(50);
        assert!(economy.purchase(UpgradeTrack::Hp).is_ok());
        assert_eq!(economy.experience(), 0);
    }

    #[test]
    fn effective_stats_follow_current_levels() {
        let mut economy = Economy::new(0);
        let t = tower(150.0, 1.0, 50);
        assert_eq!(
            economy.effective_stats(&t),
            EffectiveStats {
                range: 150.0,
                fire_rate: 1.0,
                attack: 50
            }
        );

        economy.track_mut(UpgradeTrack::Range).level = 10;
        economy.track_mut(UpgradeTrack::AttackSpeed).level = 100;
        economy.track_mut(UpgradeTrack::Damage).level = 3;
        let stats = economy.effective_stats(&t);
        assert!((stats.range - 165.0).abs() < 1e-9);
        assert!((stats.fire_rate - 2.0).abs() < 1e-9);
        assert!((stats.cooldown_secs() - 0.5).abs() < 1e-9);
        // 50 * 1.03 = 51.5 -> 51
        assert_eq!(stats.attack, 51);
    }

    #[test]
    fn hp_level_does_not_touch_effective_stats() {
        let mut economy = Economy::new(0);
        economy.track_mut(UpgradeTrack::Hp).level = 50;
        let stats = economy.effective_stats(&tower(100.0, 2.0, 70));
        assert_eq!(stats.attack, 70);
        assert_eq!(stats.range, 100.0);
    }

    #[test]
    fn award_saturates() {
        let mut economy = Economy::new(u32::MAX - 5);
        economy.award(KILL_REWARD);
        assert_eq!(economy.experience(), u32::MAX);
    }
}
