//! Tower purchases and upgrade purchases.
//!
//! Every check runs before any state changes, so a rejected command leaves
//! the world and the economy exactly as they were.

use hecs::{Entity, World};

use outpost_core::components::Tower;
use outpost_core::constants::{MIN_TOWER_SPACING, UPGRADE_STEP};
use outpost_core::enums::UpgradeTrack;
use outpost_core::error::CommandError;
use outpost_core::presets::tower_preset;
use outpost_core::types::Position;

use crate::economy::Economy;
use crate::world_setup::{self, ordered_positions};

/// Buy tower preset `preset_index` and place it at `position`.
///
/// `last_shot_secs` seeds the new tower's fire cooldown: pass the current
/// sim time to make it wait one full cooldown, or negative infinity to let
/// it fire on its first tick.
pub fn place_tower(
    world: &mut World,
    economy: &mut Economy,
    next_spawn_order: &mut u64,
    preset_index: usize,
    position: Position,
    last_shot_secs: f64,
) -> Result<Entity, CommandError> {
    let preset = tower_preset(preset_index).ok_or(CommandError::UnknownPreset {
        index: preset_index,
    })?;

    if let Some(distance) = ordered_positions::<Tower>(world)
        .iter()
        .map(|(_, existing)| position.distance_to(existing))
        .find(|distance| *distance < MIN_TOWER_SPACING)
    {
        return Err(CommandError::PlacementTooClose {
            distance,
            min: MIN_TOWER_SPACING,
        });
    }

    economy.spend(preset.cost)?;

    Ok(world_setup::spawn_tower(
        world,
        next_spawn_order,
        position,
        preset_index,
        preset,
        last_shot_secs,
    ))
}

/// Buy one level of `track`. Returns the new level.
///
/// The HP track scales the stored health of every tower alive right now by
/// one step, compounding on whatever the towers currently hold. Towers
/// placed later start from their preset health.
pub fn buy_upgrade(
    world: &mut World,
    economy: &mut Economy,
    track: UpgradeTrack,
) -> Result<u32, CommandError> {
    let level = economy.purchase(track)?;

    if track == UpgradeTrack::Hp {
        let factor = 1.0 + UPGRADE_STEP;
        for (_entity, tower) in world.query_mut::<&mut Tower>() {
            tower.base_health = (tower.base_health as f64 * factor) as i32;
            tower.current_health = (tower.current_health as f64 * factor) as i32;
        }
    }

    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower_health(world: &World) -> Vec<(i32, i32)> {
        let mut query = world.query::<&Tower>();
        query
            .iter()
            .map(|(_, tower)| (tower.base_health, tower.current_health))
            .collect()
    }

    #[test]
    fn placement_spends_and_spawns() {
        let mut world = World::new();
        let mut economy = Economy::new(100);
        let mut order = 0;

        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(400.0, 300.0), 0.0)
            .unwrap();
        assert_eq!(economy.experience(), 80);
        assert_eq!(world_setup::count::<Tower>(&world), 1);
    }

    #[test]
    fn placement_too_close_changes_nothing() {
        let mut world = World::new();
        let mut economy = Economy::new(100);
        let mut order = 0;

        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(400.0, 300.0), 0.0)
            .unwrap();
        let err = place_tower(
            &mut world,
            &mut economy,
            &mut order,
            0,
            Position::new(410.0, 305.0),
            0.0,
        )
        .unwrap_err();

        assert!(matches!(err, CommandError::PlacementTooClose { .. }));
        assert_eq!(economy.experience(), 80);
        assert_eq!(world_setup::count::<Tower>(&world), 1);
    }

    #[test]
    fn placement_exactly_at_spacing_is_allowed() {
        let mut world = World::new();
        let mut economy = Economy::new(100);
        let mut order = 0;

        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(100.0, 100.0), 0.0)
            .unwrap();
        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(150.0, 100.0), 0.0)
            .unwrap();
        assert_eq!(world_setup::count::<Tower>(&world), 2);
        assert_eq!(economy.experience(), 60);
    }

    #[test]
    fn placement_without_funds_changes_nothing() {
        let mut world = World::new();
        let mut economy = Economy::new(29);
        let mut order = 0;

        let err = place_tower(&mut world, &mut economy, &mut order, 1, Position::new(100.0, 100.0), 0.0)
            .unwrap_err();
        assert_eq!(err, CommandError::InsufficientExperience { have: 29, need: 30 });
        assert_eq!(economy.experience(), 29);
        assert_eq!(world_setup::count::<Tower>(&world), 0);
        assert_eq!(order, 0);
    }

    #[test]
    fn unknown_preset_rejected() {
        let mut world = World::new();
        let mut economy = Economy::new(100);
        let mut order = 0;

        let err = place_tower(&mut world, &mut economy, &mut order, 3, Position::new(100.0, 100.0), 0.0)
            .unwrap_err();
        assert_eq!(err, CommandError::UnknownPreset { index: 3 });
        assert_eq!(economy.experience(), 100);
    }

    #[test]
    fn hp_upgrades_compound_on_current_values() {
        let mut world = World::new();
        let mut economy = Economy::new(1_000);
        let mut order = 0;

        // Preset 1 has 150 health.
        place_tower(&mut world, &mut economy, &mut order, 1, Position::new(100.0, 100.0), 0.0)
            .unwrap();

        buy_upgrade(&mut world, &mut economy, UpgradeTrack::Hp).unwrap();
        // 150 * 1.01 = 151.5 -> 151
        assert_eq!(tower_health(&world), vec![(151, 151)]);

        buy_upgrade(&mut world, &mut economy, UpgradeTrack::Hp).unwrap();
        // 151 * 1.01 = 152.51 -> 152, not 150 * 1.02 = 153
        assert_eq!(tower_health(&world), vec![(152, 152)]);
        assert_eq!(economy.track(UpgradeTrack::Hp).level, 2);
    }

    #[test]
    fn hp_upgrade_does_not_reach_later_towers() {
        let mut world = World::new();
        let mut economy = Economy::new(1_000);
        let mut order = 0;

        buy_upgrade(&mut world, &mut economy, UpgradeTrack::Hp).unwrap();
        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(100.0, 100.0), 0.0)
            .unwrap();
        assert_eq!(tower_health(&world), vec![(100, 100)]);
    }

    #[test]
    fn hp_upgrade_scales_damaged_tower_proportionally() {
        let mut world = World::new();
        let mut economy = Economy::new(1_000);
        let mut order = 0;

        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(100.0, 100.0), 0.0)
            .unwrap();
        for (_entity, tower) in world.query_mut::<&mut Tower>() {
            tower.current_health = 60;
        }
        buy_upgrade(&mut world, &mut economy, UpgradeTrack::Hp).unwrap();
        // 100 -> 101, 60 * 1.01 = 60.6 -> 60
        assert_eq!(tower_health(&world), vec![(101, 60)]);
    }

    #[test]
    fn rejected_upgrade_leaves_towers_alone() {
        let mut world = World::new();
        let mut economy = Economy::new(20);
        let mut order = 0;

        place_tower(&mut world, &mut economy, &mut order, 0, Position::new(100.0, 100.0), 0.0)
            .unwrap();
        assert!(buy_upgrade(&mut world, &mut economy, UpgradeTrack::Hp).is_err());
        assert_eq!(tower_health(&world), vec![(100, 100)]);
        assert_eq!(economy.track(UpgradeTrack::Hp).cost, 50);
    }
}
