use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

use npc_core::{
    Blackboard, Coord, EntityId, Operator, OperatorStatus, TickContext, WorldMut, WorldView, OWNER,
};
use npc_ops::{
    ConfigError, EffectRef, EffectsWorldMut, EntityWorldView, LookupWorldView, MagnetPickupOperator,
    StorageWorldMut, StorageWorldView,
};

const BOT: EntityId = EntityId::new(1);
const COOLDOWN_KEY: &str = "MagnetCooldown";

#[derive(Default)]
struct MagnetWorld {
    space: bool,
    positions: BTreeMap<EntityId, Coord>,
    on_ground: BTreeSet<EntityId>,
    blocked: BTreeSet<EntityId>,
    storage: Vec<EntityId>,
    effects: u32,
    scans: Cell<u32>,
}

impl MagnetWorld {
    fn place(&mut self, entity: EntityId, x: f32, y: f32) {
        self.positions.insert(entity, Coord::new(x, y));
    }
}

impl WorldView for MagnetWorld {}
impl WorldMut for MagnetWorld {}

impl EntityWorldView for MagnetWorld {
    fn is_alive(&self, _entity: EntityId) -> bool {
        true
    }

    fn has_tag(&self, _entity: EntityId, _tag: &str) -> bool {
        false
    }
}

impl StorageWorldView for MagnetWorld {
    fn contained_items(&self, _entity: EntityId) -> Option<Vec<EntityId>> {
        Some(self.storage.clone())
    }

    fn has_space(&self, _entity: EntityId) -> bool {
        self.space
    }

    fn can_insert(&self, _storage: EntityId, _item: EntityId) -> bool {
        self.space
    }

    fn allows_item(&self, _storage: EntityId, item: EntityId) -> bool {
        !self.blocked.contains(&item)
    }

    fn is_receptacle(&self, _entity: EntityId) -> bool {
        false
    }
}

impl StorageWorldMut for MagnetWorld {
    fn remove_item(&mut self, _from: EntityId, item: EntityId) -> bool {
        let Some(index) = self.storage.iter().position(|&held| held == item) else {
            return false;
        };
        self.storage.remove(index);
        true
    }

    fn insert_item(&mut self, _into: EntityId, item: EntityId) -> bool {
        self.storage.push(item);
        true
    }
}

impl LookupWorldView for MagnetWorld {
    fn entities_in_range(&self, origin: EntityId, range: f32) -> Vec<EntityId> {
        self.scans.set(self.scans.get() + 1);
        let Some(center) = self.positions.get(&origin) else {
            return Vec::new();
        };
        self.positions
            .iter()
            .filter(|(_, position)| center.distance(**position) <= range)
            .map(|(&entity, _)| entity)
            .collect()
    }

    fn is_on_ground(&self, entity: EntityId) -> bool {
        self.on_ground.contains(&entity)
    }
}

impl EffectsWorldMut for MagnetWorld {
    fn play_effect(&mut self, _effect: &EffectRef, _source: EntityId) {
        self.effects += 1;
    }
}

fn operator() -> MagnetPickupOperator {
    MagnetPickupOperator::new(2.0, 1.0, COOLDOWN_KEY, Some(EffectRef::new("effects/pickup")))
        .unwrap()
}

fn bb_with_owner() -> Blackboard {
    let mut bb = Blackboard::new();
    bb.set(OWNER, BOT);
    bb
}

fn ctx(tick: u64, dt_seconds: f32) -> TickContext {
    TickContext { tick, dt_seconds }
}

#[test]
fn scans_are_rate_limited_to_the_configured_interval() {
    let mut world = MagnetWorld {
        space: true,
        ..MagnetWorld::default()
    };
    world.place(BOT, 0.0, 0.0);
    let mut bb = bb_with_owner();
    let magnet = operator();

    for tick in 0..5 {
        let status = magnet.update(&ctx(tick, 0.4), &mut world, &mut bb);
        assert_eq!(status, OperatorStatus::Continuing);
    }

    // First tick scans immediately; the 1s cooldown then admits one more
    // scan within the remaining 1.6s of simulated time.
    assert_eq!(world.scans.get(), 2);
}

#[test]
fn ineligible_items_are_skipped() {
    let debris = EntityId::new(10);
    let held = EntityId::new(11);
    let cursed = EntityId::new(12);
    let distant = EntityId::new(13);

    let mut world = MagnetWorld {
        space: true,
        ..MagnetWorld::default()
    };
    world.place(BOT, 0.0, 0.0);
    world.place(debris, 1.0, 0.0);
    world.place(held, 0.5, 0.0);
    world.place(cursed, 1.5, 0.0);
    world.place(distant, 10.0, 0.0);

    // `held` is airborne (carried), `cursed` fails the whitelist, `distant`
    // is outside the scan radius, and the owner itself is never a pickup
    // candidate.
    world.on_ground.insert(debris);
    world.on_ground.insert(cursed);
    world.on_ground.insert(distant);
    world.blocked.insert(cursed);

    let mut bb = bb_with_owner();
    let status = operator().update(&ctx(0, 0.1), &mut world, &mut bb);

    assert_eq!(status, OperatorStatus::Continuing);
    assert_eq!(world.storage, vec![debris]);
    assert_eq!(world.effects, 1);
}

#[test]
fn pickup_cue_plays_once_per_scan() {
    let a = EntityId::new(10);
    let b = EntityId::new(11);

    let mut world = MagnetWorld {
        space: true,
        ..MagnetWorld::default()
    };
    world.place(BOT, 0.0, 0.0);
    world.place(a, 1.0, 0.0);
    world.place(b, 0.0, 1.0);
    world.on_ground.insert(a);
    world.on_ground.insert(b);

    let mut bb = bb_with_owner();
    operator().update(&ctx(0, 0.1), &mut world, &mut bb);

    assert_eq!(world.storage, vec![a, b]);
    assert_eq!(world.effects, 1);
}

#[test]
fn full_storage_skips_the_scan_but_consumes_the_cooldown() {
    let mut world = MagnetWorld {
        space: false,
        ..MagnetWorld::default()
    };
    world.place(BOT, 0.0, 0.0);
    world.place(EntityId::new(10), 1.0, 0.0);
    world.on_ground.insert(EntityId::new(10));
    let mut bb = bb_with_owner();
    let magnet = operator();

    let status = magnet.update(&ctx(0, 0.1), &mut world, &mut bb);

    assert_eq!(status, OperatorStatus::Continuing);
    assert_eq!(world.scans.get(), 0);
    assert!(world.storage.is_empty());
    assert_eq!(bb.get::<f64>(COOLDOWN_KEY), Some(1.0));

    // Space frees up, but the cooldown still gates the next scan.
    world.space = true;
    magnet.update(&ctx(1, 0.1), &mut world, &mut bb);
    assert_eq!(world.scans.get(), 0);
}

#[test]
fn missing_owner_fails() {
    let mut world = MagnetWorld {
        space: true,
        ..MagnetWorld::default()
    };
    let mut bb = Blackboard::new();

    assert_eq!(
        operator().update(&ctx(0, 0.1), &mut world, &mut bb),
        OperatorStatus::Failed
    );
}

#[test]
fn configuration_is_validated_up_front() {
    assert_eq!(
        MagnetPickupOperator::new(0.0, 1.0, COOLDOWN_KEY, None).unwrap_err(),
        ConfigError::NonPositiveParameter("range")
    );
    assert_eq!(
        MagnetPickupOperator::new(2.0, -1.0, COOLDOWN_KEY, None).unwrap_err(),
        ConfigError::NonPositiveParameter("scan_interval")
    );
    assert_eq!(
        MagnetPickupOperator::new(2.0, 1.0, "", None).unwrap_err(),
        ConfigError::MissingParameter("cooldown_key")
    );

    let magnet = operator();
    assert_eq!(magnet.range(), 2.0);
    assert_eq!(magnet.scan_interval(), 1.0);
}
