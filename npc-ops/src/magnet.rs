use npc_core::{Blackboard, Operator, OperatorStatus, TickContext};

use crate::{ConfigError, EffectRef, EffectsWorldMut, LookupWorldView, StorageWorldMut};

/// Ambient pickup: periodically vacuums eligible ground items into the
/// owner's storage.
///
/// Scans run on a fixed interval rather than every tick. The countdown
/// lives in the blackboard under a configured key, since the operator value
/// is shared across agents and holds no per-agent state. This operator never
/// reaches a terminal status on its own; an external supervisor decides
/// when to stop scheduling it.
#[derive(Debug, Clone)]
pub struct MagnetPickupOperator {
    range: f32,
    scan_interval: f32,
    cooldown_key: String,
    pickup_effect: Option<EffectRef>,
}

impl MagnetPickupOperator {
    pub fn new(
        range: f32,
        scan_interval: f32,
        cooldown_key: impl Into<String>,
        pickup_effect: Option<EffectRef>,
    ) -> Result<Self, ConfigError> {
        if !(range > 0.0) {
            return Err(ConfigError::NonPositiveParameter("range"));
        }
        if !(scan_interval > 0.0) {
            return Err(ConfigError::NonPositiveParameter("scan_interval"));
        }

        let cooldown_key = cooldown_key.into();
        if cooldown_key.is_empty() {
            return Err(ConfigError::MissingParameter("cooldown_key"));
        }

        Ok(Self {
            range,
            scan_interval,
            cooldown_key,
            pickup_effect,
        })
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn scan_interval(&self) -> f32 {
        self.scan_interval
    }
}

impl<W> Operator<W> for MagnetPickupOperator
where
    W: StorageWorldMut + LookupWorldView + EffectsWorldMut + 'static,
{
    fn update(
        &self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> OperatorStatus {
        let Some(owner) = blackboard.owner() else {
            return OperatorStatus::Failed;
        };

        let remaining =
            blackboard.get::<f64>(&self.cooldown_key).unwrap_or(0.0) - f64::from(ctx.dt_seconds);
        if remaining > 0.0 {
            blackboard.set(self.cooldown_key.clone(), remaining);
            return OperatorStatus::Continuing;
        }

        // The cooldown is consumed even when the scan below finds no room.
        blackboard.set(self.cooldown_key.clone(), f64::from(self.scan_interval));

        if !world.has_space(owner) {
            return OperatorStatus::Continuing;
        }

        let mut played = false;
        for near in world.entities_in_range(owner, self.range) {
            if near == owner {
                continue;
            }
            if !world.allows_item(owner, near) {
                continue;
            }
            if !world.is_on_ground(near) {
                continue;
            }
            if !world.can_insert(owner, near) {
                continue;
            }
            if !world.insert_item(owner, near) {
                continue;
            }

            // Pickup cue for the first successful insertion per scan.
            if !played {
                if let Some(effect) = &self.pickup_effect {
                    world.play_effect(effect, owner);
                }
                played = true;
            }
        }

        OperatorStatus::Continuing
    }
}
