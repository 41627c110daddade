//! Path: native/game_world/src/game_logic/systems/items.rs
//! Summary: 落ちている武器の浮遊・寿命と拾得

use crate::world::{FrameEvent, GameWorld};

pub(crate) fn update_items(w: &mut GameWorld, dt: f32) {
    let expired = w.items.update(dt, w.now_ms);
    if expired > 0 {
        log::debug!("{} weapon item(s) expired", expired);
    }
}

/// 投擲直後でなく、拾得半径内にあり、インベントリが受け入れられる武器を拾う
pub(crate) fn try_pickup(w: &mut GameWorld) {
    let now = w.now_ms;
    let hitbox = w.player.hitbox;
    for i in 0..w.items.len() {
        if !w.items.alive[i] || !w.items.can_pickup(i, now) || !w.items.in_pickup_range(i, &hitbox) {
            continue;
        }
        let acceptable = w.items.weapons[i]
            .as_ref()
            .is_some_and(|weapon| w.player.can_pickup(weapon));
        if !acceptable {
            continue;
        }
        let Some(weapon) = w.items.take(i) else {
            continue;
        };
        let weapon_kind = weapon.kind;
        if w.player.pickup_weapon(weapon).is_ok() {
            w.frame_events.push(FrameEvent::WeaponPickedUp { weapon_kind });
        }
    }
}
