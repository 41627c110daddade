//! Path: native/game_world/src/game_logic/systems/player.rs
//! Summary: プレイヤー入力の処理（切替 → 照準 → 発射 → 移動 → 投擲 → 拾得）と死亡判定

use super::collision::move_player;
use super::items::try_pickup;
use super::weapons::apply_fire_action;
use crate::input::InputSnapshot;
use crate::world::{FrameEvent, GameWorld};
use game_core::constants::ITEM_THROW_DISTANCE;
use game_core::weapon::aim_direction;

pub(crate) fn update_player(w: &mut GameWorld, input: &InputSnapshot, dt: f32) {
    let now = w.now_ms;

    if let Some(slot) = input.weapon_select {
        if !w.player.switch_weapon(slot) {
            log::trace!("weapon slot {} is empty", slot);
        }
    }

    // 所持している武器すべてのタイマーを進める（装備外でもクールダウンは明ける）
    for weapon in &mut w.player.weapons {
        weapon.update_timer(now);
    }

    let facing = aim_direction(input.pointer, input.viewport);
    w.player.facing = facing;
    let center = w.player.center();
    if let Some(weapon) = w.player.current_weapon_mut() {
        weapon.aim(center, facing);
    }

    if input.fire_held {
        let action = match w.player.current_weapon_mut() {
            Some(weapon) => weapon.fire(now, &mut w.rng),
            None => None,
        };
        if let Some(action) = action {
            apply_fire_action(w, action);
        }
    }

    let distance = w.player.speed * dt;
    move_player(w, input.move_direction(), distance);
    let center = w.player.center();
    if let Some(weapon) = w.player.current_weapon_mut() {
        weapon.aim(center, facing);
    }

    if input.drop_pressed {
        if let Some(weapon) = w.player.drop_weapon(now) {
            let weapon_kind = weapon.kind;
            w.items.spawn(center + facing * ITEM_THROW_DISTANCE, weapon, now);
            w.frame_events.push(FrameEvent::WeaponDropped { weapon_kind });
        }
    }

    try_pickup(w);
}

/// HP が 0 以下になっていれば一度だけ死亡イベントを出す
pub(crate) fn check_player_death(w: &mut GameWorld) {
    if w.player.check_death(w.now_ms) {
        push_player_died(w);
    }
}

pub(crate) fn push_player_died(w: &mut GameWorld) {
    let survival_ms = w.survival_ms();
    log::info!("player died after {}ms ({} kills)", survival_ms, w.kill_count);
    w.frame_events.push(FrameEvent::PlayerDied { survival_ms });
}
