//! Path: native/game_world/src/game_logic/systems/collision.rs
//! Summary: プレイヤーと敵の 2 フェーズ移動（障害物・相手エンティティへの押し戻し）

use crate::world::{Enemy, GameWorld};
use game_core::geometry::{Rect, Vec2};
use game_core::physics::obstacle_resolve::{clamp_against, move_two_phase, resolve_obstacles_axis};
use game_core::physics::spatial_hash::CollisionWorld;

/// プレイヤーは障害物と生存中の敵のヒットボックスに阻まれる
pub(crate) fn move_player(w: &mut GameWorld, dir: Vec2, distance: f32) {
    if dir == Vec2::ZERO || distance <= 0.0 {
        return;
    }
    let mut hitbox = w.player.hitbox;
    let collision = &w.collision;
    let enemies = &w.enemies;
    let obstacle_buf = &mut w.obstacle_query_buf;
    let enemy_buf = &mut w.enemy_query_buf;
    move_two_phase(&mut hitbox, dir, distance, |hb, axis| {
        resolve_obstacles_axis(collision, hb, axis, dir, obstacle_buf);
        collision.dynamic.query_rect_into(hb, enemy_buf);
        for &ei in enemy_buf.iter() {
            if let Some(enemy) = enemies.get_living(ei) {
                clamp_against(hb, &enemy.hitbox, axis, dir);
            }
        }
    });
    w.player.set_hitbox(hitbox);
}

/// 敵は障害物とプレイヤーのヒットボックスに阻まれる（敵同士は重なってよい）
pub(crate) fn move_enemy(
    collision: &CollisionWorld,
    enemy: &mut Enemy,
    dir: Vec2,
    distance: f32,
    player_hitbox: &Rect,
    buf: &mut Vec<usize>,
) {
    let mut hitbox = enemy.hitbox;
    move_two_phase(&mut hitbox, dir, distance, |hb, axis| {
        resolve_obstacles_axis(collision, hb, axis, dir, buf);
        clamp_against(hb, player_hitbox, axis, dir);
    });
    enemy.set_hitbox(hitbox);
}
