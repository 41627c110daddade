//! Path: native/game_world/src/game_logic/systems/weapons.rs
//! Summary: 発射結果の適用（弾丸の生成・剣の扇形判定）

use super::leveling::grant_kill;
use crate::world::{Damageable, GameWorld};
use game_core::weapon::{FireAction, SectorSweep, WeaponKind};

pub(crate) fn apply_fire_action(w: &mut GameWorld, action: FireAction) {
    let now = w.now_ms;
    match action {
        FireAction::Bullets(spawns) => {
            for spawn in &spawns {
                w.bullets.spawn(spawn, now);
            }
        }
        FireAction::Sweep(sweep) => apply_sweep(w, &sweep),
    }
}

/// 扇形に入った生存中の敵すべてにダメージを与える
fn apply_sweep(w: &mut GameWorld, sweep: &SectorSweep) {
    let now = w.now_ms;
    w.collision
        .dynamic
        .query_rect_into(&sweep.area(), &mut w.enemy_query_buf);

    let mut kills = Vec::new();
    for &ei in w.enemy_query_buf.iter() {
        let Some(enemy) = w.enemies.get_mut(ei) else {
            continue;
        };
        if enemy.is_dying() || !sweep.hits(&enemy.rect) {
            continue;
        }
        if enemy.take_damage(sweep.damage, now) {
            kills.push((enemy.kind, enemy.exp_reward));
        }
    }
    for (kind, exp) in kills {
        grant_kill(w, kind, exp, WeaponKind::Sword);
    }
}
