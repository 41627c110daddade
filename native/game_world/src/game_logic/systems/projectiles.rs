//! Path: native/game_world/src/game_logic/systems/projectiles.rs
//! Summary: 弾丸の移動・寿命と弾丸 vs 敵のピクセルマスク判定

use super::leveling::grant_kill;
use crate::world::{Damageable, GameWorld, WeaponCarrier};

pub(crate) fn update_projectiles_and_enemy_hits(w: &mut GameWorld, dt: f32) {
    let now = w.now_ms;
    let expired = w.bullets.update(dt, now);
    if expired > 0 {
        log::trace!("{} bullet(s) expired", expired);
    }

    // 敵は移動済みなので Spatial Hash を取り直す
    w.rebuild_collision();

    // 命中ダメージは発射時ではなく、現在装備している武器の値を使う
    let current_damage = w.player.current_weapon().map(|weapon| weapon.hit_damage());

    let mut kills = Vec::new();
    for bi in 0..w.bullets.len() {
        if !w.bullets.alive[bi] {
            continue;
        }
        let brect = w.bullets.rect(bi);
        w.collision
            .dynamic
            .query_rect_into(&brect, &mut w.enemy_query_buf);

        let mut hit = None;
        for &ei in w.enemy_query_buf.iter() {
            let Some(enemy) = w.enemies.get_living(ei) else {
                continue;
            };
            if !brect.intersects(&enemy.rect) {
                continue;
            }
            let mask = w.masks.enemy_frame(enemy.kind, enemy.frame_index());
            let ox = (brect.x - enemy.rect.x).floor() as i32;
            let oy = (brect.y - enemy.rect.y).floor() as i32;
            if mask.overlaps(w.masks.bullet(), ox, oy) {
                hit = Some(ei);
                break;
            }
        }

        // 弾丸は最初に当たった 1 体で消える
        if let Some(ei) = hit {
            let damage = current_damage.unwrap_or(w.bullets.damage[bi]);
            let weapon_kind = w.bullets.weapon_kind[bi];
            if let Some(enemy) = w.enemies.get_mut(ei) {
                if enemy.take_damage(damage, now) {
                    kills.push((enemy.kind, enemy.exp_reward, weapon_kind));
                }
            }
            w.bullets.kill(bi);
        }
    }

    for (kind, exp, weapon_kind) in kills {
        grant_kill(w, kind, exp, weapon_kind);
    }
}
