//! Path: native/game_world/src/game_logic/systems/enemies.rs
//! Summary: 敵の追跡・接触攻撃・フェードアウト完了時の武器ドロップ

use super::collision::move_enemy;
use super::player::push_player_died;
use crate::world::{Damageable, FrameEvent, GameWorld, WeaponCarrier};
use game_core::constants::ENEMY_ATTACK_RADIUS;
use game_core::enemy::EnemyKind;
use game_core::util::choose_drop_kind;
use game_core::weapon::Weapon;

pub(crate) fn update_enemies(w: &mut GameWorld, dt: f32) {
    let now = w.now_ms;
    let player_center = w.player.center();
    let player_hitbox = w.player.hitbox;

    let mut faded: Vec<usize> = Vec::new();
    let mut attacks: Vec<(i32, EnemyKind)> = Vec::new();

    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let enemy = &mut w.enemies.slots[i];
        if enemy.is_dying() {
            if enemy.fade_finished(now) {
                faded.push(i);
            }
            continue;
        }

        // プレイヤーと中心が一致しているときは向きが決まらないのでランダムに動く
        let dir = match (player_center - enemy.center()).try_normalize() {
            Some(d) => d,
            None => w.rng.unit_vector(),
        };
        let distance = enemy.speed * dt;
        move_enemy(
            &w.collision,
            enemy,
            dir,
            distance,
            &player_hitbox,
            &mut w.obstacle_query_buf,
        );
        enemy.animate(dt);

        if enemy.center().distance(player_center) <= ENEMY_ATTACK_RADIUS && enemy.can_attack(now) {
            enemy.last_attack = Some(now);
            attacks.push((enemy.damage, enemy.kind));
        }
    }

    for (damage, enemy_kind) in attacks {
        if !w.player.alive {
            break;
        }
        let died = w.player.take_damage(damage, now);
        w.frame_events.push(FrameEvent::PlayerDamaged { damage, enemy_kind });
        if died {
            push_player_died(w);
        }
    }

    for i in faded {
        finish_enemy(w, i);
    }
}

/// フェードアウトを終えた敵を消す。確率で未所持の武器を落とす
fn finish_enemy(w: &mut GameWorld, i: usize) {
    let Some(enemy) = w.enemies.get(i) else {
        return;
    };
    let pos = enemy.center();
    let chance = enemy.weapon_drop_chance;

    if w.rng.next_f32() < chance {
        let owned = w.player.owned_kinds();
        if let Some(weapon_kind) = choose_drop_kind(&mut w.rng, &owned) {
            w.items.spawn(pos, Weapon::new(weapon_kind), w.now_ms);
            w.frame_events.push(FrameEvent::WeaponItemSpawned { weapon_kind });
        }
    }
    w.enemies.kill(i);
}
