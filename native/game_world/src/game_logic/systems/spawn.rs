//! Path: native/game_world/src/game_logic/systems/spawn.rs
//! Summary: 通常敵の定期スポーンとボスの時刻スポーン

use crate::world::{FrameEvent, GameWorld};
use game_core::enemy::EnemyKind;
use game_core::util::spawn_position_around_player;

pub(crate) fn update_spawns(w: &mut GameWorld) {
    let now = w.now_ms;

    // 間隔ごとに 1 回、難易度の spawn_rate で抽選する
    if now.saturating_sub(w.last_enemy_spawn) >= w.config.spawn.enemy_interval_ms {
        w.last_enemy_spawn = now;
        if w.rng.next_f32() < w.difficulty.spawn_rate {
            if let Some(point) = w.rng.choose(&w.spawn_points).copied() {
                let kind = EnemyKind::random_regular(&mut w.rng);
                w.spawn_enemy(kind, point);
            }
        }
    }

    if now >= w.next_boss_at {
        let pos = spawn_position_around_player(
            &mut w.rng,
            w.player.center(),
            w.config.spawn.boss_distance,
        );
        w.spawn_enemy(EnemyKind::Boss, pos);
        w.next_boss_at = now + w.config.spawn.boss_interval_ms;
        w.frame_events.push(FrameEvent::BossSpawned);
        log::info!("boss spawned at {}ms, next at {}ms", now, w.next_boss_at);
    }
}
