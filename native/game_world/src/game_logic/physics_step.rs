//! Path: native/game_world/src/game_logic/physics_step.rs
//! Summary: 1 フレーム分のステップ（スポーン → プレイヤー → 敵 → 弾 → アイテム → 死亡判定）

use super::systems::enemies::update_enemies;
use super::systems::items::update_items;
use super::systems::player::{check_player_death, update_player};
use super::systems::projectiles::update_projectiles_and_enemy_hits;
use super::systems::spawn::update_spawns;
use crate::input::InputSnapshot;
use crate::world::GameWorld;
use game_core::constants::FRAME_BUDGET_MS;

pub(crate) fn physics_step_inner(w: &mut GameWorld, input: &InputSnapshot, delta_ms: u64) {
    if !w.player.alive {
        return;
    }
    // trace にしておき、RUST_LOG=trace のときだけ毎フレーム出力する
    log::trace!("physics_step: delta={}ms frame_id={}", delta_ms, w.frame_id);
    let t_start = std::time::Instant::now();

    w.frame_id += 1;
    w.now_ms += delta_ms;
    let dt = delta_ms as f32 / 1000.0;

    // ── スポーン（通常敵 + ボス） ───────────────────────────────
    update_spawns(w);

    // プレイヤーの押し戻しと剣の判定に使う
    w.rebuild_collision();

    // ── プレイヤー（切替 → 照準 → 発射 → 移動 → 投擲 → 拾得） ────
    update_player(w, input, dt);

    // ── 敵（追跡・攻撃・フェードアウト・ドロップ） ───────────────
    update_enemies(w, dt);

    // ── 弾丸移動 + 弾丸 vs 敵（マスク判定） ─────────────────────
    update_projectiles_and_enemy_hits(w, dt);

    // ── アイテム（浮遊・寿命） ──────────────────────────────────
    update_items(w, dt);

    check_player_death(w);

    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
    w.last_frame_time_ms = elapsed_ms;
    if elapsed_ms > FRAME_BUDGET_MS as f64 {
        log::warn!(
            "frame budget exceeded: {:.2}ms (enemies: {}, bullets: {})",
            elapsed_ms,
            w.enemies.count,
            w.bullets.count
        );
    }
}
