//! Path: native/game_world/src/game_logic/systems/leveling.rs
//! Summary: 撃破時の経験値付与とレベルアップイベント

use crate::world::{FrameEvent, GameWorld};
use game_core::enemy::EnemyKind;
use game_core::weapon::WeaponKind;

/// 敵の死亡遷移 1 回につき 1 度だけ呼ぶ
pub(crate) fn grant_kill(
    w: &mut GameWorld,
    enemy_kind: EnemyKind,
    exp_reward: u32,
    weapon_kind: WeaponKind,
) {
    w.kill_count += 1;
    w.frame_events.push(FrameEvent::EnemyKilled {
        enemy_kind,
        weapon_kind,
        exp_reward,
    });
    let from = w.player.level;
    let gained = w.player.add_experience(exp_reward);
    for n in 1..=gained {
        w.frame_events.push(FrameEvent::LevelUp { new_level: from + n });
    }
}
