//! Path: native/game_world/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（HUD・統計用に毎フレーム drain される）

use game_core::enemy::EnemyKind;
use game_core::weapon::WeaponKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FrameEvent {
    /// 剣による撃破では `weapon_kind` は Sword
    EnemyKilled       { enemy_kind: EnemyKind, weapon_kind: WeaponKind, exp_reward: u32 },
    PlayerDamaged     { damage: i32, enemy_kind: EnemyKind },
    LevelUp           { new_level: u32 },
    WeaponDropped     { weapon_kind: WeaponKind },
    WeaponPickedUp    { weapon_kind: WeaponKind },
    WeaponItemSpawned { weapon_kind: WeaponKind },
    BossSpawned,
    PlayerDied        { survival_ms: u64 },
}
