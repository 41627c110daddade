//! Path: native/game_core/src/entity_params.rs
//! Summary: 敵・武器の種類ごとのパラメータテーブル
//!
//! 種類（enum）の判別値をインデックスにした静的テーブルを引く。
//! 難易度による倍率は生成時に `DifficultyParams` で掛ける。

use crate::enemy::EnemyKind;
use crate::weapon::WeaponKind;

/// 敵のパラメータ（種類で参照）
#[derive(Clone, Copy, Debug)]
pub struct EnemyParams {
    pub speed:              f32,
    pub max_health:         i32,
    pub damage:             i32,
    pub attack_cooldown_ms: u64,
    pub exp_reward:         u32,
    pub sprite_w:           f32,
    pub sprite_h:           f32,
    /// HUD の HP バー幅（ボスだけ幅広）
    pub hp_bar_width:       f32,
    /// 歩行アニメーションのフレーム数
    pub frame_count:        usize,
    pub name:               &'static str,
}

static ENEMY_TABLE: [EnemyParams; 4] = [
    EnemyParams { speed: 200.0, max_health: 30,   damage: 5,  attack_cooldown_ms: 800,  exp_reward: 5,  sprite_w: 64.0,  sprite_h: 64.0,  hp_bar_width: 48.0,  frame_count: 4, name: "bat" },
    EnemyParams { speed: 125.0, max_health: 120,  damage: 15, attack_cooldown_ms: 1200, exp_reward: 10, sprite_w: 64.0,  sprite_h: 64.0,  hp_bar_width: 48.0,  frame_count: 4, name: "slime" },
    EnemyParams { speed: 175.0, max_health: 90,   damage: 10, attack_cooldown_ms: 1000, exp_reward: 10, sprite_w: 64.0,  sprite_h: 64.0,  hp_bar_width: 48.0,  frame_count: 4, name: "skeleton" },
    EnemyParams { speed: 150.0, max_health: 1000, damage: 50, attack_cooldown_ms: 1500, exp_reward: 50, sprite_w: 128.0, sprite_h: 128.0, hp_bar_width: 200.0, frame_count: 4, name: "boss" },
];

impl EnemyParams {
    pub fn get(kind: EnemyKind) -> &'static EnemyParams {
        &ENEMY_TABLE[kind as usize]
    }
}

// ─── WeaponParams ───────────────────────────────────────────────

/// 武器のパラメータ（種類で参照）
#[derive(Clone, Copy, Debug)]
pub struct WeaponParams {
    pub cooldown_ms:     u64,
    pub damage:          f32,
    /// 武器アンカーをプレイヤー中心から向き方向へずらす距離。
    /// 弾はアンカーからさらに同じ距離だけ先（銃口）で生成される。
    pub spawn_distance:  f32,
    /// 拡散角（度）。Shotgun はペレット間隔の 2 倍、AutoRifle はジッター幅
    pub spread_deg:      f32,
    pub name:            &'static str,
}

static WEAPON_TABLE: [WeaponParams; 4] = [
    WeaponParams { cooldown_ms: 500, damage: 15.0,  spawn_distance: 25.0, spread_deg: 0.0,  name: "pistol" },
    WeaponParams { cooldown_ms: 500, damage: 30.0,  spawn_distance: 30.0, spread_deg: 30.0, name: "shotgun" },
    WeaponParams { cooldown_ms: 100, damage: 35.0,  spawn_distance: 30.0, spread_deg: 5.0,  name: "auto_rifle" },
    WeaponParams { cooldown_ms: 400, damage: 100.0, spawn_distance: 30.0, spread_deg: 0.0,  name: "sword" },
];

impl WeaponParams {
    pub fn get(kind: WeaponKind) -> &'static WeaponParams {
        &WEAPON_TABLE[kind as usize]
    }
}

// ─── Sword ──────────────────────────────────────────────────────

/// 剣の扇形判定パラメータ
#[derive(Clone, Copy, Debug)]
pub struct SwordParams {
    pub range:       f32,
    pub angle_deg:   f32,
    pub duration_ms: u64,
}

pub static SWORD_PARAMS: SwordParams = SwordParams {
    range:       100.0,
    angle_deg:   60.0,
    duration_ms: 200,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_table_matches_kinds() {
        assert_eq!(EnemyParams::get(EnemyKind::Bat).max_health, 30);
        assert_eq!(EnemyParams::get(EnemyKind::Slime).attack_cooldown_ms, 1200);
        assert_eq!(EnemyParams::get(EnemyKind::Skeleton).damage, 10);
        assert_eq!(EnemyParams::get(EnemyKind::Boss).exp_reward, 50);
        assert_eq!(EnemyParams::get(EnemyKind::Boss).hp_bar_width, 200.0);
    }

    #[test]
    fn weapon_table_matches_kinds() {
        assert_eq!(WeaponParams::get(WeaponKind::Pistol).cooldown_ms, 500);
        assert_eq!(WeaponParams::get(WeaponKind::AutoRifle).cooldown_ms, 100);
        assert_eq!(WeaponParams::get(WeaponKind::Sword).damage, 100.0);
        assert_eq!(WeaponParams::get(WeaponKind::Shotgun).name, "shotgun");
    }
}
