//! Path: native/game_core/src/config.rs
//! Summary: ラウンド設定（難易度・乱数シード・プレイヤー・スポーン・レベルアップ）の JSON 読み込み
//!
//! すべての項目に既定値があり、JSON には変更したい項目だけを書けばよい。

use crate::constants::*;
use crate::difficulty::Difficulty;
use crate::error::{CoreError, CoreResult};
use crate::weapon::WeaponKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルのパスを指定する環境変数
pub const CONFIG_ENV: &str = "SURVIVOR_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub rng_seed:   u64,
    pub player:     PlayerConfig,
    pub spawn:      SpawnConfig,
    pub leveling:   LevelingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed:            f32,
    pub health:           i32,
    /// 開始時の所持武器（先頭を装備）。上限を超えた分は無視する
    pub starting_weapons: Vec<WeaponKind>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub enemy_interval_ms:     u64,
    pub boss_initial_delay_ms: u64,
    pub boss_interval_ms:      u64,
    pub boss_distance:         f32,
    pub min_spawn_distance:    f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    pub first_threshold:  u32,
    pub threshold_growth: u32,
    pub health_bonus:     i32,
    pub health_cap:       i32,
    pub speed_bonus:      f32,
    pub damage_growth:    f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            rng_seed:   DEFAULT_RNG_SEED,
            player:     PlayerConfig::default(),
            spawn:      SpawnConfig::default(),
            leveling:   LevelingConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed:            PLAYER_SPEED,
            health:           PLAYER_HEALTH,
            starting_weapons: vec![WeaponKind::Pistol, WeaponKind::Sword, WeaponKind::AutoRifle],
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            enemy_interval_ms:     ENEMY_SPAWN_INTERVAL_MS,
            boss_initial_delay_ms: BOSS_INITIAL_DELAY_MS,
            boss_interval_ms:      BOSS_SPAWN_INTERVAL_MS,
            boss_distance:         BOSS_SPAWN_DISTANCE,
            min_spawn_distance:    MIN_SPAWN_DISTANCE,
        }
    }
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            first_threshold:  FIRST_LEVEL_THRESHOLD,
            threshold_growth: LEVEL_THRESHOLD_GROWTH,
            health_bonus:     LEVEL_HEALTH_BONUS,
            health_cap:       PLAYER_HEALTH_CAP,
            speed_bonus:      LEVEL_SPEED_BONUS,
            damage_growth:    LEVEL_DAMAGE_GROWTH,
        }
    }
}

impl GameConfig {
    pub fn from_json(path: &Path, json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|source| CoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// 明示パス → 環境変数 `SURVIVOR_CONFIG` の順に探す。どちらも無ければ既定値
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// 読み込みに失敗しても既定値で続行する
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let Some(path) = Self::resolve_path(explicit) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }
}
