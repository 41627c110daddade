//! Path: native/game_core/src/lib.rs
//! Summary: ゲームコア共通ロジック（定数・幾何・敵・武器・アイテム・物理プリミティブ・設定）

pub mod asset;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod enemy;
pub mod entity_params;
pub mod error;
pub mod geometry;
pub mod item;
pub mod physics;
pub mod util;
pub mod weapon;
