//! Path: native/game_core/src/physics/mod.rs
//! Summary: 物理モジュールの再エクスポート（障害物解決・マスク・RNG・空間ハッシュ）

pub mod mask;
pub mod obstacle_resolve;
pub mod rng;
pub mod spatial_hash;
