//! Path: native/game_world/src/game_logic/systems/mod.rs
//! Summary: フレームステップを構成するシステム群

pub(crate) mod collision;
pub(crate) mod enemies;
pub(crate) mod items;
pub(crate) mod leveling;
pub(crate) mod player;
pub(crate) mod projectiles;
pub(crate) mod spawn;
pub(crate) mod weapons;
