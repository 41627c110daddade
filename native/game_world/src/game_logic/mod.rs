//! Path: native/game_world/src/game_logic/mod.rs
//! Summary: フレームステップと各システム

mod physics_step;
pub(crate) mod systems;

pub(crate) use physics_step::physics_step_inner;
