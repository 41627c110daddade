//! Path: native/game_world/src/lib.rs
//! Summary: モジュール宣言と pub use のみ

mod game_logic;
pub mod input;
pub mod map;
pub mod render_snapshot;
pub mod world;

pub use game_core::enemy::EnemyKind;
pub use game_core::weapon::WeaponKind;
pub use input::InputSnapshot;
pub use map::MapLayout;
pub use render_snapshot::{build_render_snapshot, HudData, RenderSnapshot};
pub use world::{
    BulletWorld, Damageable, Enemy, EnemyWorld, FrameEvent, GameWorld, PlayerState, WeaponCarrier,
};
