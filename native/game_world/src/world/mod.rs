//! Path: native/game_world/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BulletWorld, GameWorld）

mod bullet;
mod capability;
mod enemy;
mod frame_event;
mod game_world;
mod player;

pub use bullet::BulletWorld;
pub use capability::{Damageable, WeaponCarrier};
pub use enemy::{Enemy, EnemyWorld};
pub use frame_event::FrameEvent;
pub use game_world::GameWorld;
pub use player::PlayerState;
