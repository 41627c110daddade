//! Path: native/game_world/src/bin/headless_round.rs
//! Summary: 描画なしで 1 ラウンドを固定ステップで回し、結果を JSON で出力する
//!
//! 使い方: `headless_round [config.json] [duration_ms]`
//! ログは RUST_LOG で制御する（例: RUST_LOG=game_world=debug）。

use std::error::Error;
use std::path::Path;

use game_core::asset::{AssetLoader, MaskLibrary};
use game_core::config::GameConfig;
use game_core::constants::FRAME_BUDGET_MS;
use game_core::geometry::Vec2;
use game_world::{build_render_snapshot, FrameEvent, GameWorld, InputSnapshot, MapLayout};
use serde::Serialize;

const DEFAULT_DURATION_MS: u64 = 60_000;
const ARENA_WIDTH: f32 = 2560.0;
const ARENA_HEIGHT: f32 = 1920.0;
const SPAWN_SPACING: f32 = 320.0;

#[derive(Serialize)]
struct RoundSummary {
    frames:       u32,
    survival_ms:  u64,
    alive:        bool,
    level:        u32,
    kills:        u32,
    level_ups:    usize,
    bosses:       usize,
    damage_taken: i32,
    weapons:      Vec<String>,
}

/// 円を描くように歩きながら撃ち続け、一定間隔で武器を切り替える
fn scripted_input(frame: u32) -> InputSnapshot {
    let t = frame as f32 / 60.0;
    let walk = Vec2::from_angle_deg(t * 30.0);
    let aim = Vec2::from_angle_deg(t * 90.0);
    let mut input = InputSnapshot::idle().moving(walk.x, walk.y).aiming(aim).firing();
    if frame % 600 == 0 {
        input = input.selecting(((frame / 600) % 3) as usize);
    }
    input
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let duration_ms = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => DEFAULT_DURATION_MS,
    };

    let config = GameConfig::load_or_default(config_path.as_deref().map(Path::new));
    let map = MapLayout::arena(ARENA_WIDTH, ARENA_HEIGHT, SPAWN_SPACING);
    let masks = MaskLibrary::load(&AssetLoader::new());
    let mut world = GameWorld::new(config, &map, masks);

    let mut level_ups = 0;
    let mut bosses = 0;
    let mut damage_taken = 0;
    while world.now_ms < duration_ms && !world.is_round_over() {
        world.step(&scripted_input(world.frame_id), FRAME_BUDGET_MS);
        for event in world.drain_events() {
            match event {
                FrameEvent::LevelUp { .. } => level_ups += 1,
                FrameEvent::BossSpawned => bosses += 1,
                FrameEvent::PlayerDamaged { damage, .. } => damage_taken += damage,
                _ => {}
            }
        }
    }

    let hud = build_render_snapshot(&world).hud;
    let summary = RoundSummary {
        frames: world.frame_id,
        survival_ms: hud.survival_ms,
        alive: hud.alive,
        level: hud.level,
        kills: hud.kills,
        level_ups,
        bosses,
        damage_taken,
        weapons: hud.weapons.into_iter().map(|w| w.name).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
