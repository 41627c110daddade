//! フレームステップのベンチマーク: 敵数ごとの 1 ステップ

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use game_core::asset::MaskLibrary;
use game_core::config::GameConfig;
use game_core::geometry::Vec2;
use game_world::{EnemyKind, GameWorld, InputSnapshot, MapLayout};

fn setup_world(n: usize) -> GameWorld {
    let map = MapLayout::arena(4000.0, 4000.0, 400.0);
    let mut world = GameWorld::new(GameConfig::default(), &map, MaskLibrary::placeholder());
    let kinds = [EnemyKind::Bat, EnemyKind::Slime, EnemyKind::Skeleton];
    for i in 0..n {
        let x = 200.0 + (i as f32 * 37.0) % 3600.0;
        let y = 200.0 + (i as f32 * 53.0) % 3600.0;
        world.spawn_enemy(kinds[i % kinds.len()], Vec2::new(x, y));
    }
    world
}

fn bench_step(c: &mut Criterion) {
    let input = InputSnapshot::idle().moving(1.0, 0.0).aiming(Vec2::new(1.0, 0.0)).firing();

    for n in [100, 1_000] {
        c.bench_function(&format!("step_{}_enemies", n), |b| {
            b.iter_batched(
                || setup_world(n),
                |mut world| {
                    world.step(&input, 16);
                    world
                },
                BatchSize::PerIteration,
            )
        });
    }
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
