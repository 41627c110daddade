//! Path: native/game_world/src/world/game_world.rs
//! Summary: ゲームワールド（全エンティティの所有者とフレームステップの入口）

use super::{BulletWorld, Enemy, EnemyWorld, FrameEvent, PlayerState};
use crate::game_logic::physics_step_inner;
use crate::input::InputSnapshot;
use crate::map::MapLayout;
use game_core::asset::MaskLibrary;
use game_core::config::GameConfig;
use game_core::constants::CELL_SIZE;
use game_core::difficulty::DifficultyParams;
use game_core::enemy::EnemyKind;
use game_core::geometry::Vec2;
use game_core::item::ItemWorld;
use game_core::physics::rng::SimpleRng;
use game_core::physics::spatial_hash::CollisionWorld;
use game_core::util::filter_spawn_points;

/// ゲームワールド
///
/// 時刻はすべて `step` に渡された delta の累積（ミリ秒）で、壁時計は参照しない。
pub struct GameWorld {
    pub frame_id:           u32,
    /// ワールド時計（ミリ秒）
    pub now_ms:             u64,
    pub config:             GameConfig,
    pub difficulty:         DifficultyParams,
    pub player:             PlayerState,
    pub enemies:            EnemyWorld,
    pub bullets:            BulletWorld,
    pub items:              ItemWorld,
    pub rng:                SimpleRng,
    pub collision:          CollisionWorld,
    pub masks:              MaskLibrary,
    /// プレイヤー初期位置から十分離れた敵スポーン地点
    pub spawn_points:       Vec<Vec2>,
    pub last_enemy_spawn:   u64,
    pub next_boss_at:       u64,
    pub kill_count:         u32,
    /// 発生したイベント。step は消さないので、呼び出し側が毎フレーム
    /// `drain_events` で取り出す（取り出すまで蓄積する）
    pub frame_events:       Vec<FrameEvent>,
    /// 障害物クエリ用バッファ（毎フレーム再利用）
    pub obstacle_query_buf: Vec<usize>,
    /// 敵クエリ用バッファ（毎フレーム再利用）
    pub enemy_query_buf:    Vec<usize>,
    /// 直近フレームの物理ステップ処理時間（ミリ秒）
    pub last_frame_time_ms: f64,
}

impl GameWorld {
    pub fn new(config: GameConfig, map: &MapLayout, masks: MaskLibrary) -> Self {
        let mut collision = CollisionWorld::new(CELL_SIZE);
        collision.rebuild_static(&map.obstacles);
        let spawn_points = filter_spawn_points(
            &map.enemy_spawns,
            map.player_spawn,
            config.spawn.min_spawn_distance,
        );
        if spawn_points.is_empty() {
            log::warn!("no enemy spawn point is far enough from the player; regular spawns disabled");
        }
        log::debug!(
            "world created: difficulty={:?} obstacles={} spawn_points={}",
            config.difficulty,
            map.obstacles.len(),
            spawn_points.len()
        );
        Self {
            frame_id: 0,
            now_ms: 0,
            difficulty: config.difficulty.params(),
            player: PlayerState::new(map.player_spawn, &config),
            enemies: EnemyWorld::new(),
            bullets: BulletWorld::with_size(masks.bullet_size()),
            items: ItemWorld::new(),
            rng: SimpleRng::new(config.rng_seed),
            collision,
            masks,
            spawn_points,
            last_enemy_spawn: 0,
            next_boss_at: config.spawn.boss_initial_delay_ms,
            kill_count: 0,
            frame_events: Vec::new(),
            obstacle_query_buf: Vec::new(),
            enemy_query_buf: Vec::new(),
            last_frame_time_ms: 0.0,
            config,
        }
    }

    /// 1 フレーム進める。プレイヤー死亡後は何もしない（ラウンド終了）
    pub fn step(&mut self, input: &InputSnapshot, delta_ms: u64) {
        physics_step_inner(self, input, delta_ms);
    }

    pub fn is_round_over(&self) -> bool {
        !self.player.alive
    }

    /// 次のボス出現までの残り時間
    pub fn time_until_boss(&self) -> u64 {
        self.next_boss_at.saturating_sub(self.now_ms)
    }

    /// 生存時間。死亡後は死亡時刻で止まる
    pub fn survival_ms(&self) -> u64 {
        self.player.death_time.unwrap_or(self.now_ms)
    }

    /// 蓄積したイベントを発生順に取り出して空にする
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        self.frame_events.drain(..).collect()
    }

    /// 難易度倍率を掛けて敵を生成する
    pub fn spawn_enemy(&mut self, kind: EnemyKind, center: Vec2) -> usize {
        let enemy = Enemy::with_size(kind, center, self.masks.enemy_size(kind), &self.difficulty);
        log::debug!(
            "spawn {} at ({:.0}, {:.0}) hp={} dmg={}",
            kind.name(),
            center.x,
            center.y,
            enemy.health,
            enemy.damage
        );
        self.enemies.spawn(enemy)
    }

    /// 敵の描画矩形で動的 Spatial Hash を再構築する（フェードアウト中は除外）
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.dynamic.clear();
        for (i, enemy) in self.enemies.iter() {
            if !enemy.is_dying() {
                self.collision.dynamic.insert_rect(i, &enemy.rect);
            }
        }
    }
}
