//! Path: native/game_core/src/constants.rs
//! Summary: 画面解像度・移動・戦闘・タイマーなどの定数定義
//!
//! 時間はすべてワールド時計のミリ秒（u64）で表す。

// Window resolution（照準ベクトルのビューポート中心に使う）
pub const SCREEN_WIDTH:  f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

// Frame budget (headless runner の固定ステップ)
pub const FRAME_BUDGET_MS: u64 = 16;

// ─── Player ───────────────────────────────────────────────────
pub const PLAYER_SPRITE_W: f32 = 128.0;
pub const PLAYER_SPRITE_H: f32 = 128.0;
/// ヒットボックスは描画矩形から (60, 90) だけ内側に縮める
pub const PLAYER_HITBOX_INSET_X: f32 = 60.0;
pub const PLAYER_HITBOX_INSET_Y: f32 = 90.0;
pub const PLAYER_SPEED:        f32 = 500.0;
pub const PLAYER_HEALTH:       i32 = 1000;
pub const PLAYER_HEALTH_CAP:   i32 = 2000;
/// 武器を捨てる操作の連打防止
pub const DROP_COOLDOWN_MS:    u64 = 500;

// ─── Leveling ─────────────────────────────────────────────────
pub const FIRST_LEVEL_THRESHOLD: u32 = 300;
pub const LEVEL_THRESHOLD_GROWTH: u32 = 3;
pub const LEVEL_HEALTH_BONUS:  i32 = 100;
pub const LEVEL_SPEED_BONUS:   f32 = 20.0;
pub const LEVEL_DAMAGE_GROWTH: f32 = 1.05;

// ─── Enemy ────────────────────────────────────────────────────
/// ヒットボックスは描画矩形の幅・高さそれぞれ 60% を削った大きさ
pub const ENEMY_HITBOX_SHRINK: f32 = 0.6;
/// ヒットボックスの大きさに関係なく中心間距離で判定する攻撃半径
pub const ENEMY_ATTACK_RADIUS: f32 = 100.0;
pub const ENEMY_DEATH_FADE_MS: u64 = 600;
pub const ENEMY_HIT_FLASH_MS:  u64 = 300;
pub const ENEMY_ANIM_FPS:      f32 = 15.0;
pub const WEAPON_DROP_CHANCE:  f32 = 0.3;

// ─── Bullet ───────────────────────────────────────────────────
pub const BULLET_SPEED:       f32 = 1200.0;
pub const BULLET_LIFETIME_MS: u64 = 1000;
pub const BULLET_MAX_RANGE:   f32 = 1000.0;
pub const BULLET_SIZE:        u32 = 12;

// ─── Inventory / items ────────────────────────────────────────
pub const MAX_WEAPON_SLOTS:       usize = 3;
pub const ITEM_PICKUP_RADIUS:     f32 = 50.0;
pub const ITEM_THROW_COOLDOWN_MS: u64 = 500;
pub const ITEM_LIFETIME_MS:       u64 = 15_000;
pub const ITEM_FLOAT_SPEED:       f32 = 2.0;
pub const ITEM_FLOAT_AMPLITUDE:   f32 = 10.0;
/// 捨てた武器はプレイヤー中心から向いている方向へこの距離だけ離して置く
pub const ITEM_THROW_DISTANCE:    f32 = 60.0;

// ─── Spawning ─────────────────────────────────────────────────
pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 300;
pub const BOSS_INITIAL_DELAY_MS:   u64 = 10_000;
pub const BOSS_SPAWN_INTERVAL_MS:  u64 = 30_000;
pub const BOSS_SPAWN_DISTANCE:     f32 = 200.0;
/// プレイヤー初期位置からこの距離以内のスポーン地点は使わない
pub const MIN_SPAWN_DISTANCE:      f32 = 100.0;

// Spatial hash cell size（ボスの 128px スプライトが 1〜2 セルに収まる）
pub const CELL_SIZE: f32 = 128.0;

/// RNG シードのデフォルト（config で上書き可能）
pub const DEFAULT_RNG_SEED: u64 = 67890;
