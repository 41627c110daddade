//! Path: native/game_world/src/input.rs
//! Summary: 1 フレーム分の入力スナップショット

use game_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use game_core::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// 入力層から受け取る 1 フレーム分の状態
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// 移動方向（-1.0..=1.0 の各軸。正規化はワールド側で行う）
    pub move_x:        f32,
    pub move_y:        f32,
    /// 0 始まりの武器スロット（キー 1 → 0）
    pub weapon_select: Option<usize>,
    pub fire_held:     bool,
    pub drop_pressed:  bool,
    /// 画面上のポインタ座標
    pub pointer:       Vec2,
    /// 画面サイズ（照準はこの中心からポインタへの向き）
    pub viewport:      Vec2,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        let viewport = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            pointer: Vec2::new(viewport.x / 2.0, viewport.y / 2.0),
            viewport,
            ..Self::default()
        }
    }

    pub fn moving(mut self, x: f32, y: f32) -> Self {
        self.move_x = x;
        self.move_y = y;
        self
    }

    /// 画面中心から `dir` 方向にポインタを置く
    pub fn aiming(mut self, dir: Vec2) -> Self {
        let center = Vec2::new(self.viewport.x / 2.0, self.viewport.y / 2.0);
        self.pointer = center + dir.normalize_or(Vec2::ZERO) * 100.0;
        self
    }

    pub fn firing(mut self) -> Self {
        self.fire_held = true;
        self
    }

    pub fn selecting(mut self, slot: usize) -> Self {
        self.weapon_select = Some(slot);
        self
    }

    pub fn dropping(mut self) -> Self {
        self.drop_pressed = true;
        self
    }

    pub fn move_direction(&self) -> Vec2 {
        Vec2::new(self.move_x, self.move_y).normalize_or(Vec2::ZERO)
    }
}
