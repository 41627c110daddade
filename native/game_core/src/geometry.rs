//! Path: native/game_core/src/geometry.rs
//! Summary: 2D ベクトルと軸平行矩形（描画矩形・ヒットボックス共通）

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// 画面座標系の「上」（y は下向きが正）
    pub const UP: Vec2 = Vec2 { x: 0.0, y: -1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// x 軸からの角度（度）で単位ベクトルを作る
    pub fn from_angle_deg(deg: f32) -> Self {
        let rad = deg.to_radians();
        Self::new(rad.cos(), rad.sin())
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// 正規化する。長さ 0 のときは None（ゼロ除算を呼び出し側で回避させる）
    pub fn try_normalize(self) -> Option<Vec2> {
        let len_sq = self.length_squared();
        if len_sq <= f32::EPSILON {
            return None;
        }
        let len = len_sq.sqrt();
        Some(Self::new(self.x / len, self.y / len))
    }

    pub fn normalize_or(self, fallback: Vec2) -> Vec2 {
        self.try_normalize().unwrap_or(fallback)
    }

    /// x 軸からの角度（度, -180..=180）
    pub fn angle_deg(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    /// self から other への符号付き角度差（度, -180..=180）
    pub fn angle_to_deg(self, other: Vec2) -> f32 {
        let mut diff = other.angle_deg() - self.angle_deg();
        if diff > 180.0 {
            diff -= 360.0;
        } else if diff < -180.0 {
            diff += 360.0;
        }
        diff
    }

    pub fn rotated_deg(self, deg: f32) -> Vec2 {
        let (s, c) = deg.to_radians().sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// 軸平行矩形（左上原点 + 幅・高さ）
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn left(&self) -> f32   { self.x }
    pub fn right(&self) -> f32  { self.x + self.w }
    pub fn top(&self) -> f32    { self.y }
    pub fn bottom(&self) -> f32 { self.y + self.h }

    pub fn set_left(&mut self, v: f32)   { self.x = v; }
    pub fn set_right(&mut self, v: f32)  { self.x = v - self.w; }
    pub fn set_top(&mut self, v: f32)    { self.y = v; }
    pub fn set_bottom(&mut self, v: f32) { self.y = v - self.h; }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, c: Vec2) {
        self.x = c.x - self.w / 2.0;
        self.y = c.y - self.h / 2.0;
    }

    /// 中心を保ったまま幅・高さを増減する（負値で縮小）
    pub fn inflate(&self, dw: f32, dh: f32) -> Rect {
        let w = (self.w + dw).max(0.0);
        let h = (self.h + dh).max(0.0);
        Rect::from_center(self.center(), w, h)
    }

    /// 辺が接しているだけの場合は重なりとみなさない
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let nx = center.x.clamp(self.left(), self.right());
        let ny = center.y.clamp(self.top(), self.bottom());
        let dx = center.x - nx;
        let dy = center.y - ny;
        dx * dx + dy * dy < radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_is_none() {
        assert!(Vec2::ZERO.try_normalize().is_none());
        assert_eq!(Vec2::ZERO.normalize_or(Vec2::UP), Vec2::UP);
    }

    #[test]
    fn angle_to_wraps_around() {
        let a = Vec2::from_angle_deg(170.0);
        let b = Vec2::from_angle_deg(-170.0);
        assert!((a.angle_to_deg(b) - 20.0).abs() < 0.01);
        assert!((b.angle_to_deg(a) + 20.0).abs() < 0.01);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn inflate_keeps_center() {
        let r = Rect::new(0.0, 0.0, 128.0, 128.0);
        let hb = r.inflate(-60.0, -90.0);
        assert_eq!(hb.center(), r.center());
        assert!((hb.w - 68.0).abs() < 0.001);
        assert!((hb.h - 38.0).abs() < 0.001);
    }

    #[test]
    fn edge_setters_move_rect() {
        let mut r = Rect::new(0.0, 0.0, 20.0, 10.0);
        r.set_right(500.0);
        assert_eq!(r.right(), 500.0);
        r.set_bottom(40.0);
        assert_eq!(r.top(), 30.0);
    }
}
