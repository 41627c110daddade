//! Path: native/game_core/src/physics/obstacle_resolve.rs
//! Summary: 軸分離（2 フェーズ）移動と障害物への押し戻し
//!
//! 斜め移動で壁の角をすり抜けないよう、水平移動 → 水平解決 → 垂直移動 → 垂直解決の順で処理する。

use super::spatial_hash::CollisionWorld;
use crate::geometry::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// `hitbox` が `solid` と重なっていれば、進行方向側の辺を `solid` の反対側の辺に揃える。
/// 進行方向の成分が 0 の軸では何もしない。
pub fn clamp_against(hitbox: &mut Rect, solid: &Rect, axis: Axis, dir: Vec2) {
    if !hitbox.intersects(solid) {
        return;
    }
    match axis {
        Axis::Horizontal => {
            if dir.x > 0.0 {
                hitbox.set_right(solid.left());
            } else if dir.x < 0.0 {
                hitbox.set_left(solid.right());
            }
        }
        Axis::Vertical => {
            if dir.y > 0.0 {
                hitbox.set_bottom(solid.top());
            } else if dir.y < 0.0 {
                hitbox.set_top(solid.bottom());
            }
        }
    }
}

/// 静的障害物すべてに対して 1 軸分の押し戻しを行う
pub fn resolve_obstacles_axis(
    collision: &CollisionWorld,
    hitbox: &mut Rect,
    axis: Axis,
    dir: Vec2,
    buf: &mut Vec<usize>,
) {
    collision.query_static_overlapping_into(hitbox, buf);
    for &idx in buf.iter() {
        if let Some(o) = collision.obstacles.get(idx) {
            clamp_against(hitbox, o, axis, dir);
        }
    }
}

/// 2 フェーズ移動。`resolve` は各軸の移動直後に呼ばれ、障害物や他エンティティへの押し戻しを行う。
pub fn move_two_phase<F>(hitbox: &mut Rect, dir: Vec2, distance: f32, mut resolve: F)
where
    F: FnMut(&mut Rect, Axis),
{
    hitbox.x += dir.x * distance;
    resolve(hitbox, Axis::Horizontal);
    hitbox.y += dir.y * distance;
    resolve(hitbox, Axis::Vertical);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_world() -> CollisionWorld {
        let mut cw = CollisionWorld::new(128.0);
        cw.rebuild_static(&[Rect::new(500.0, 0.0, 100.0, 1000.0)]);
        cw
    }

    #[test]
    fn moving_right_into_wall_sets_right_edge_flush() {
        let cw = wall_world();
        let mut buf = Vec::new();
        let mut hb = Rect::new(460.0, 300.0, 68.0, 38.0);
        // 右下方向へ移動しても水平解決後の右端は壁の左端に揃う
        let dir = Vec2::new(1.0, 1.0).normalize_or(Vec2::ZERO);
        hb.x += dir.x * 20.0;
        resolve_obstacles_axis(&cw, &mut hb, Axis::Horizontal, dir, &mut buf);
        assert_eq!(hb.right(), 500.0);
    }

    #[test]
    fn two_phase_slides_along_wall() {
        let cw = wall_world();
        let mut buf = Vec::new();
        let mut hb = Rect::new(430.0, 300.0, 68.0, 38.0);
        let dir = Vec2::new(1.0, 1.0).normalize_or(Vec2::ZERO);
        move_two_phase(&mut hb, dir, 50.0, |hb, axis| {
            resolve_obstacles_axis(&cw, hb, axis, dir, &mut buf)
        });
        assert_eq!(hb.right(), 500.0);
        // 垂直方向の移動は壁に阻まれない
        assert!(hb.top() > 300.0 + 30.0);
    }

    #[test]
    fn moving_up_into_ceiling() {
        let mut hb = Rect::new(0.0, 95.0, 10.0, 10.0);
        let ceiling = Rect::new(-50.0, 0.0, 100.0, 100.0);
        clamp_against(&mut hb, &ceiling, Axis::Vertical, Vec2::UP);
        assert_eq!(hb.top(), 100.0);
    }

    #[test]
    fn zero_axis_component_leaves_hitbox() {
        let mut hb = Rect::new(495.0, 0.0, 10.0, 10.0);
        let solid = Rect::new(500.0, 0.0, 10.0, 10.0);
        clamp_against(&mut hb, &solid, Axis::Horizontal, Vec2::new(0.0, 1.0));
        assert_eq!(hb.x, 495.0);
    }
}
