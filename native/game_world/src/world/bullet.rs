//! Path: native/game_world/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）：直進・寿命／射程切れ

use game_core::constants::{BULLET_LIFETIME_MS, BULLET_MAX_RANGE, BULLET_SIZE, BULLET_SPEED};
use game_core::geometry::{Rect, Vec2};
use game_core::weapon::{BulletSpawn, WeaponKind};

/// 弾丸 SoA（Structure of Arrays）
pub struct BulletWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub origins_x:    Vec<f32>,
    pub origins_y:    Vec<f32>,
    /// 単位ベクトル
    pub directions_x: Vec<f32>,
    pub directions_y: Vec<f32>,
    pub spawned_at:   Vec<u64>,
    pub damage:       Vec<i32>,
    /// 発射元武器（EnemyKilled イベント用）
    pub weapon_kind:  Vec<WeaponKind>,
    pub alive:        Vec<bool>,
    pub count:        usize,
    /// 描画矩形の大きさ（弾マスクと同じ）
    size:             (f32, f32),
    /// 空きスロットのインデックススタック（O(1) で取得・返却）
    free_list:        Vec<usize>,
}

impl Default for BulletWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletWorld {
    pub fn new() -> Self {
        Self::with_size((BULLET_SIZE as f32, BULLET_SIZE as f32))
    }

    pub fn with_size(size: (f32, f32)) -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            origins_x:    Vec::new(),
            origins_y:    Vec::new(),
            directions_x: Vec::new(),
            directions_y: Vec::new(),
            spawned_at:   Vec::new(),
            damage:       Vec::new(),
            weapon_kind:  Vec::new(),
            alive:        Vec::new(),
            count:        0,
            size,
            free_list:    Vec::new(),
        }
    }

    pub fn spawn(&mut self, b: &BulletSpawn, now: u64) -> usize {
        let (x, y) = (b.origin.x, b.origin.y);
        let (dx, dy) = (b.direction.x, b.direction.y);
        self.count += 1;
        if let Some(i) = self.free_list.pop() {
            self.positions_x[i]  = x;
            self.positions_y[i]  = y;
            self.origins_x[i]    = x;
            self.origins_y[i]    = y;
            self.directions_x[i] = dx;
            self.directions_y[i] = dy;
            self.spawned_at[i]   = now;
            self.damage[i]       = b.damage;
            self.weapon_kind[i]  = b.weapon;
            self.alive[i]        = true;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.origins_x.push(x);
            self.origins_y.push(y);
            self.directions_x.push(dx);
            self.directions_y.push(dy);
            self.spawned_at.push(now);
            self.damage.push(b.damage);
            self.weapon_kind.push(b.weapon);
            self.alive.push(true);
            self.positions_x.len() - 1
        }
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn position(&self, i: usize) -> Vec2 {
        Vec2::new(self.positions_x[i], self.positions_y[i])
    }

    pub fn rect(&self, i: usize) -> Rect {
        Rect::from_center(self.position(i), self.size.0, self.size.1)
    }

    pub fn travelled(&self, i: usize) -> f32 {
        self.position(i).distance(Vec2::new(self.origins_x[i], self.origins_y[i]))
    }

    /// 寿命切れまたは射程切れ
    pub fn is_expired(&self, i: usize, now: u64) -> bool {
        now.saturating_sub(self.spawned_at[i]) >= BULLET_LIFETIME_MS
            || self.travelled(i) >= BULLET_MAX_RANGE
    }

    /// 全弾を直進させ、期限切れを消す。消した数を返す
    pub fn update(&mut self, dt: f32, now: u64) -> usize {
        let step = BULLET_SPEED * dt;
        let mut expired = 0;
        for i in 0..self.len() {
            if !self.alive[i] {
                continue;
            }
            self.positions_x[i] += self.directions_x[i] * step;
            self.positions_y[i] += self.directions_y[i] * step;
            if self.is_expired(i, now) {
                self.kill(i);
                expired += 1;
            }
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_right(world: &mut BulletWorld, now: u64) -> usize {
        world.spawn(
            &BulletSpawn {
                origin:    Vec2::ZERO,
                direction: Vec2::new(1.0, 0.0),
                damage:    15,
                weapon:    WeaponKind::Pistol,
            },
            now,
        )
    }

    #[test]
    fn range_expires_before_lifetime() {
        let mut world = BulletWorld::new();
        let i = spawn_right(&mut world, 0);
        // 1200 px/s なので 1000 px は約 833ms で到達する
        let mut now = 0;
        while world.alive[i] {
            now += 16;
            world.update(0.016, now);
        }
        assert!(now < BULLET_LIFETIME_MS);
        assert_eq!(world.count, 0);
    }

    #[test]
    fn lifetime_expiry_without_movement() {
        let mut world = BulletWorld::new();
        spawn_right(&mut world, 0);
        assert_eq!(world.update(0.0, 999), 0);
        assert_eq!(world.update(0.0, 1000), 1);
        // 二重に消えない
        assert_eq!(world.update(0.0, 2000), 0);
        assert_eq!(world.count, 0);
    }

    #[test]
    fn rect_uses_configured_size() {
        let mut world = BulletWorld::with_size((20.0, 6.0));
        let i = spawn_right(&mut world, 0);
        let r = world.rect(i);
        assert_eq!((r.w, r.h), (20.0, 6.0));
        assert_eq!(r.center(), Vec2::ZERO);
    }

    #[test]
    fn free_slots_are_reused() {
        let mut world = BulletWorld::new();
        let a = spawn_right(&mut world, 0);
        world.kill(a);
        let b = spawn_right(&mut world, 5);
        assert_eq!(a, b);
        assert_eq!(world.spawned_at[b], 5);
        assert_eq!(world.travelled(b), 0.0);
    }
}
