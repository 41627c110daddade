//! Path: native/game_core/src/item.rs
//! Summary: 地面に落ちている武器アイテムの ItemWorld（浮遊・寿命・投擲クールダウン）

use crate::constants::{
    ITEM_FLOAT_AMPLITUDE, ITEM_FLOAT_SPEED, ITEM_LIFETIME_MS, ITEM_PICKUP_RADIUS,
    ITEM_THROW_COOLDOWN_MS,
};
use crate::geometry::{Rect, Vec2};
use crate::weapon::{Weapon, WeaponKind};

/// 武器アイテム SoA（Structure of Arrays）
///
/// フリーリストにより kill されたスロットを O(1) で再利用する。
/// アイテムは武器インスタンスを所有し、拾われると `take` で所有権をプレイヤーへ移す。
pub struct ItemWorld {
    pub base_x:     Vec<f32>,
    pub base_y:     Vec<f32>,
    pub weapons:    Vec<Option<Weapon>>,
    pub spawned_at: Vec<u64>,
    /// 浮遊アニメーションの位相（秒 × 浮遊速度）
    pub float_time: Vec<f32>,
    pub alive:      Vec<bool>,
    pub count:      usize,
    /// kill 時にインデックスを積み、spawn 時に pop して再利用する
    free_list:      Vec<usize>,
}

impl Default for ItemWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemWorld {
    pub fn new() -> Self {
        Self {
            base_x:     Vec::new(),
            base_y:     Vec::new(),
            weapons:    Vec::new(),
            spawned_at: Vec::new(),
            float_time: Vec::new(),
            alive:      Vec::new(),
            count:      0,
            free_list:  Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.base_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// アイテムをスポーンする。空きスロットがあれば O(1) で再利用する。
    pub fn spawn(&mut self, pos: Vec2, mut weapon: Weapon, now: u64) -> usize {
        weapon.reset();
        let i = if let Some(i) = self.free_list.pop() {
            self.base_x[i]     = pos.x;
            self.base_y[i]     = pos.y;
            self.weapons[i]    = Some(weapon);
            self.spawned_at[i] = now;
            self.float_time[i] = 0.0;
            self.alive[i]      = true;
            i
        } else {
            self.base_x.push(pos.x);
            self.base_y.push(pos.y);
            self.weapons.push(Some(weapon));
            self.spawned_at.push(now);
            self.float_time.push(0.0);
            self.alive.push(true);
            self.base_x.len() - 1
        };
        self.count += 1;
        i
    }

    /// アイテムを消去し、スロットをフリーリストに返却する。
    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.weapons[i] = None;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    /// 武器を取り出してアイテムを消す
    pub fn take(&mut self, i: usize) -> Option<Weapon> {
        if !self.alive.get(i).copied().unwrap_or(false) {
            return None;
        }
        let weapon = self.weapons[i].take();
        self.kill(i);
        weapon
    }

    pub fn kind(&self, i: usize) -> Option<WeaponKind> {
        self.weapons.get(i).and_then(|w| w.as_ref()).map(|w| w.kind)
    }

    pub fn float_offset(&self, i: usize) -> f32 {
        self.float_time[i].sin() * ITEM_FLOAT_AMPLITUDE
    }

    /// 浮遊を含めた現在の中心
    pub fn position(&self, i: usize) -> Vec2 {
        Vec2::new(self.base_x[i], self.base_y[i] + self.float_offset(i))
    }

    /// 描画用の傾き（度, ±15）
    pub fn rotation_deg(&self, i: usize) -> f32 {
        (self.float_time[i] * 2.0).sin() * 15.0
    }

    /// 捨てた直後は拾えない
    pub fn can_pickup(&self, i: usize, now: u64) -> bool {
        self.alive[i] && now.saturating_sub(self.spawned_at[i]) >= ITEM_THROW_COOLDOWN_MS
    }

    pub fn in_pickup_range(&self, i: usize, hitbox: &Rect) -> bool {
        hitbox.intersects_circle(self.position(i), ITEM_PICKUP_RADIUS)
    }

    pub fn is_expired(&self, i: usize, now: u64) -> bool {
        now.saturating_sub(self.spawned_at[i]) >= ITEM_LIFETIME_MS
    }

    /// 浮遊位相を進め、寿命切れを消す。消した数を返す
    pub fn update(&mut self, dt: f32, now: u64) -> usize {
        let mut expired = 0;
        for i in 0..self.len() {
            if !self.alive[i] {
                continue;
            }
            self.float_time[i] += dt * ITEM_FLOAT_SPEED;
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

    #[test]
    fn throw_cooldown_blocks_early_pickup() {
        let mut items = ItemWorld::new();
        let i = items.spawn(Vec2::new(0.0, 0.0), Weapon::new(WeaponKind::Shotgun), 1000);
        assert!(!items.can_pickup(i, 1100));
        assert!(items.can_pickup(i, 1600));
    }

    #[test]
    fn take_transfers_weapon_once() {
        let mut items = ItemWorld::new();
        let i = items.spawn(Vec2::ZERO, Weapon::new(WeaponKind::AutoRifle), 0);
        assert_eq!(items.take(i).map(|w| w.kind), Some(WeaponKind::AutoRifle));
        assert!(items.take(i).is_none());
        assert_eq!(items.count, 0);
    }

    #[test]
    fn slots_are_reused() {
        let mut items = ItemWorld::new();
        let a = items.spawn(Vec2::ZERO, Weapon::new(WeaponKind::Pistol), 0);
        items.kill(a);
        let b = items.spawn(Vec2::ZERO, Weapon::new(WeaponKind::Sword), 0);
        assert_eq!(a, b);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn expires_after_lifetime() {
        let mut items = ItemWorld::new();
        items.spawn(Vec2::ZERO, Weapon::new(WeaponKind::Pistol), 0);
        assert_eq!(items.update(0.016, ITEM_LIFETIME_MS - 1), 0);
        assert_eq!(items.update(0.016, ITEM_LIFETIME_MS), 1);
        assert!(items.is_empty());
    }

    #[test]
    fn float_stays_within_amplitude() {
        let mut items = ItemWorld::new();
        let i = items.spawn(Vec2::new(10.0, 10.0), Weapon::new(WeaponKind::Pistol), 0);
        for t in 0..100 {
            items.update(0.05, t);
            assert!((items.position(i).y - 10.0).abs() <= ITEM_FLOAT_AMPLITUDE + 1e-4);
            assert!(items.rotation_deg(i).abs() <= 15.0 + 1e-4);
        }
    }
}
