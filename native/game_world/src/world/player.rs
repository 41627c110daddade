//! Path: native/game_world/src/world/player.rs
//! Summary: プレイヤー状態（位置・HP・経験値とレベル・武器スロット・死亡）

use super::capability::{Damageable, WeaponCarrier};
use game_core::config::{GameConfig, LevelingConfig};
use game_core::constants::{
    DROP_COOLDOWN_MS, MAX_WEAPON_SLOTS, PLAYER_HITBOX_INSET_X, PLAYER_HITBOX_INSET_Y,
    PLAYER_SPRITE_H, PLAYER_SPRITE_W,
};
use game_core::geometry::{Rect, Vec2};
use game_core::weapon::Weapon;

/// プレイヤー状態
pub struct PlayerState {
    /// 描画矩形（中心はヒットボックスと共有）
    pub rect:           Rect,
    pub hitbox:         Rect,
    pub health:         i32,
    pub max_health:     i32,
    pub speed:          f32,
    pub experience:     u32,
    pub level:          u32,
    pub exp_to_next:    u32,
    pub weapons:        Vec<Weapon>,
    pub current_weapon: Option<usize>,
    pub facing:         Vec2,
    pub alive:          bool,
    pub death_time:     Option<u64>,
    pub last_drop:      Option<u64>,
    leveling:           LevelingConfig,
}

impl PlayerState {
    pub fn new(spawn: Vec2, config: &GameConfig) -> Self {
        let rect = Rect::from_center(spawn, PLAYER_SPRITE_W, PLAYER_SPRITE_H);
        let weapons: Vec<Weapon> = config
            .player
            .starting_weapons
            .iter()
            .take(MAX_WEAPON_SLOTS)
            .map(|&k| Weapon::new(k))
            .collect();
        let current_weapon = if weapons.is_empty() { None } else { Some(0) };
        let max_health = config.player.health.min(config.leveling.health_cap);
        Self {
            rect,
            hitbox: rect.inflate(-PLAYER_HITBOX_INSET_X, -PLAYER_HITBOX_INSET_Y),
            health: max_health,
            max_health,
            speed: config.player.speed,
            experience: 0,
            level: 1,
            exp_to_next: config.leveling.first_threshold.max(1),
            weapons,
            current_weapon,
            facing: Vec2::UP,
            alive: true,
            death_time: None,
            last_drop: None,
            leveling: config.leveling.clone(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// 移動後のヒットボックスを反映し、描画矩形を追従させる
    pub fn set_hitbox(&mut self, hitbox: Rect) {
        self.hitbox = hitbox;
        self.rect.set_center(hitbox.center());
    }

    pub fn current_weapon_mut(&mut self) -> Option<&mut Weapon> {
        let i = self.current_weapon?;
        self.weapons.get_mut(i)
    }

    /// 0 始まりのスロット番号で装備を切り替える。範囲外は無視
    pub fn switch_weapon(&mut self, index: usize) -> bool {
        if index < self.weapons.len() {
            self.current_weapon = Some(index);
            true
        } else {
            false
        }
    }

    /// 装備中の武器を手放す。直前の投擲から DROP_COOLDOWN_MS 未満なら何もしない
    pub fn drop_weapon(&mut self, now: u64) -> Option<Weapon> {
        if self.last_drop.is_some_and(|t| now.saturating_sub(t) < DROP_COOLDOWN_MS) {
            return None;
        }
        let index = self.current_weapon?;
        if index >= self.weapons.len() {
            return None;
        }
        let weapon = self.weapons.remove(index);
        self.last_drop = Some(now);
        self.current_weapon = if self.weapons.is_empty() {
            None
        } else {
            Some(index.min(self.weapons.len() - 1))
        };
        Some(weapon)
    }

    /// 空きスロットがあり同じ種類を持っていなければ拾う。空の状態から拾った武器は自動で装備する
    pub fn pickup_weapon(&mut self, weapon: Weapon) -> Result<(), Weapon> {
        if !self.can_pickup(&weapon) {
            return Err(weapon);
        }
        self.weapons.push(weapon);
        if self.current_weapon.is_none() {
            self.current_weapon = Some(self.weapons.len() - 1);
        }
        Ok(())
    }

    pub fn can_pickup(&self, weapon: &Weapon) -> bool {
        self.weapons.len() < MAX_WEAPON_SLOTS && !self.owns(weapon.kind)
    }

    /// 経験値を加算し、閾値を超えている間レベルアップを繰り返す。上がったレベル数を返す
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut gained = 0;
        while self.experience >= self.exp_to_next {
            self.level_up();
            gained += 1;
        }
        gained
    }

    fn level_up(&mut self) {
        let lv = &self.leveling;
        self.level += 1;
        self.experience -= self.exp_to_next;
        self.exp_to_next = self.exp_to_next.saturating_mul(lv.threshold_growth).max(1);
        self.max_health = (self.max_health + lv.health_bonus).min(lv.health_cap);
        self.health = self.max_health;
        self.speed += lv.speed_bonus;
        for weapon in &mut self.weapons {
            weapon.scale_damage(lv.damage_growth);
        }
        log::debug!("player reached level {}", self.level);
    }

    /// HP が 0 以下なら一度だけ死亡状態へ遷移する
    pub fn check_death(&mut self, now: u64) -> bool {
        if self.health <= 0 && self.alive {
            self.alive = false;
            self.death_time = Some(now);
            return true;
        }
        false
    }
}

impl Damageable for PlayerState {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn take_damage(&mut self, amount: i32, now: u64) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        self.check_death(now)
    }
}

impl WeaponCarrier for PlayerState {
    fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    fn current_index(&self) -> Option<usize> {
        self.current_weapon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::weapon::WeaponKind;

    fn player() -> PlayerState {
        PlayerState::new(Vec2::new(0.0, 0.0), &GameConfig::default())
    }

    #[test]
    fn hitbox_is_inset_from_sprite() {
        let p = player();
        assert!((p.hitbox.w - 68.0).abs() < 1e-4);
        assert!((p.hitbox.h - 38.0).abs() < 1e-4);
        assert_eq!(p.hitbox.center(), p.rect.center());
    }

    #[test]
    fn leveling_carries_over_experience() {
        let mut p = player();
        assert_eq!(p.add_experience(650), 1);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 350);
        assert_eq!(p.exp_to_next, 900);
        assert_eq!(p.max_health, 1100);
        assert_eq!(p.health, 1100);
        assert_eq!(p.speed, 520.0);
    }

    #[test]
    fn multi_level_gain_in_one_call() {
        let mut p = player();
        assert_eq!(p.add_experience(300 + 900 + 5), 2);
        assert_eq!(p.level, 3);
        assert_eq!(p.experience, 5);
        assert_eq!(p.exp_to_next, 2700);
    }

    #[test]
    fn max_health_is_capped() {
        let mut p = player();
        for _ in 0..12 {
            let need = p.exp_to_next - p.experience;
            p.add_experience(need);
        }
        assert_eq!(p.max_health, 2000);
        assert_eq!(p.health, 2000);
    }

    #[test]
    fn starting_health_never_exceeds_cap() {
        let mut config = GameConfig::default();
        config.player.health = 5000;
        let p = PlayerState::new(Vec2::new(0.0, 0.0), &config);
        assert_eq!(p.max_health, 2000);
        assert_eq!(p.health, 2000);
    }

    #[test]
    fn invalid_switch_is_noop() {
        let mut p = player();
        assert!(p.switch_weapon(2));
        assert!(!p.switch_weapon(3));
        assert_eq!(p.current_weapon, Some(2));
    }

    #[test]
    fn drop_is_rate_limited() {
        let mut p = player();
        assert_eq!(p.drop_weapon(1000).map(|w| w.kind), Some(WeaponKind::Pistol));
        assert!(p.drop_weapon(1200).is_none());
        assert_eq!(p.drop_weapon(1500).map(|w| w.kind), Some(WeaponKind::Sword));
        assert_eq!(p.weapons.len(), 1);
        assert_eq!(p.current_weapon, Some(0));
    }

    #[test]
    fn pickup_respects_capacity_and_uniqueness() {
        let mut p = player();
        assert!(p.pickup_weapon(Weapon::new(WeaponKind::Shotgun)).is_err());
        p.drop_weapon(0);
        assert!(p.pickup_weapon(Weapon::new(WeaponKind::AutoRifle)).is_err());
        assert!(p.pickup_weapon(Weapon::new(WeaponKind::Shotgun)).is_ok());
        assert_eq!(p.weapons.len(), 3);
    }

    #[test]
    fn pickup_into_empty_inventory_auto_selects() {
        let mut p = player();
        for t in 0..3 {
            p.drop_weapon(t * 1000);
        }
        assert_eq!(p.current_weapon, None);
        assert!(p.pickup_weapon(Weapon::new(WeaponKind::Shotgun)).is_ok());
        assert_eq!(p.current_weapon, Some(0));
    }

    #[test]
    fn death_is_recorded_once() {
        let mut p = player();
        assert!(p.take_damage(1000, 42));
        assert!(!p.take_damage(10, 50));
        assert!(!p.check_death(60));
        assert_eq!(p.death_time, Some(42));
        assert!(!p.alive);
    }
}
