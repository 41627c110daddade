//! Path: native/game_world/src/world/enemy.rs
//! Summary: 敵インスタンス（ALIVE → DYING → 除去）と EnemyWorld（フリーリスト付きスロット）

use super::capability::Damageable;
use game_core::constants::{
    ENEMY_ANIM_FPS, ENEMY_DEATH_FADE_MS, ENEMY_HITBOX_SHRINK, ENEMY_HIT_FLASH_MS,
    WEAPON_DROP_CHANCE,
};
use game_core::difficulty::DifficultyParams;
use game_core::enemy::EnemyKind;
use game_core::geometry::{Rect, Vec2};

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind:               EnemyKind,
    pub rect:               Rect,
    pub hitbox:             Rect,
    pub health:             i32,
    pub max_health:         i32,
    pub damage:             i32,
    pub speed:              f32,
    pub attack_cooldown_ms: u64,
    pub exp_reward:         u32,
    pub weapon_drop_chance: f32,
    /// 死亡した時刻。Some の間はフェードアウト中で、当たり判定から外れる
    pub death_time:         Option<u64>,
    pub last_attack:        Option<u64>,
    pub hit_flash_until:    Option<u64>,
    /// アニメーション経過秒
    pub anim_time:          f32,
    /// 死亡時のフレーム（シルエット表示用）
    pub death_frame:        usize,
}

impl Enemy {
    /// 難易度倍率は生成時にだけ掛ける
    pub fn new(kind: EnemyKind, center: Vec2, difficulty: &DifficultyParams) -> Self {
        let p = kind.params();
        Self::with_size(kind, center, (p.sprite_w, p.sprite_h), difficulty)
    }

    /// 描画矩形を読み込んだマスクの大きさに合わせて生成する
    pub fn with_size(
        kind: EnemyKind,
        center: Vec2,
        (width, height): (f32, f32),
        difficulty: &DifficultyParams,
    ) -> Self {
        let p = kind.params();
        let rect = Rect::from_center(center, width, height);
        let max_health = difficulty.scale_health(p.max_health);
        Self {
            kind,
            rect,
            hitbox: rect.inflate(-rect.w * ENEMY_HITBOX_SHRINK, -rect.h * ENEMY_HITBOX_SHRINK),
            health: max_health,
            max_health,
            damage: difficulty.scale_damage(p.damage),
            speed: p.speed,
            attack_cooldown_ms: p.attack_cooldown_ms,
            exp_reward: p.exp_reward,
            weapon_drop_chance: WEAPON_DROP_CHANCE,
            death_time: None,
            last_attack: None,
            hit_flash_until: None,
            anim_time: 0.0,
            death_frame: 0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn set_hitbox(&mut self, hitbox: Rect) {
        self.hitbox = hitbox;
        self.rect.set_center(hitbox.center());
    }

    pub fn is_dying(&self) -> bool {
        self.death_time.is_some()
    }

    /// 現在のアニメーションフレーム番号（フレーム数での巡回は呼び出し側）
    pub fn frame_index(&self) -> usize {
        match self.death_time {
            Some(_) => self.death_frame,
            None => (self.anim_time * ENEMY_ANIM_FPS) as usize,
        }
    }

    pub fn animate(&mut self, dt: f32) {
        self.anim_time += dt;
    }

    /// 初回は即座に攻撃できる
    pub fn can_attack(&self, now: u64) -> bool {
        self.last_attack
            .map_or(true, |t| now.saturating_sub(t) >= self.attack_cooldown_ms)
    }

    pub fn is_flashing(&self, now: u64) -> bool {
        self.hit_flash_until.is_some_and(|until| now < until)
    }

    pub fn fade_finished(&self, now: u64) -> bool {
        self.death_time
            .is_some_and(|t| now.saturating_sub(t) >= ENEMY_DEATH_FADE_MS)
    }

    /// 描画用の不透明度（生存中 1.0、フェード中は線形に 0.0 へ）
    pub fn alpha(&self, now: u64) -> f32 {
        match self.death_time {
            None => 1.0,
            Some(t) => {
                let elapsed = now.saturating_sub(t) as f32;
                (1.0 - elapsed / ENEMY_DEATH_FADE_MS as f32).clamp(0.0, 1.0)
            }
        }
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }
}

impl Damageable for Enemy {
    fn is_alive(&self) -> bool {
        self.death_time.is_none()
    }

    fn take_damage(&mut self, amount: i32, now: u64) -> bool {
        if self.death_time.is_some() {
            return false;
        }
        self.health -= amount;
        self.hit_flash_until = Some(now + ENEMY_HIT_FLASH_MS);
        if self.health <= 0 {
            self.death_frame = self.frame_index();
            self.death_time = Some(now);
            return true;
        }
        false
    }
}

/// 敵スロット
///
/// `alive` はスロットが使用中かどうか（フェードアウト中の敵も含む）。
/// 空きスロットのインデックススタックで O(1) で取得・返却する。
pub struct EnemyWorld {
    pub slots: Vec<Enemy>,
    pub alive: Vec<bool>,
    pub count: usize,
    free_list: Vec<usize>,
}

impl Default for EnemyWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self {
            slots:     Vec::new(),
            alive:     Vec::new(),
            count:     0,
            free_list: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn spawn(&mut self, enemy: Enemy) -> usize {
        self.count += 1;
        if let Some(i) = self.free_list.pop() {
            self.slots[i] = enemy;
            self.alive[i] = true;
            i
        } else {
            self.slots.push(enemy);
            self.alive.push(true);
            self.slots.len() - 1
        }
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    pub fn get(&self, i: usize) -> Option<&Enemy> {
        if self.alive.get(i).copied().unwrap_or(false) {
            self.slots.get(i)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut Enemy> {
        if self.alive.get(i).copied().unwrap_or(false) {
            self.slots.get_mut(i)
        } else {
            None
        }
    }

    /// 当たり判定の対象（フェードアウト中を除く）
    pub fn get_living(&self, i: usize) -> Option<&Enemy> {
        self.get(i).filter(|e| !e.is_dying())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Enemy)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.alive[i])
    }

    pub fn living_count(&self) -> usize {
        self.iter().filter(|(_, e)| !e.is_dying()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::difficulty::Difficulty;

    fn normal() -> DifficultyParams {
        Difficulty::Normal.params()
    }

    #[test]
    fn bat_dies_exactly_once() {
        let mut bat = Enemy::new(EnemyKind::Bat, Vec2::ZERO, &normal());
        assert!(!bat.take_damage(15, 100));
        assert_eq!(bat.health, 15);
        assert!(bat.take_damage(15, 200));
        assert_eq!(bat.health, 0);
        assert!(!bat.take_damage(15, 300));
        assert_eq!(bat.death_time, Some(200));
    }

    #[test]
    fn hard_skeleton_is_scaled_at_construction() {
        let s = Enemy::new(EnemyKind::Skeleton, Vec2::ZERO, &Difficulty::Hard.params());
        assert_eq!(s.max_health, 135);
        assert_eq!(s.health, 135);
        assert_eq!(s.damage, 20);
    }

    #[test]
    fn hitbox_is_shrunk_by_sixty_percent() {
        let e = Enemy::new(EnemyKind::Slime, Vec2::new(100.0, 100.0), &normal());
        assert!((e.hitbox.w - 25.6).abs() < 1e-3);
        assert_eq!(e.hitbox.center(), e.rect.center());
    }

    #[test]
    fn rect_follows_given_size() {
        let e = Enemy::with_size(EnemyKind::Bat, Vec2::new(50.0, 50.0), (40.0, 20.0), &normal());
        assert_eq!((e.rect.w, e.rect.h), (40.0, 20.0));
        assert_eq!(e.rect.center(), Vec2::new(50.0, 50.0));
        assert!((e.hitbox.w - 16.0).abs() < 1e-3);
    }

    #[test]
    fn fade_and_flash_timers() {
        let mut e = Enemy::new(EnemyKind::Bat, Vec2::ZERO, &normal());
        e.take_damage(100, 1000);
        assert!(e.is_flashing(1299));
        assert!(!e.is_flashing(1300));
        assert!(!e.fade_finished(1599));
        assert!(e.fade_finished(1600));
        assert!((e.alpha(1300) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn attack_cooldown() {
        let mut e = Enemy::new(EnemyKind::Slime, Vec2::ZERO, &normal());
        assert!(e.can_attack(0));
        e.last_attack = Some(0);
        assert!(!e.can_attack(1199));
        assert!(e.can_attack(1200));
    }

    #[test]
    fn slots_are_reused_after_kill() {
        let mut world = EnemyWorld::new();
        let a = world.spawn(Enemy::new(EnemyKind::Bat, Vec2::ZERO, &normal()));
        world.kill(a);
        world.kill(a);
        assert_eq!(world.count, 0);
        let b = world.spawn(Enemy::new(EnemyKind::Boss, Vec2::ZERO, &normal()));
        assert_eq!(a, b);
        assert_eq!(world.get(b).map(|e| e.kind), Some(EnemyKind::Boss));
    }
}
