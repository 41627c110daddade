//! Path: native/game_core/src/weapon.rs
//! Summary: 武器種類・クールダウン状態機械・発射（弾生成 / 剣の扇形判定）

use crate::entity_params::{WeaponParams, SWORD_PARAMS};
use crate::geometry::{Rect, Vec2};
use crate::physics::rng::SimpleRng;
use serde::{Deserialize, Serialize};

// ─── WeaponKind ───────────────────────────────────────────────
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WeaponKind {
    Pistol    = 0,
    /// 5 発のペレットを扇状に撃つ
    Shotgun   = 1,
    /// 短いクールダウンと小さなジッター
    AutoRifle = 2,
    /// 弾丸を生成しない近接扇形判定
    Sword     = 3,
}

impl WeaponKind {
    /// 敵の撃破時にドロップしうる武器
    pub const DROPPABLE: [WeaponKind; 2] = [Self::Shotgun, Self::AutoRifle];

    pub fn params(self) -> &'static WeaponParams {
        WeaponParams::get(self)
    }

    pub fn name(self) -> &'static str {
        self.params().name
    }
}

/// 照準入力からの向き。ポインタがビューポート中心と一致する場合は上向き
pub fn aim_direction(pointer: Vec2, viewport: Vec2) -> Vec2 {
    let center = Vec2::new(viewport.x / 2.0, viewport.y / 2.0);
    (pointer - center).normalize_or(Vec2::UP)
}

// ─── Fire actions ─────────────────────────────────────────────

/// 発射時にワールドへ生成を依頼する弾
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSpawn {
    pub origin:    Vec2,
    pub direction: Vec2,
    /// 発射時点の武器ダメージ（命中時に武器を持っていなければこちらを使う）
    pub damage:    i32,
    pub weapon:    WeaponKind,
}

/// 剣の一振り。ワールド側で敵に適用する
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorSweep {
    pub center:    Vec2,
    pub direction: Vec2,
    pub range:     f32,
    pub angle_deg: f32,
    pub damage:    i32,
}

impl SectorSweep {
    /// 向き方向へ range/2 だけ進めた点を中心とする一辺 range の正方形
    pub fn area(&self) -> Rect {
        Rect::from_center(self.center + self.direction * (self.range / 2.0), self.range, self.range)
    }

    /// 対象の矩形が判定領域に重なり、かつ中心への角度差が半角以内なら命中
    pub fn hits(&self, target: &Rect) -> bool {
        if !self.area().intersects(target) {
            return false;
        }
        let to_target = target.center() - self.center;
        self.direction.angle_to_deg(to_target).abs() <= self.angle_deg / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FireAction {
    Bullets(Vec<BulletSpawn>),
    Sweep(SectorSweep),
}

// ─── Weapon ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireState {
    Ready,
    Cooling { since: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    pub kind:        WeaponKind,
    /// レベルアップで 1.05 倍ずつ伸びる。命中時は切り捨てて整数で与える
    pub damage:      f32,
    pub cooldown_ms: u64,
    state:           FireState,
    pub facing:      Vec2,
    /// 武器スプライトの中心（所持者中心から向き方向へ spawn_distance）
    pub anchor:      Vec2,
    owner_center:    Vec2,
    /// 剣の攻撃開始時刻（攻撃中のみ Some）
    attack_started:  Option<u64>,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        let params = kind.params();
        Self {
            kind,
            damage:         params.damage,
            cooldown_ms:    params.cooldown_ms,
            state:          FireState::Ready,
            facing:         Vec2::UP,
            anchor:         Vec2::ZERO,
            owner_center:   Vec2::ZERO,
            attack_started: None,
        }
    }

    pub fn state(&self) -> FireState {
        self.state
    }

    pub fn can_fire(&self) -> bool {
        self.state == FireState::Ready
    }

    pub fn hit_damage(&self) -> i32 {
        self.damage as i32
    }

    pub fn scale_damage(&mut self, factor: f32) {
        self.damage *= factor;
    }

    /// 所持者の中心と向きから武器位置を更新する。ゼロベクトルの向きは直前の向きを保つ
    pub fn aim(&mut self, center: Vec2, facing: Vec2) {
        self.facing = facing.normalize_or(self.facing);
        self.owner_center = center;
        self.anchor = center + self.facing * self.kind.params().spawn_distance;
    }

    pub fn muzzle(&self) -> Vec2 {
        self.anchor + self.facing * self.kind.params().spawn_distance
    }

    /// クールダウン明けなら発射し、ワールドへの作用を返す。
    /// 剣は攻撃中に再度振ってもクールダウンだけ消費して判定は出さない。
    pub fn fire(&mut self, now: u64, rng: &mut SimpleRng) -> Option<FireAction> {
        if !self.can_fire() {
            return None;
        }
        self.state = FireState::Cooling { since: now };
        let damage = self.hit_damage();
        let params = self.kind.params();
        match self.kind {
            WeaponKind::Pistol => Some(FireAction::Bullets(vec![self.bullet(self.facing, damage)])),
            WeaponKind::Shotgun => {
                let s = params.spread_deg;
                let pellets = [-s, -s / 2.0, 0.0, s / 2.0, s]
                    .iter()
                    .map(|&offset| self.bullet(self.facing.rotated_deg(offset), damage))
                    .collect();
                Some(FireAction::Bullets(pellets))
            }
            WeaponKind::AutoRifle => {
                let jitter = (rng.next_f32() - 0.5) * params.spread_deg;
                Some(FireAction::Bullets(vec![self.bullet(self.facing.rotated_deg(jitter), damage)]))
            }
            WeaponKind::Sword => {
                if self.attack_started.is_some() {
                    return None;
                }
                self.attack_started = Some(now);
                Some(FireAction::Sweep(SectorSweep {
                    center:    self.owner_center,
                    direction: self.facing,
                    range:     SWORD_PARAMS.range,
                    angle_deg: SWORD_PARAMS.angle_deg,
                    damage,
                }))
            }
        }
    }

    fn bullet(&self, direction: Vec2, damage: i32) -> BulletSpawn {
        BulletSpawn {
            origin: self.muzzle(),
            direction,
            damage,
            weapon: self.kind,
        }
    }

    /// 攻撃窓とクールダウンを進める。両者は独立に解除される
    pub fn update_timer(&mut self, now: u64) {
        if let Some(start) = self.attack_started {
            if now.saturating_sub(start) >= SWORD_PARAMS.duration_ms {
                self.attack_started = None;
            }
        }
        if let FireState::Cooling { since } = self.state {
            if now.saturating_sub(since) >= self.cooldown_ms {
                self.state = FireState::Ready;
            }
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_started.is_some()
    }

    /// 剣の攻撃アニメーション進行度（0.0..=1.0）。攻撃中でなければ None
    pub fn attack_progress(&self, now: u64) -> Option<f32> {
        self.attack_started.map(|start| {
            (now.saturating_sub(start) as f32 / SWORD_PARAMS.duration_ms as f32).clamp(0.0, 1.0)
        })
    }

    /// 捨てる / 拾う際に攻撃中の状態を持ち越さない
    pub fn reset(&mut self) {
        self.state = FireState::Ready;
        self.attack_started = None;
    }
}
