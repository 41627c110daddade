//! Path: native/game_world/src/render_snapshot.rs
//! Summary: GameWorld から描画用スナップショットと HUD データを構築
//!
//! 描画層はこのスナップショットだけを読み、ワールドには触れない。

use crate::world::{GameWorld, WeaponCarrier};
use game_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use game_core::enemy::EnemyKind;
use game_core::entity_params::SWORD_PARAMS;
use game_core::geometry::Vec2;
use game_core::weapon::WeaponKind;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawKind {
    Player,
    Enemy { kind: EnemyKind },
    Bullet { weapon: WeaponKind },
    Item { weapon: WeaponKind },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Drawable {
    pub kind:     DrawKind,
    /// 中心座標（ワールド座標）
    pub position: Vec2,
    pub frame:    usize,
    pub alpha:    f32,
    pub rotation: f32,
    /// 被弾直後の白フラッシュ
    pub flash:    bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HpBar {
    pub position: Vec2,
    pub width:    f32,
    pub fraction: f32,
}

/// 剣の攻撃範囲アニメーション
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwordArc {
    pub center:    Vec2,
    pub direction: Vec2,
    pub range:     f32,
    pub angle_deg: f32,
    /// 0.0..=1.0
    pub progress:  f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudWeapon {
    pub kind:    WeaponKind,
    pub name:    String,
    pub damage:  i32,
    pub ready:   bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudData {
    pub health:             i32,
    pub max_health:         i32,
    pub level:              u32,
    pub experience:         u32,
    pub exp_to_next:        u32,
    pub kills:              u32,
    pub survival_ms:        u64,
    pub time_until_boss_ms: u64,
    pub weapons:            Vec<HudWeapon>,
    pub current_weapon:     Option<usize>,
    pub enemy_count:        usize,
    pub bullet_count:       usize,
    pub item_count:         usize,
    pub alive:              bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub frame_id:      u32,
    pub drawables:     Vec<Drawable>,
    pub hp_bars:       Vec<HpBar>,
    pub sword_arc:     Option<SwordArc>,
    /// プレイヤー中心を画面中心に置くためのオフセット
    pub camera_offset: Vec2,
    pub hud:           HudData,
}

pub fn build_render_snapshot(w: &GameWorld) -> RenderSnapshot {
    let now = w.now_ms;

    // 1. スプライト（player, enemies, bullets, items）
    let mut drawables = Vec::with_capacity(1 + w.enemies.count + w.bullets.count + w.items.count);
    let mut hp_bars = Vec::with_capacity(w.enemies.count);

    drawables.push(Drawable {
        kind:     DrawKind::Player,
        position: w.player.center(),
        frame:    0,
        alpha:    if w.player.alive { 1.0 } else { 0.0 },
        rotation: w.player.facing.angle_deg(),
        flash:    false,
    });

    for (_, enemy) in w.enemies.iter() {
        drawables.push(Drawable {
            kind:     DrawKind::Enemy { kind: enemy.kind },
            position: enemy.center(),
            frame:    enemy.frame_index(),
            alpha:    enemy.alpha(now),
            rotation: 0.0,
            flash:    enemy.is_flashing(now),
        });
        if !enemy.is_dying() {
            let bar_y = enemy.rect.top() - 8.0;
            hp_bars.push(HpBar {
                position: Vec2::new(enemy.center().x, bar_y),
                width:    enemy.kind.params().hp_bar_width,
                fraction: enemy.health_fraction(),
            });
        }
    }

    for i in 0..w.bullets.len() {
        if w.bullets.alive[i] {
            let dir = Vec2::new(w.bullets.directions_x[i], w.bullets.directions_y[i]);
            drawables.push(Drawable {
                kind:     DrawKind::Bullet { weapon: w.bullets.weapon_kind[i] },
                position: w.bullets.position(i),
                frame:    0,
                alpha:    1.0,
                rotation: dir.angle_deg(),
                flash:    false,
            });
        }
    }

    for i in 0..w.items.len() {
        let Some(weapon) = w.items.kind(i).filter(|_| w.items.alive[i]) else {
            continue;
        };
        drawables.push(Drawable {
            kind:     DrawKind::Item { weapon },
            position: w.items.position(i),
            frame:    0,
            alpha:    1.0,
            rotation: w.items.rotation_deg(i),
            flash:    false,
        });
    }

    // 2. 剣の攻撃範囲
    let sword_arc = w.player.current_weapon().and_then(|weapon| {
        let progress = weapon.attack_progress(now)?;
        Some(SwordArc {
            center:    w.player.center(),
            direction: weapon.facing,
            range:     SWORD_PARAMS.range,
            angle_deg: SWORD_PARAMS.angle_deg,
            progress,
        })
    });

    // 3. カメラオフセット
    let center = w.player.center();
    let camera_offset = Vec2::new(center.x - SCREEN_WIDTH / 2.0, center.y - SCREEN_HEIGHT / 2.0);

    // 4. HUD
    let weapons = w
        .player
        .weapons
        .iter()
        .map(|weapon| HudWeapon {
            kind:   weapon.kind,
            name:   weapon.kind.name().to_string(),
            damage: weapon.hit_damage(),
            ready:  weapon.can_fire(),
        })
        .collect();

    let hud = HudData {
        health:             w.player.health,
        max_health:         w.player.max_health,
        level:              w.player.level,
        experience:         w.player.experience,
        exp_to_next:        w.player.exp_to_next,
        kills:              w.kill_count,
        survival_ms:        w.survival_ms(),
        time_until_boss_ms: w.time_until_boss(),
        weapons,
        current_weapon:     w.player.current_weapon,
        enemy_count:        w.enemies.living_count(),
        bullet_count:       w.bullets.count,
        item_count:         w.items.count,
        alive:              w.player.alive,
    };

    RenderSnapshot {
        frame_id: w.frame_id,
        drawables,
        hp_bars,
        sword_arc,
        camera_offset,
        hud,
    }
}
