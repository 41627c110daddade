//! Path: native/game_world/src/map.rs
//! Summary: ラウンド開始時に渡されるマップ情報（障害物・プレイヤー初期位置・敵スポーン地点）

use game_core::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// マップファイルの読み込みは外部の責務。ここでは読み込み済みの形だけを受け取る
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub obstacles:    Vec<Rect>,
    pub player_spawn: Vec2,
    pub enemy_spawns: Vec<Vec2>,
}

impl MapLayout {
    /// 障害物のない平面
    pub fn open(player_spawn: Vec2, enemy_spawns: Vec<Vec2>) -> Self {
        Self {
            obstacles: Vec::new(),
            player_spawn,
            enemy_spawns,
        }
    }

    /// 外周を壁で囲み、中に柱を 4 本置いた矩形アリーナ（ヘッドレス実行用）。
    /// 敵スポーン地点は壁の内側に沿って `spacing` 間隔で並べる。
    pub fn arena(width: f32, height: f32, spacing: f32) -> Self {
        const WALL: f32 = 64.0;
        const PILLAR: f32 = 96.0;
        let mut obstacles = vec![
            Rect::new(0.0, 0.0, width, WALL),
            Rect::new(0.0, height - WALL, width, WALL),
            Rect::new(0.0, 0.0, WALL, height),
            Rect::new(width - WALL, 0.0, WALL, height),
        ];
        for (fx, fy) in [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)] {
            obstacles.push(Rect::from_center(Vec2::new(width * fx, height * fy), PILLAR, PILLAR));
        }

        let inset = WALL + 64.0;
        let spacing = spacing.max(1.0);
        let mut enemy_spawns = Vec::new();
        let mut x = inset;
        while x <= width - inset {
            enemy_spawns.push(Vec2::new(x, inset));
            enemy_spawns.push(Vec2::new(x, height - inset));
            x += spacing;
        }
        let mut y = inset + spacing;
        while y < height - inset {
            enemy_spawns.push(Vec2::new(inset, y));
            enemy_spawns.push(Vec2::new(width - inset, y));
            y += spacing;
        }

        Self {
            obstacles,
            player_spawn: Vec2::new(width / 2.0, height / 2.0),
            enemy_spawns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_spawns_are_inside_walls() {
        let map = MapLayout::arena(2000.0, 1500.0, 200.0);
        assert!(!map.enemy_spawns.is_empty());
        for p in &map.enemy_spawns {
            assert!(p.x > 64.0 && p.x < 2000.0 - 64.0);
            assert!(p.y > 64.0 && p.y < 1500.0 - 64.0);
        }
        let spawn = Rect::from_center(map.player_spawn, 68.0, 38.0);
        assert!(map.obstacles.iter().all(|o| !o.intersects(&spawn)));
    }
}
