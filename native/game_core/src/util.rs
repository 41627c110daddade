//! Path: native/game_core/src/util.rs
//! Summary: スポーン位置の計算・ドロップ武器の選択などの共通ユーティリティ

use crate::geometry::Vec2;
use crate::physics::rng::SimpleRng;
use crate::weapon::WeaponKind;

/// プレイヤー中心から `distance` だけ離れたランダムな方向の位置（ボス出現位置）
pub fn spawn_position_around_player(rng: &mut SimpleRng, center: Vec2, distance: f32) -> Vec2 {
    center + rng.unit_vector() * distance
}

/// プレイヤー初期位置から `min_distance` より遠いスポーン地点だけを残す
pub fn filter_spawn_points(points: &[Vec2], player_start: Vec2, min_distance: f32) -> Vec<Vec2> {
    points
        .iter()
        .copied()
        .filter(|p| p.distance(player_start) > min_distance)
        .collect()
}

/// 未所持のドロップ対象武器から一様に選ぶ。すべて所持済みなら None
pub fn choose_drop_kind(rng: &mut SimpleRng, owned: &[WeaponKind]) -> Option<WeaponKind> {
    let candidates: Vec<WeaponKind> = WeaponKind::DROPPABLE
        .iter()
        .copied()
        .filter(|k| !owned.contains(k))
        .collect();
    rng.choose(&candidates).copied()
}
