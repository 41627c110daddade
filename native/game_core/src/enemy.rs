//! Path: native/game_core/src/enemy.rs
//! Summary: 敵種類の定義とスポーン時の種類選択

use crate::entity_params::EnemyParams;
use crate::physics::rng::SimpleRng;
use serde::{Deserialize, Serialize};

/// 敵の種類（判別値はパラメータテーブルのインデックス）
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum EnemyKind {
    Bat      = 0,
    Slime    = 1,
    Skeleton = 2,
    Boss     = 3,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [Self::Bat, Self::Slime, Self::Skeleton, Self::Boss];

    /// 定期スポーンの対象（ボスは専用スケジュール）
    pub const REGULAR: [EnemyKind; 3] = [Self::Bat, Self::Slime, Self::Skeleton];

    pub fn params(self) -> &'static EnemyParams {
        EnemyParams::get(self)
    }

    pub fn is_boss(self) -> bool {
        self == Self::Boss
    }

    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// 通常敵から一様に選ぶ
    pub fn random_regular(rng: &mut SimpleRng) -> Self {
        Self::REGULAR[rng.next_index(Self::REGULAR.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_regular_never_picks_boss() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..200 {
            assert!(!EnemyKind::random_regular(&mut rng).is_boss());
        }
    }

    #[test]
    fn random_regular_covers_all_kinds() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[EnemyKind::random_regular(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn boss_sprite_is_larger() {
        assert!(EnemyKind::Boss.params().sprite_w > EnemyKind::Bat.params().sprite_w);
        assert_eq!(EnemyKind::Skeleton.name(), "skeleton");
    }
}
