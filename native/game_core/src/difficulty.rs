//! Path: native/game_core/src/difficulty.rs
//! Summary: 難易度ティアと HP・攻撃力・スポーン率の倍率

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Difficulty {
    Easy   = 0,
    #[default]
    Normal = 1,
    Hard   = 2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyParams {
    pub health_multiplier: f32,
    pub damage_multiplier: f32,
    /// スポーン判定の閾値。1.0 以上なら毎回スポーンする
    pub spawn_rate:        f32,
}

impl Difficulty {
    /// 外部セレクタ（0=Easy, 1=Normal, 2=Hard）から変換する。未知の ID は Normal
    pub fn from_u8(id: u8) -> Self {
        match id {
            0 => Self::Easy,
            2 => Self::Hard,
            _ => Self::Normal,
        }
    }

    pub fn params(self) -> DifficultyParams {
        match self {
            Self::Easy => DifficultyParams {
                health_multiplier: 0.5,
                damage_multiplier: 0.5,
                spawn_rate:        0.33,
            },
            Self::Normal => DifficultyParams {
                health_multiplier: 1.0,
                damage_multiplier: 1.0,
                spawn_rate:        1.0,
            },
            Self::Hard => DifficultyParams {
                health_multiplier: 1.5,
                damage_multiplier: 2.0,
                spawn_rate:        2.0,
            },
        }
    }
}

impl DifficultyParams {
    /// 生成時にのみ適用する。小数点以下は切り捨て
    pub fn scale_health(&self, base: i32) -> i32 {
        (base as f32 * self.health_multiplier) as i32
    }

    pub fn scale_damage(&self, base: i32) -> i32 {
        (base as f32 * self.damage_multiplier) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_skeleton_stats() {
        let p = Difficulty::Hard.params();
        assert_eq!(p.scale_health(90), 135);
        assert_eq!(p.scale_damage(10), 20);
    }

    #[test]
    fn easy_truncates() {
        let p = Difficulty::Easy.params();
        assert_eq!(p.scale_health(15), 7);
        assert_eq!(p.scale_damage(5), 2);
    }

    #[test]
    fn unknown_id_falls_back_to_normal() {
        assert_eq!(Difficulty::from_u8(7), Difficulty::Normal);
        assert_eq!(Difficulty::from_u8(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_u8(2), Difficulty::Hard);
        assert_eq!(Difficulty::from_u8(1).params().spawn_rate, 1.0);
    }
}
