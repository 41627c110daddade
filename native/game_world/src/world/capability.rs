//! Path: native/game_world/src/world/capability.rs
//! Summary: エンティティ共通の能力（被ダメージ・武器の所持）

use game_core::weapon::{Weapon, WeaponKind};

/// HP を持ち、0 以下で一度だけ死亡へ遷移するもの
pub trait Damageable {
    fn is_alive(&self) -> bool;

    /// ダメージを与える。この呼び出しで死亡へ遷移したときだけ true を返す。
    /// 死亡後の呼び出しは何もしない。
    fn take_damage(&mut self, amount: i32, now: u64) -> bool;
}

/// 武器スロットを持つもの
pub trait WeaponCarrier {
    fn weapons(&self) -> &[Weapon];

    fn current_index(&self) -> Option<usize>;

    fn current_weapon(&self) -> Option<&Weapon> {
        self.current_index().and_then(|i| self.weapons().get(i))
    }

    fn owns(&self, kind: WeaponKind) -> bool {
        self.weapons().iter().any(|w| w.kind == kind)
    }

    fn owned_kinds(&self) -> Vec<WeaponKind> {
        self.weapons().iter().map(|w| w.kind).collect()
    }
}
