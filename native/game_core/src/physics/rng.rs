//! Path: native/game_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータ（スポーン・ドロップ判定・拡散用）

use crate::geometry::Vec2;

pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// 上位 31 ビット（0..=i32::MAX）
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// [0, 1) の一様乱数（ドロップ判定が `< p` で p=1.0 のとき必ず成立するよう 1.0 を含まない）
    pub fn next_f32(&mut self) -> f32 {
        // 31 ビットから上位 24 ビットを取り出す（f32 の仮数部に収まる）
        (self.next_u32() >> 7) as f32 / (1u32 << 24) as f32
    }

    /// [0, n) の一様整数。n == 0 のときは 0
    pub fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u32() as usize) % n
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let i = self.next_index(items.len());
            items.get(i)
        }
    }

    /// ランダムな向きの単位ベクトル
    pub fn unit_vector(&mut self) -> Vec2 {
        Vec2::from_angle_deg(self.next_f32() * 360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_reproducibility() {
        let mut rng = SimpleRng::new(12345);
        let a: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        let mut rng2 = SimpleRng::new(12345);
        let b: Vec<u32> = (0..10).map(|_| rng2.next_u32()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn next_f32_in_half_open_range() {
        let mut rng = SimpleRng::new(999);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn next_f32_covers_upper_half() {
        let mut rng = SimpleRng::new(67890);
        let max = (0..10_000).map(|_| rng.next_f32()).fold(0.0f32, f32::max);
        assert!(max > 0.99);
    }

    #[test]
    fn next_f32_below_p_with_probability_p() {
        let mut rng = SimpleRng::new(67890);
        let n = 100_000;
        for p in [0.3f32, 0.5, 0.75] {
            let hits = (0..n).filter(|_| rng.next_f32() < p).count();
            let ratio = hits as f32 / n as f32;
            assert!((ratio - p).abs() < 0.02, "p={p} ratio={ratio}");
        }
    }

    #[test]
    fn unit_vector_points_in_every_half_plane() {
        let mut rng = SimpleRng::new(67890);
        let dirs: Vec<Vec2> = (0..1000).map(|_| rng.unit_vector()).collect();
        assert!(dirs.iter().any(|d| d.y < -0.5));
        assert!(dirs.iter().any(|d| d.y > 0.5));
        assert!(dirs.iter().any(|d| d.x < -0.5));
        assert!(dirs.iter().any(|d| d.x > 0.5));
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..50 {
            assert!((rng.unit_vector().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = SimpleRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[42]), Some(&42));
    }
}
