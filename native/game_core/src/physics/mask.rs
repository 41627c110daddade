//! Path: native/game_core/src/physics/mask.rs
//! Summary: ピクセル単位の不透明マスクと重なり判定

/// 1 ピクセル 1 ビットの不透明マスク（行優先）
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width:  u32,
    height: u32,
    bits:   Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// 外接矩形に内接する円（敵スプライトの代替マスク）
    pub fn circle(width: u32, height: u32) -> Self {
        let mut mask = Self::new(width, height);
        let r = width.min(height) as f32 / 2.0;
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        for y in 0..height {
            for x in 0..width {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// RGBA8 バッファのアルファ値から作る（閾値以上を不透明とみなす）
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8], alpha_threshold: u8) -> Self {
        let mut mask = Self::new(width, height);
        for (i, px) in rgba.chunks_exact(4).enumerate().take((width * height) as usize) {
            mask.bits[i] = px[3] >= alpha_threshold;
        }
        mask
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = value;
        }
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// `other` を self の左上から (ox, oy) ずらして置いたとき、不透明ピクセルが重なるか
    pub fn overlaps(&self, other: &Mask, ox: i32, oy: i32) -> bool {
        let x_start = ox.max(0);
        let y_start = oy.max(0);
        let x_end = (ox + other.width as i32).min(self.width as i32);
        let y_end = (oy + other.height as i32).min(self.height as i32);
        if x_start >= x_end || y_start >= y_end {
            return false;
        }
        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x as u32, y as u32) && other.get((x - ox) as u32, (y - oy) as u32) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_corners_are_transparent() {
        let m = Mask::circle(64, 64);
        assert!(!m.get(0, 0));
        assert!(!m.get(63, 63));
        assert!(m.get(32, 32));
    }

    #[test]
    fn bounding_box_overlap_without_pixel_overlap() {
        // 円の左上の角に小さな弾が重なっても、不透明ピクセル同士は重ならない
        let enemy = Mask::circle(64, 64);
        let bullet = Mask::filled(4, 4);
        assert!(!enemy.overlaps(&bullet, 0, 0));
        assert!(enemy.overlaps(&bullet, 30, 30));
    }

    #[test]
    fn negative_offsets_are_handled() {
        let a = Mask::filled(10, 10);
        let b = Mask::filled(10, 10);
        assert!(a.overlaps(&b, -9, -9));
        assert!(!a.overlaps(&b, -10, 0));
        assert!(!a.overlaps(&b, 10, 0));
    }

    #[test]
    fn from_rgba_uses_alpha() {
        let rgba = [255, 0, 0, 255, 0, 0, 0, 0, 9, 9, 9, 128, 1, 1, 1, 10];
        let m = Mask::from_rgba(2, 2, &rgba, 127);
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(m.get(0, 1));
        assert!(!m.get(1, 1));
        assert_eq!(m.count(), 2);
    }
}
