//! Path: native/game_core/src/physics/spatial_hash.rs
//! Summary: 空間ハッシュによる矩形クエリと静的障害物の索引

use crate::geometry::Rect;
use rustc_hash::FxHashMap;

pub struct SpatialHash {
    pub cell_size: f32,
    cells: FxHashMap<(i32, i32), Vec<usize>>,
}

impl SpatialHash {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// 矩形が覆うすべてのセルに登録する（大きな障害物用）
    pub fn insert_rect(&mut self, id: usize, rect: &Rect) {
        let (x0, y0) = self.cell_key(rect.left(), rect.top());
        let (x1, y1) = self.cell_key(rect.right(), rect.bottom());
        for ix in x0..=x1 {
            for iy in y0..=y1 {
                self.cells.entry((ix, iy)).or_default().push(id);
            }
        }
    }

    fn cell_key(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// 矩形が覆うセルの ID を重複なしで `buf` に書き込む
    pub fn query_rect_into(&self, rect: &Rect, buf: &mut Vec<usize>) {
        buf.clear();
        let (x0, y0) = self.cell_key(rect.left(), rect.top());
        let (x1, y1) = self.cell_key(rect.right(), rect.bottom());
        for ix in x0..=x1 {
            for iy in y0..=y1 {
                if let Some(ids) = self.cells.get(&(ix, iy)) {
                    buf.extend_from_slice(ids);
                }
            }
        }
        buf.sort_unstable();
        buf.dedup();
    }
}

/// 静的障害物の集合（マップ提供側から受け取った当たり矩形）
pub struct CollisionWorld {
    pub dynamic:     SpatialHash,
    pub static_hash: SpatialHash,
    pub obstacles:   Vec<Rect>,
}

impl CollisionWorld {
    pub fn new(cell_size: f32) -> Self {
        Self {
            dynamic:     SpatialHash::new(cell_size),
            static_hash: SpatialHash::new(cell_size),
            obstacles:   Vec::new(),
        }
    }

    pub fn rebuild_static(&mut self, obstacles: &[Rect]) {
        self.obstacles.clear();
        self.static_hash.clear();
        for rect in obstacles {
            let idx = self.obstacles.len();
            self.obstacles.push(*rect);
            self.static_hash.insert_rect(idx, rect);
        }
    }

    /// `rect` と実際に重なっている障害物のインデックスを `buf` に書き込む（昇順）
    pub fn query_static_overlapping_into(&self, rect: &Rect, buf: &mut Vec<usize>) {
        self.static_hash.query_rect_into(rect, buf);
        let obstacles = &self.obstacles;
        buf.retain(|&idx| obstacles.get(idx).is_some_and(|o| o.intersects(rect)));
    }
}
