//! Path: native/game_core/src/asset.rs
//! Summary: 当たり判定マスクのロード（PNG のアルファ → Mask）とプレースホルダー
//!
//! 画像が見つからない・壊れている場合でもゲームは止めず、円形マスクで代用する。

use crate::constants::BULLET_SIZE;
use crate::enemy::EnemyKind;
use crate::error::{CoreError, CoreResult};
use crate::physics::mask::Mask;
use std::path::{Path, PathBuf};

/// アセットのベースパスを指定する環境変数
pub const ASSETS_ENV: &str = "SURVIVOR_ASSETS_PATH";

/// この値以上のアルファを不透明として扱う
const ALPHA_THRESHOLD: u8 = 127;

/// 画像ファイルからマスクを読み込む。
/// ベースパスが無い場合はカレントディレクトリからの相対パスで探す。
pub struct AssetLoader {
    base_path: Option<PathBuf>,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    /// 環境変数 `SURVIVOR_ASSETS_PATH` が設定されていればベースパスとして使用する
    pub fn new() -> Self {
        let base_path = std::env::var(ASSETS_ENV).ok().map(PathBuf::from);
        Self { base_path }
    }

    pub fn with_base_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            base_path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(relative),
            None => PathBuf::from(relative),
        }
    }

    pub fn load_mask(&self, relative: &str) -> CoreResult<Mask> {
        let path = self.resolve(relative);
        let img = image::open(&path)
            .map_err(|source| CoreError::Image { path: path.clone(), source })?
            .to_rgba8();
        Ok(Mask::from_rgba(img.width(), img.height(), img.as_raw(), ALPHA_THRESHOLD))
    }

    /// 敵 1 種類分のアニメーションフレーム。1 枚でも欠けていれば None
    fn load_enemy_frames(&self, kind: EnemyKind) -> Option<Vec<Mask>> {
        let params = kind.params();
        let mut frames = Vec::with_capacity(params.frame_count);
        for i in 0..params.frame_count {
            let rel = format!("images/enemies/{}/{}.png", params.name, i);
            match self.load_mask(&rel) {
                Ok(mask) => frames.push(mask),
                Err(e) => {
                    log::warn!("{e}; using placeholder mask for {}", params.name);
                    return None;
                }
            }
        }
        Some(frames)
    }
}

/// 敵の種類ごとのアニメーションフレームマスクと弾のマスク
pub struct MaskLibrary {
    enemy_frames: [Vec<Mask>; 4],
    bullet:       Mask,
}

impl Default for MaskLibrary {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl MaskLibrary {
    /// 画像を使わない円形マスク（ヘッドレス実行とテスト用）
    pub fn placeholder() -> Self {
        Self {
            enemy_frames: EnemyKind::ALL.map(Self::placeholder_frames),
            bullet:       Mask::circle(BULLET_SIZE, BULLET_SIZE),
        }
    }

    fn placeholder_frames(kind: EnemyKind) -> Vec<Mask> {
        let p = kind.params();
        vec![Mask::circle(p.sprite_w as u32, p.sprite_h as u32); p.frame_count.max(1)]
    }

    /// 画像から読み込む。読めなかった種類は円形マスクで代用する
    pub fn load(loader: &AssetLoader) -> Self {
        let enemy_frames = EnemyKind::ALL.map(|kind| {
            loader
                .load_enemy_frames(kind)
                .filter(|frames| !frames.is_empty())
                .unwrap_or_else(|| Self::placeholder_frames(kind))
        });
        let bullet = loader.load_mask("images/gun/bullet.png").unwrap_or_else(|e| {
            log::warn!("{e}; using placeholder bullet mask");
            Mask::circle(BULLET_SIZE, BULLET_SIZE)
        });
        Self { enemy_frames, bullet }
    }

    pub fn frame_count(&self, kind: EnemyKind) -> usize {
        self.enemy_frames[kind as usize].len()
    }

    /// フレーム番号はフレーム数で巡回させる
    pub fn enemy_frame(&self, kind: EnemyKind, frame: usize) -> &Mask {
        let frames = &self.enemy_frames[kind as usize];
        &frames[frame % frames.len()]
    }

    pub fn bullet(&self) -> &Mask {
        &self.bullet
    }

    /// 1 フレーム目のマスクの大きさ（敵の描画矩形はこれに合わせる）
    pub fn enemy_size(&self, kind: EnemyKind) -> (f32, f32) {
        let first = self.enemy_frame(kind, 0);
        (first.width() as f32, first.height() as f32)
    }

    pub fn bullet_size(&self) -> (f32, f32) {
        (self.bullet.width() as f32, self.bullet.height() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_fall_back_to_placeholders() {
        let loader = AssetLoader::with_base_path("/definitely/not/here");
        let lib = MaskLibrary::load(&loader);
        assert_eq!(lib.frame_count(EnemyKind::Bat), EnemyKind::Bat.params().frame_count);
        assert_eq!(lib.enemy_frame(EnemyKind::Boss, 0).width(), 128);
        assert_eq!(lib.bullet().width(), BULLET_SIZE);
    }

    #[test]
    fn sizes_follow_loaded_masks() {
        let dir = std::env::temp_dir().join(format!("survivor_sizes_{}", std::process::id()));
        std::fs::create_dir_all(dir.join("images/gun")).unwrap();
        image::RgbaImage::new(20, 6).save(dir.join("images/gun/bullet.png")).unwrap();

        let lib = MaskLibrary::load(&AssetLoader::with_base_path(&dir));
        assert_eq!(lib.bullet_size(), (20.0, 6.0));
        let boss = EnemyKind::Boss.params();
        assert_eq!(lib.enemy_size(EnemyKind::Boss), (boss.sprite_w, boss.sprite_h));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn frame_index_wraps() {
        let lib = MaskLibrary::placeholder();
        let n = lib.frame_count(EnemyKind::Slime);
        assert_eq!(lib.enemy_frame(EnemyKind::Slime, n + 1), lib.enemy_frame(EnemyKind::Slime, 1));
    }

    #[test]
    fn load_mask_reports_image_error() {
        let loader = AssetLoader::with_base_path("/definitely/not/here");
        assert!(matches!(loader.load_mask("x.png"), Err(CoreError::Image { .. })));
    }

    #[test]
    fn load_mask_reads_png_alpha() {
        let dir = std::env::temp_dir().join(format!("survivor_mask_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut img = image::RgbaImage::new(4, 2);
        img.put_pixel(1, 0, image::Rgba([255, 255, 255, 255]));
        img.put_pixel(3, 1, image::Rgba([255, 255, 255, 200]));
        img.save(dir.join("m.png")).unwrap();

        let mask = AssetLoader::with_base_path(&dir).load_mask("m.png").unwrap();
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.count(), 2);
        assert!(mask.get(1, 0) && mask.get(3, 1));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
