//! Path: native/game_core/src/error.rs
//! Summary: 設定・アセット読み込みのエラー型

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Image {
        path:   PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;
