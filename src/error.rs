use thiserror::Error;

/// `IdenticonError` は識別アイコンの生成と保存で起こりうる失敗を表す.
#[derive(Error, Debug)]
pub enum IdenticonError {
    /// 色を取り出すための 6 桁の 16 進数が得られなかった.
    #[error("invalid color format: expected 6 hex digits, but found {found:?}")]
    InvalidColorFormat { found: String },

    /// パターンを作るにはダイジェストの桁数が足りない.
    #[error("digest too short: {len} hex digits given, at least {required} required")]
    DigestTooShort { len: usize, required: usize },

    #[error("invalid digest: {found:?} at index {index} is not a hex digit")]
    InvalidDigest { index: usize, found: char },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Encode(#[from] ::image::ImageError),
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
