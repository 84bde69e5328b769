//! 文字列から左右対称の 5x5 ドット絵 (identicon) を決定的に作る.
//!
//! ```no_run
//! let identicon = identicon::generate("hello world")?;
//! identicon.save(std::path::Path::new("out"), "hello world")?;
//! # Ok::<(), identicon::IdenticonError>(())
//! ```

pub mod basis;
pub mod digest;
pub mod error;
pub mod grid;
pub mod image;

use {
    ::image::RgbImage,
    std::path::{Path, PathBuf},
};

pub use crate::{
    basis::{Color, BACKGROUND},
    digest::{derive, Digest},
    error::{IdenticonError, Result},
    grid::{Grid, Pattern, Pos},
    image::{file_name, render, CANVAS_SIZE, CELL_SIZE},
};

/// 出力先ディレクトリの既定値.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// `Identicon` は生成の各段階の結果をまとめたもの.
#[derive(Debug, Clone)]
pub struct Identicon {
    pub digest: Digest,
    pub color: Color,
    pub pattern: Pattern,
    pub image: RgbImage,
}

impl Identicon {
    pub fn save(&self, dir: &Path, text: &str) -> Result<PathBuf> {
        crate::image::save(&self.image, dir, text)
    }
}

/// `text` のダイジェストから色と対称なパターンを求め, 画像に描く.
///
/// 長さの検査はすべて描画の前に行うので, 失敗したときに描きかけの画像が返ることはない.
pub fn generate(text: &str) -> Result<Identicon> {
    let digest = derive(text);
    let color = Color::from_digest(&digest)?;
    let pattern = Pattern::from_digest(&digest)?;
    log::debug!("digest {} color {:?} pattern {:?}", digest, color, pattern);

    let image = render(&pattern, color);

    Ok(Identicon {
        digest,
        color,
        pattern,
        image,
    })
}
