use {
    crate::{
        basis::{Color, BACKGROUND},
        error::Result,
        grid::{Pattern, GRID_SIZE},
    },
    ::image::{ImageFormat, RgbImage},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

#[cfg(test)]
mod tests;

/// 1 セルの一辺のピクセル数.
pub const CELL_SIZE: u32 = 50;

/// 出力画像の一辺のピクセル数.
pub const CANVAS_SIZE: u32 = GRID_SIZE as u32 * CELL_SIZE;

/// 保存する画像の拡張子.
pub const IMAGE_EXTENSION: &str = "png";

/// `pattern` の塗るセルを `color` で塗った 250x250 の画像を作る.
///
/// 行番号が Y 座標, 列番号が X 座標に対応する. 各セルは `[x, x + CELL_SIZE)` x `[y, y + CELL_SIZE)` の半開区間を塗る.
pub fn render(pattern: &Pattern, color: Color) -> RgbImage {
    let mut image = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND.into());

    for pos in pattern.iter_on() {
        let left = pos.x() as u32 * CELL_SIZE;
        let top = pos.y() as u32 * CELL_SIZE;
        for y in top..top + CELL_SIZE {
            for x in left..left + CELL_SIZE {
                image.put_pixel(x, y, color.into());
            }
        }
    }

    image
}

/// 入力文字列から保存するファイル名を作る. 空白はハイフンに置き換える.
pub fn file_name(text: &str) -> String {
    format!("{}.{}", text.replace(' ', "-"), IMAGE_EXTENSION)
}

/// `dir` がなければ作り, `dir` の下に `text` から決まる名前で PNG を保存する. 保存先のパスを返す.
pub fn save(image: &RgbImage, dir: &Path, text: &str) -> Result<PathBuf> {
    if !dir.exists() {
        log::debug!("creating output directory {}", dir.display());
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(file_name(text));
    save_png(image, &path)?;
    Ok(path)
}

pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}
