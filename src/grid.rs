use {
    crate::{
        digest::Digest,
        error::{IdenticonError, Result},
    },
    std::ops,
};


/// パターンの一辺のセル数.
pub const GRID_SIZE: u8 = 5;

/// パターンの 0 番目のセルに対応するダイジェストの桁.
pub const GRID_OFFSET: usize = 6;

/// パターンを作るのに必要なダイジェストの最小桁数.
pub const MIN_GRID_DIGEST_LEN: usize = GRID_OFFSET + GRID_SIZE as usize * GRID_SIZE as usize;

/// `Pos` は `Grid` に存在するセルの座標を表す. X 座標が列, Y 座標が行に対応する.
///
/// フィールドの `u8` の上位 4 ビットに X 座標, 下位 4 ビットに Y 座標を格納する. それぞれは必ず `Grid` の `width` と `height` 未満になる.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos(u8);

impl std::fmt::Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Pos {
    fn new(x: u8, y: u8) -> Self {
        debug_assert!(x <= 0xf);
        debug_assert!(y <= 0xf);
        Self(x << 4 | y)
    }

    pub fn x(&self) -> u8 {
        self.0 >> 4 & 0xf
    }

    pub fn y(&self) -> u8 {
        self.0 & 0xf
    }
}

/// `RangePos` は `Grid` 上の全セルを行優先で走査する `Iterator`.
pub struct RangePos {
    width: u8,
    height: u8,
    x: u8,
    y: u8,
}

impl Iterator for RangePos {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.height <= self.y {
            return None;
        }
        let ret = Pos::new(self.x, self.y);
        self.x += 1;
        if self.width <= self.x {
            self.y += 1;
            self.x = 0;
        }
        Some(ret)
    }
}

/// `Grid` は識別アイコンのセル配置を表す. `Pos` はこれを介してのみ作成できる.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_SIZE)
    }
}

impl Grid {
    pub(crate) fn new(width: u8, height: u8) -> Self {
        assert!(
            width <= 0x10 && height <= 0x10,
            "{}x{} grid does not fit in Pos",
            width,
            height
        );
        Self { width, height }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_pos_valid(&self, pos: Pos) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// 列 `x`, 行 `y` の座標を返す.
    #[cfg(test)]
    pub(crate) fn pos(&self, x: u8, y: u8) -> Pos {
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);
        Pos::new(x, y)
    }

    /// 左右反転した位置を返す.
    pub fn mirror_of(&self, pos: Pos) -> Pos {
        Pos::new(self.width - 1 - pos.x(), pos.y())
    }

    pub fn all_pos(&self) -> RangePos {
        RangePos {
            width: self.width,
            height: self.height,
            x: 0,
            y: 0,
        }
    }

    fn pos_as_index(&self, pos: Pos) -> usize {
        pos.y() as usize * self.width as usize + pos.x() as usize
    }
}

/// `Pattern` は各セルを塗るかどうかを表す 5x5 の真偽値行列.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    grid: Grid,
    cells: Vec<bool>,
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        for row in self.rows().iter() {
            let line: String = row.iter().map(|&on| if on { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Pattern {
    /// ダイジェストからパターンを作り, 左右対称にする.
    pub fn from_digest(digest: &Digest) -> Result<Self> {
        let mut pattern = Self::unmirrored(digest)?;
        pattern.mirror();
        Ok(pattern)
    }

    /// 対称化をせずにパターンを作る. 行 `i` 列 `j` のセルは `i * 5 + j + 6` 桁目の数字が偶数なら塗る.
    pub fn unmirrored(digest: &Digest) -> Result<Self> {
        if digest.len() < MIN_GRID_DIGEST_LEN {
            return Err(IdenticonError::DigestTooShort {
                len: digest.len(),
                required: MIN_GRID_DIGEST_LEN,
            });
        }

        let grid = Grid::default();
        let cells = grid
            .all_pos()
            .map(|pos| {
                let c = grid.pos_as_index(pos) + GRID_OFFSET;
                digest
                    .nibble(c)
                    .map(|n| n % 2 == 0)
                    .ok_or_else(|| IdenticonError::DigestTooShort {
                        len: digest.len(),
                        required: MIN_GRID_DIGEST_LEN,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { grid, cells })
    }

    /// 左半分を右半分に写す. 4 列目は 0 列目, 3 列目は 1 列目の値で上書きし, 中央列はそのまま.
    pub fn mirror(&mut self) {
        let grid = self.grid;
        let half = grid.width() / 2;
        for pos in grid.all_pos().filter(|pos| pos.x() < half) {
            self[grid.mirror_of(pos)] = self[pos];
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn is_on(&self, pos: Pos) -> bool {
        self[pos]
    }

    pub fn is_symmetric(&self) -> bool {
        self.grid
            .all_pos()
            .all(|pos| self[pos] == self[self.grid.mirror_of(pos)])
    }

    pub fn on_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// 行ごとの配列に変換する. `rows()[row][col]`.
    pub fn rows(&self) -> [[bool; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let mut rows = [[false; GRID_SIZE as usize]; GRID_SIZE as usize];
        for pos in self.grid.all_pos() {
            rows[pos.y() as usize][pos.x() as usize] = self[pos];
        }
        rows
    }

    /// 塗るセルの座標を行優先で返す.
    pub fn iter_on(&self) -> impl Iterator<Item = Pos> + '_ {
        self.grid.all_pos().filter(move |&pos| self[pos])
    }
}

impl ops::Index<Pos> for Pattern {
    type Output = bool;

    fn index(&self, index: Pos) -> &Self::Output {
        debug_assert!(self.grid.is_pos_valid(index));
        &self.cells[self.grid.pos_as_index(index)]
    }
}

impl ops::IndexMut<Pos> for Pattern {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        debug_assert!(self.grid.is_pos_valid(index));
        &mut self.cells[self.grid.pos_as_index(index)]
    }
}
