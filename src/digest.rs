use {
    crate::error::{IdenticonError, Result},
    md5::{Digest as _, Md5},
    std::fmt,
};

/// MD5 ダイジェストの 16 進表記の桁数.
pub const DIGEST_HEX_LEN: usize = 32;

/// `Digest` は入力文字列から導いた小文字 16 進数の列を表す.
///
/// `derive` で作ったものは必ず 32 桁になるが, `parse` では任意の長さを受け付ける.
/// 長さの検査は色やパターンを取り出す側で行う.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// 既存の 16 進文字列をダイジェストとして読み込む. 大文字は小文字に揃える.
    pub fn parse(hex: &str) -> Result<Self> {
        if let Some((index, found)) = hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(IdenticonError::InvalidDigest { index, found });
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `index` 桁目の 16 進数字の値 (0..=15) を返す.
    pub fn nibble(&self, index: usize) -> Option<u8> {
        self.0
            .as_bytes()
            .get(index)
            .and_then(|&b| (b as char).to_digit(16))
            .map(|d| d as u8)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `text` の UTF-8 バイト列の MD5 を取り, 32 桁の小文字 16 進ダイジェストを返す.
///
/// 空文字列も受け付ける.
pub fn derive(text: &str) -> Digest {
    Digest(hex::encode(Md5::digest(text.as_bytes())))
}
