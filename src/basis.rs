use {
    crate::{
        digest::Digest,
        error::{IdenticonError, Result},
    },
    ::image::Rgb,
};

/// 色を表す 16 進数の桁数.
pub const COLOR_HEX_LEN: usize = 6;

/// 塗られていないセルに使う背景色.
pub const BACKGROUND: Color = Color {
    r: 214,
    g: 214,
    b: 214,
};

/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `FF1919` や `#5eb63b` のような 6 桁の 16 進数を RGB に変換する.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || IdenticonError::InvalidColorFormat {
            found: hex.to_owned(),
        };

        if digits.len() != COLOR_HEX_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel =
            |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// ダイジェストの先頭 6 桁を 2 桁ずつ R, G, B として読む.
    pub fn from_digest(digest: &Digest) -> Result<Self> {
        match digest.as_str().get(..COLOR_HEX_LEN) {
            Some(head) => Self::from_hex(head),
            None => Err(IdenticonError::InvalidColorFormat {
                found: digest.as_str().to_owned(),
            }),
        }
    }

    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(Color { r, g, b }: Color) -> Self {
        Rgb([r, g, b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Self { r, g, b }
    }
}
