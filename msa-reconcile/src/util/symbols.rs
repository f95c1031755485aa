use serde::{Deserialize, Serialize};

/// 比对器在对齐区域内输出的间隙字符
pub const DEFAULT_GAP: u8 = b'-';
/// 填充字符，同时也是 MSF 的间隙字符
pub const DEFAULT_FILLER: u8 = b'.';

/// 间隙 / 填充字符约定
///
/// `gap` 是比对器在对齐区域内使用的间隙符号，`filler` 是修复与填充阶段
/// 使用的占位符。默认两者都落到 `.`（MSF 的间隙字符）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub gap: u8,
    pub filler: u8,
}

impl Default for Symbols {
    fn default() -> Self {
        Self { gap: DEFAULT_GAP, filler: DEFAULT_FILLER }
    }
}

impl Symbols {
    pub fn new(gap: u8, filler: u8) -> Self {
        Self { gap, filler }
    }

    /// 把 `body` 中的间隙字符替换为填充字符
    pub fn translate_gaps(&self, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(body.len());
        for &b in body {
            out.push(if b == self.gap { self.filler } else { b });
        }
        out
    }

    #[inline]
    pub fn is_filler(&self, b: u8) -> bool {
        b == self.filler
    }
}

/// 从命令行参数中解析单个可打印 ASCII 字符
pub fn parse_symbol(s: &str) -> Result<u8, String> {
    let bytes = s.as_bytes();
    match bytes {
        [b] if b.is_ascii_graphic() => Ok(*b),
        _ => Err(format!("expected a single printable ASCII character, got '{}'", s)),
    }
}
