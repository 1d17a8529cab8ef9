//! 固定密钥表
//!
//! 切片软件输出的各类文件都使用厂商内置的固定 Blowfish 密钥加密，
//! 密钥只由输入文件扩展名决定，不接受用户输入。

use std::path::Path;

/// `.cube` / `.cube3` / `.cubepro` 使用的密钥
pub const CUBEPRO_KEY: &[u8] = b"221BBakerMycroft";

/// `.cubex` 使用的密钥
pub const CUBEX_KEY: &[u8] = b"kWd$qG*25Xmgf-Sg";

/// 支持的输入文件类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFormat {
    Cube,
    Cube3,
    CubePro,
    CubeX,
}

impl CubeFormat {
    /// 扩展名（不含点）与文件类型的对应表，大小写敏感
    const TABLE: [(&'static str, CubeFormat); 4] = [
        ("cube", CubeFormat::Cube),
        ("cube3", CubeFormat::Cube3),
        ("cubepro", CubeFormat::CubePro),
        ("cubex", CubeFormat::CubeX),
    ];

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == ext)
            .map(|(_, format)| *format)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Cube3 => "cube3",
            Self::CubePro => "cubepro",
            Self::CubeX => "cubex",
        }
    }

    /// 该类型对应的原始密钥字节
    pub fn key(self) -> &'static [u8] {
        match self {
            Self::Cube | Self::Cube3 | Self::CubePro => CUBEPRO_KEY,
            Self::CubeX => CUBEX_KEY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_sensitive() {
        assert_eq!(CubeFormat::from_extension("cubepro"), Some(CubeFormat::CubePro));
        assert_eq!(CubeFormat::from_extension("CUBEPRO"), None);
        assert_eq!(CubeFormat::from_extension("bfb"), None);
    }

    #[test]
    fn cubex_uses_alternate_key() {
        assert_eq!(CubeFormat::CubeX.key(), CUBEX_KEY);
        for format in [CubeFormat::Cube, CubeFormat::Cube3, CubeFormat::CubePro] {
            assert_eq!(format.key(), CUBEPRO_KEY);
        }
    }

    #[test]
    fn from_path_reads_last_extension() {
        assert_eq!(
            CubeFormat::from_path(Path::new("dir.cube/model.cubex")),
            Some(CubeFormat::CubeX)
        );
        assert_eq!(CubeFormat::from_path(Path::new("model")), None);
    }
}
