//! PKCS#5 风格填充的去除
//!
//! 解密后最后一个字节是填充长度 `p`，合法范围是 1..=8。
//! 密钥错误或负载位置错误时，这个字节通常会落在范围之外，
//! 但也有约 8/256 的概率碰巧合法，所以它只是一个概率性的信号。

use log::warn;

use crate::crypto::block::BLOCK_SIZE;
use crate::error::{CubeError, CubeResult};

/// 填充字节不合法时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// 直接报错
    #[default]
    Strict,
    /// 只打印警告，仍按填充字节截断输出（兼容旧工具的输出）
    Lenient,
}

/// 填充检查结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingStatus {
    Valid(u8),
    Invalid(u8),
}

impl PaddingStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// 根据已解密数据的最后一个字节计算去除填充后的长度。
///
/// 宽松模式下 `p` 超过数据长度时输出长度为 0。
pub fn strip_padding(data: &[u8], mode: PaddingMode) -> CubeResult<(usize, PaddingStatus)> {
    let &pad = data.last().ok_or(CubeError::EmptyPayload)?;
    let pad_len = pad as usize;

    if (1..=BLOCK_SIZE).contains(&pad_len) && pad_len <= data.len() {
        return Ok((data.len() - pad_len, PaddingStatus::Valid(pad)));
    }

    match mode {
        PaddingMode::Strict => Err(CubeError::InvalidPadding { pad }),
        PaddingMode::Lenient => {
            warn!("decoding error: invalid padding byte {pad}, output is likely garbage");
            Ok((data.len().saturating_sub(pad_len), PaddingStatus::Invalid(pad)))
        }
    }
}
