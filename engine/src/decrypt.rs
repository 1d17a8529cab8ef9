//! 解码流程实现
//!
//! 流程（严格顺序）：
//! 1. 根据输入扩展名选择固定密钥（此时尚未进行任何文件 I/O）
//! 2. 将输入文件完整读入内存
//! 3. 判断裸文件 / 容器，定位加密负载
//! 4. 原地逐块解密负载并去除填充
//! 5. 写出 `buffer[offset .. offset + len]`

use std::path::Path;

use log::{debug, info};

use crate::crypto::block::KeySchedule;
use crate::crypto::padding::{PaddingMode, PaddingStatus, strip_padding};
use crate::error::{CubeError, CubeResult};
use crate::format::archive::{self, PayloadSlice};
use crate::fs::io::{read_input, write_output};
use crate::keys::CubeFormat;

/// 解码选项
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub padding: PaddingMode,
}

/// 解密后明文在缓冲区中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub offset: usize,
    pub len: usize,
    pub padding: PaddingStatus,
}

impl Decoded {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// 一次文件解码的结果摘要
#[derive(Debug, Clone)]
pub struct DecodeReport {
    pub format: CubeFormat,
    pub container: bool,
    pub payload: PayloadSlice,
    pub output_len: usize,
    pub padding: PaddingStatus,
}

/// 原地解密 `slice` 范围内的负载并计算去除填充后的长度
pub fn decrypt_payload(
    buffer: &mut [u8],
    slice: PayloadSlice,
    key: &[u8],
    mode: PaddingMode,
) -> CubeResult<Decoded> {
    let end = slice.end().ok_or_else(|| truncated_entry(slice))?;
    let payload = buffer
        .get_mut(slice.offset..end)
        .ok_or_else(|| truncated_entry(slice))?;

    if payload.is_empty() {
        return Err(CubeError::EmptyPayload);
    }

    let schedule = KeySchedule::new(key)?;
    schedule.decrypt_blocks(payload);

    let (len, padding) = strip_padding(payload, mode)?;

    Ok(Decoded {
        offset: slice.offset,
        len,
        padding,
    })
}

fn truncated_entry(slice: PayloadSlice) -> CubeError {
    CubeError::TruncatedEntry {
        offset: slice.offset,
        size: slice.len,
    }
}

/// 解码 `input` 并写出到 `output`
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &DecodeOptions,
) -> CubeResult<DecodeReport> {
    let format = CubeFormat::from_path(input_path).ok_or_else(|| {
        CubeError::Usage(format!(
            "unsupported input file extension: {}",
            input_path.display()
        ))
    })?;

    debug!("using .{} key for {}", format.extension(), input_path.display());

    let mut buffer = read_input(input_path)?;

    let container = archive::is_container(&buffer);
    let payload = archive::locate(&buffer)?;

    let decoded = decrypt_payload(&mut buffer, payload, format.key(), options.padding)?;

    write_output(output_path, &buffer[decoded.range()])?;

    info!(
        "wrote {} bytes of G-code to {}",
        decoded.len,
        output_path.display()
    );

    Ok(DecodeReport {
        format,
        container,
        payload,
        output_len: decoded.len,
        padding: decoded.padding,
    })
}
