//! 容器文件定位
//!
//! 新版 `.cubepro` 文件是一个简单的无压缩归档，里面除了加密的 G-code
//! 还打包了 XML 构建信息、预览图和校验文件。布局（全部小端）：
//!
//! ```text
//! 0   u32        文件数量（不参与解析）
//! 4   u32        归档总大小，等于文件长度时视为容器
//! 8   u16        每个条目头的大小（不参与解析）
//! 10  条目链：
//!       u32        storedSize
//!       [u8; 260]  文件名，NUL 结尾 / 填充
//!       storedSize 字节的文件内容
//! ```
//!
//! 条目之间没有对齐填充。头部字段会和裸加密文件的内容偶然重合，
//! 这种误判无法避免。

use log::{debug, info};

use crate::error::{CubeError, CubeResult};
use crate::format::bytes::{read_fixed_str, read_u32_le};

/// 第一个条目头的偏移
pub const ENTRY_TABLE_OFFSET: usize = 10;

/// 条目头中文件名字段的固定宽度
pub const ENTRY_NAME_LEN: usize = 260;

/// 加密 G-code 条目的文件名后缀
pub const PAYLOAD_SUFFIXES: [&[u8]; 2] = [b".cubepro", b".cube3"];

/// 加密负载在输入缓冲区中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadSlice {
    pub offset: usize,
    pub len: usize,
}

impl PayloadSlice {
    /// 负载结束位置，溢出时返回 `None`
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.len)
    }
}

/// 偏移 4 处的 u32 等于缓冲区总长度时视为容器
pub fn is_container(buf: &[u8]) -> bool {
    read_u32_le(buf, 4).is_some_and(|size| size as usize == buf.len())
}

/// 定位加密负载。
///
/// 裸文件返回整个缓冲区；容器则扫描条目链，返回第一个文件名以
/// `.cubepro` 或 `.cube3` 结尾的条目内容。
pub fn locate(buf: &[u8]) -> CubeResult<PayloadSlice> {
    if !is_container(buf) {
        debug!("treating {} bytes as bare encrypted payload", buf.len());
        return Ok(PayloadSlice {
            offset: 0,
            len: buf.len(),
        });
    }

    debug!("archive container detected ({} bytes)", buf.len());
    scan_entries(buf)
}

fn scan_entries(buf: &[u8]) -> CubeResult<PayloadSlice> {
    let total = buf.len();
    let mut cursor = ENTRY_TABLE_OFFSET;

    // 游标越过文件末尾即视为未找到
    while cursor <= total {
        let stored_size = read_u32_le(buf, cursor).ok_or(CubeError::EntryNotFound)? as usize;
        cursor += 4;

        let name = read_fixed_str(buf, cursor, ENTRY_NAME_LEN);
        let content_offset = cursor + ENTRY_NAME_LEN;

        cursor = content_offset
            .checked_add(stored_size)
            .ok_or(CubeError::EntryNotFound)?;

        if is_payload_name(name) {
            if cursor > total {
                return Err(CubeError::TruncatedEntry {
                    offset: content_offset,
                    size: stored_size,
                });
            }

            info!(
                "found payload entry {:?} at offset {content_offset} ({stored_size} bytes)",
                String::from_utf8_lossy(name)
            );
            return Ok(PayloadSlice {
                offset: content_offset,
                len: stored_size,
            });
        }

        debug!(
            "skipping archive entry {:?} ({stored_size} bytes)",
            String::from_utf8_lossy(name)
        );
    }

    Err(CubeError::EntryNotFound)
}

fn is_payload_name(name: &[u8]) -> bool {
    PAYLOAD_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
