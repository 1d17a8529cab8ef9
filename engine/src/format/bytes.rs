//! 带边界检查的定长字段读取

/// 读取 `offset` 处的 4 字节小端整数，越界时返回 `None`
pub fn read_u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let bytes: [u8; 4] = buf.get(offset..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}

/// 读取以 NUL 结尾、最长 `max_len` 字节的字段。
///
/// 遇到第一个 NUL、读满 `max_len` 或到达缓冲区末尾时停止，
/// 返回的切片不含结尾的 NUL。
pub fn read_fixed_str(buf: &[u8], offset: usize, max_len: usize) -> &[u8] {
    let Some(rest) = buf.get(offset..) else {
        return &[];
    };
    let field = &rest[..rest.len().min(max_len)];
    match field.iter().position(|&b| b == 0) {
        Some(nul) => &field[..nul],
        None => field,
    }
}
