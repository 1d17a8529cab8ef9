//! 整文件读入与输出写出
//!
//! 输入文件会被完整读入内存后再原地解密。
//! 写出失败时不清理已写出的部分文件。

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{CubeError, CubeResult};

/// 未指定输出路径时使用的扩展名
pub const OUTPUT_EXT: &str = "bfb";

/// 将输入文件完整读入内存
pub fn read_input(path: &Path) -> CubeResult<Vec<u8>> {
    let file = File::open(path).map_err(CubeError::OpenInput)?;
    let size = file.metadata().map_err(CubeError::InputSize)?.len();

    let capacity = usize::try_from(size).map_err(|_| CubeError::Alloc { size })?;
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| CubeError::Alloc { size })?;

    // 只读取 metadata 报告的长度
    file.take(size)
        .read_to_end(&mut data)
        .map_err(CubeError::ReadInput)?;

    if (data.len() as u64) != size {
        return Err(CubeError::ShortRead {
            expected: size,
            actual: data.len() as u64,
        });
    }

    Ok(data)
}

/// 创建（或截断）输出文件并写入全部数据
pub fn write_output(path: &Path, data: &[u8]) -> CubeResult<()> {
    let file = File::create(path).map_err(CubeError::OpenOutput)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(data).map_err(CubeError::WriteOutput)?;
    writer.flush().map_err(CubeError::WriteOutput)?;

    Ok(())
}

/// 把输入路径的扩展名替换为 `.bfb`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXT)
}
