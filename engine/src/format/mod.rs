//! 输入文件的二进制布局解析

pub mod archive;
pub mod bytes;
