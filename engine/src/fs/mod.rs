//! 输入输出文件处理

pub mod io;
