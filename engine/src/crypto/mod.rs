//! 分组密码与填充处理

pub mod block;
pub mod padding;
