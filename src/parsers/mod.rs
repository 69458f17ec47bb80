//! # 测量数据解析模块
//!
//! 读取实验记录文件并构造统一的 Measurement 模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: measurements

pub mod measurements;

pub use measurements::parse_measurement_csv;
