//! # 数据模型模块
//!
//! 定义统一的测量记录和分析结果数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`compton/` 和 `commands/` 使用
//! - 子模块: measurement, analysis

pub mod analysis;
pub mod measurement;

pub use analysis::ComptonAnalysis;
pub use measurement::{LabeledMeasurement, Measurement};
