//! # 康普顿偏移计算模块
//!
//! 提供康普顿散射波长偏移的理论值、实验值与传播误差计算。
//!
//! ## 子模块
//! - `constants`: 物理常数
//! - `calculator`: 偏移与误差计算
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 的 Measurement, ComptonAnalysis

pub mod calculator;
pub mod constants;
pub mod export;

pub use calculator::{Calibration, ComptonCalculator};
