//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `compute`: 单次测量分析（命令行参数或 CSV 文件）
//! - `batch`: 批量处理测量 CSV 文件目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: compute, batch

pub mod batch;
pub mod compute;

use clap::{Parser, Subcommand};

/// Comptonlab - X 射线康普顿散射实验分析工具箱
#[derive(Parser)]
#[command(name = "comptonlab")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "An X-ray Compton scattering laboratory analysis toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute wavelength shifts from a single measurement or a CSV file
    Compute(compute::ComputeArgs),

    /// Process a directory of measurement CSV files in parallel
    Batch(batch::BatchArgs),
}
