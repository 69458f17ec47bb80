//! # batch 子命令 CLI 定义
//!
//! 批量处理测量 CSV 文件目录：每个输入文件产生一个结果 CSV。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input directory containing measurement CSV files
    pub input: PathBuf,

    /// Output directory for result CSV files
    #[arg(short, long, default_value = "compton_results")]
    pub output: PathBuf,

    /// Glob pattern for input files (e.g., "*.csv,session_*.dat")
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    // ─────────────────────────────────────────────────────────────
    // Pohl 透射法标定参数
    // ─────────────────────────────────────────────────────────────
    /// Reference wavelength lambda0 in pm
    #[arg(long, default_value_t = 100.0)]
    pub lambda0: f64,

    /// Absorption calibration constant a
    #[arg(long, default_value_t = 7.6)]
    pub absorption_a: f64,

    /// Absorption calibration exponent n
    #[arg(long, default_value_t = 2.75)]
    pub absorption_n: f64,
}
