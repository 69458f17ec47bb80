//! # compute 子命令 CLI 定义
//!
//! 单次测量分析入口：测量量来自命令行参数，或来自 `--input` 指定的
//! 测量 CSV 文件（每行一次测量）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compute.rs`

use clap::Args;
use std::path::PathBuf;

/// compute 子命令参数
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Input measurement CSV file (columns: theta_deg, delta_t_s, r0, r1, r2, r_background)
    #[arg(short, long, conflicts_with = "theta")]
    pub input: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────
    // 直接给出测量量（与 --input 互斥）
    // ─────────────────────────────────────────────────────────────
    /// Scattering angle theta in degrees
    #[arg(long)]
    pub theta: Option<f64>,

    /// Accelerating voltage in kV (record-keeping only)
    #[arg(long)]
    pub voltage: Option<f64>,

    /// Beam current in mA (record-keeping only)
    #[arg(long)]
    pub current: Option<f64>,

    /// Exposure time interval in seconds
    #[arg(long)]
    pub delta_t: Option<f64>,

    /// Count rate without filter, in 1/s
    #[arg(long)]
    pub r0: Option<f64>,

    /// Count rate with the filter in front of the target, in 1/s
    #[arg(long)]
    pub r1: Option<f64>,

    /// Count rate with the filter behind the target, in 1/s
    #[arg(long)]
    pub r2: Option<f64>,

    /// Background count rate, in 1/s
    #[arg(long)]
    pub r_background: Option<f64>,

    /// Label for a measurement given on the command line
    #[arg(long, default_value = "measurement")]
    pub label: String,

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

    /// Optional CSV file to export the results to
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
