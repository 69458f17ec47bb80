//! # 测量记录数据模型
//!
//! 存储一次康普顿散射实验的原始测量量。
//!
//! ## 依赖关系
//! - 被 `parsers/measurements.rs` 构造
//! - 被 `compton/calculator.rs` 消费

use serde::{Deserialize, Serialize};

/// 一次康普顿散射测量
///
/// 所有内部量使用 SI 单位：角度为弧度，时间为秒，计数率为 s⁻¹。
/// 加速电压与束流不参与任何公式，仅作为实验记录保留。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// 散射角 θ（弧度）
    pub theta: f64,

    /// 加速电压 (kV) - 实验记录，不参与计算
    pub accelerating_voltage: Option<f64>,

    /// 束流 (mA) - 实验记录，不参与计算
    pub beam_current: Option<f64>,

    /// 曝光时间间隔 Δt (s)，必须 > 0
    pub delta_t: f64,

    /// 无滤波片计数率 R₀ (s⁻¹)
    pub r0: f64,

    /// 滤波片置于靶前的计数率 R₁ (s⁻¹)
    pub r1: f64,

    /// 滤波片置于靶后的计数率 R₂ (s⁻¹)
    pub r2: f64,

    /// 本底计数率 (s⁻¹)
    pub r_background: f64,
}

impl Measurement {
    /// 散射角（度），用于显示
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }
}

/// 带标签的测量（标签来自 CSV 的 label 列或文件名）
#[derive(Debug, Clone)]
pub struct LabeledMeasurement {
    /// 数据集标签
    pub label: String,
    /// 测量量
    pub measurement: Measurement,
}
