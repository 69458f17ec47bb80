//! # 分析结果数据模型
//!
//! 存储由一次测量导出的三个波长偏移量。
//!
//! ## 依赖关系
//! - 被 `compton/calculator.rs` 构造
//! - 被 `commands/` 和 `compton/export.rs` 使用

use crate::models::Measurement;

/// 米转皮米的换算因子
const METERS_TO_PICOMETERS: f64 = 1e12;

/// 一次测量的康普顿偏移分析结果
///
/// 由 `ComptonCalculator::analyze` 一次性计算得到，此后不再变更。
#[derive(Debug, Clone)]
pub struct ComptonAnalysis {
    /// 数据集标签
    pub label: String,

    /// 输入测量量
    pub measurement: Measurement,

    /// 理论波长偏移 Δλ (m)
    pub theoretical_shift: f64,

    /// 实验波长偏移 Δλ (m)，符号表示相对 λ₀ 的偏移方向
    pub experimental_shift: f64,

    /// 实验偏移的 1σ 传播误差 (m)
    pub experimental_error: f64,
}

impl ComptonAnalysis {
    /// 理论偏移（pm）
    pub fn theoretical_shift_pm(&self) -> f64 {
        self.theoretical_shift * METERS_TO_PICOMETERS
    }

    /// 实验偏移（pm）
    pub fn experimental_shift_pm(&self) -> f64 {
        self.experimental_shift * METERS_TO_PICOMETERS
    }

    /// 实验误差（pm）
    pub fn experimental_error_pm(&self) -> f64 {
        self.experimental_error * METERS_TO_PICOMETERS
    }

    /// 理论值与实验值之差相对于 1σ 误差的倍数
    ///
    /// 误差为零时无定义，返回 `None`。
    pub fn deviation_sigma(&self) -> Option<f64> {
        if self.experimental_error == 0.0 {
            return None;
        }
        Some((self.experimental_shift - self.theoretical_shift).abs() / self.experimental_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis(theory: f64, exp: f64, err: f64) -> ComptonAnalysis {
        ComptonAnalysis {
            label: "test".to_string(),
            measurement: Measurement {
                theta: 1.0,
                accelerating_voltage: None,
                beam_current: None,
                delta_t: 300.0,
                r0: 10.0,
                r1: 2.0,
                r2: 1.5,
                r_background: 0.3,
            },
            theoretical_shift: theory,
            experimental_shift: exp,
            experimental_error: err,
        }
    }

    #[test]
    fn test_picometer_conversion() {
        let a = sample_analysis(4.384e-12, 6.059e-12, 0.705e-12);
        assert!((a.theoretical_shift_pm() - 4.384).abs() < 1e-9);
        assert!((a.experimental_shift_pm() - 6.059).abs() < 1e-9);
    }

    #[test]
    fn test_deviation_sigma() {
        let a = sample_analysis(4.0e-12, 6.0e-12, 0.5e-12);
        assert!((a.deviation_sigma().unwrap() - 4.0).abs() < 1e-9);

        let zero_err = sample_analysis(4.0e-12, 6.0e-12, 0.0);
        assert!(zero_err.deviation_sigma().is_none());
    }
}
