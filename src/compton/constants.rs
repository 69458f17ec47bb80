//! # 物理常数
//!
//! CODATA 2018 推荐值，SI 单位。
//!
//! ## 依赖关系
//! - 被 `compton/calculator.rs` 使用
//! - 纯静态数据，无外部依赖

/// 普朗克常数 h (J·s)，SI 定义值
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

/// 电子静止质量 mₑ (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// 真空光速 c (m/s)，SI 定义值
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;

/// 电子康普顿波长 λ_C = h / (mₑ·c) ≈ 2.426×10⁻¹² m
pub const COMPTON_WAVELENGTH: f64 = PLANCK_CONSTANT / (ELECTRON_MASS * SPEED_OF_LIGHT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compton_wavelength() {
        // CODATA: λ_C = 2.42631023867e-12 m
        assert!((COMPTON_WAVELENGTH - 2.42631023867e-12).abs() / 2.42631023867e-12 < 1e-9);
    }
}
