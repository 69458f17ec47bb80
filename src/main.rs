//! # Comptonlab - X 射线康普顿散射实验分析工具箱
//!
//! 将康普顿散射实验的手工计算脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `compute` - 从单次测量（命令行参数或 CSV 文件）计算波长偏移
//! - `batch`   - 批量处理包含多个测量 CSV 文件的目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (测量数据解析器)
//!   │     ├── compton/   (波长偏移计算核心)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod compton;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
