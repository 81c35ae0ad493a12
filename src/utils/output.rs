//! # 终端状态行
//!
//! 缩放流程各阶段的状态输出，只在进度条开始前或结束后调用：
//! - 开始前：标题栏 (目标分辨率)、输入 -> 输出目录映射、匹配数量、无匹配警告
//! - 结束后：失败数量行 (`error_line`，供 `batch/errors.rs` 拼接)、完成统计
//! - 致命错误：`main.rs` 打印完整错误链
//!
//! 信息类写 stdout，错误写 stderr。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/resize.rs`、`batch/errors.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 带 `[ERR]` 前缀的一行文本
pub fn error_line(msg: &str) -> String {
    format!("{} {}", "[ERR]".red().bold(), msg)
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{}", error_line(msg));
}

/// 打印警告消息（如无匹配文件）
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印批处理完成统计
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印输入目录到输出目录的映射
pub fn print_mapping(input: &str, output: &str) {
    println!(
        "{} {} {} {}",
        "[*]".blue().bold(),
        input.dimmed(),
        "->".cyan(),
        output
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_keeps_message() {
        let line = error_line("2 image operations failed");
        assert!(line.contains("[ERR]"));
        assert!(line.ends_with("2 image operations failed"));
    }
}
