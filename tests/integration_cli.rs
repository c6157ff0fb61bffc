//! 命令行集成测试
//!
//! 测试范围:
//! - show / bft / dijkstra 子命令的输出
//! - 全局 --config 参数（子命令前后均可）
//! - 错误标签和错误配置以非零状态退出

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// 在临时目录中运行命令行程序，避免读到工作目录里的配置文件
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_placegraph"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("无法启动 placegraph")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ==================== 子命令输出 ====================

#[test]
fn test_show_prints_graph_dump() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let output = run_in(dir.path(), &["show"]);

    assert!(output.status.success(), "show 应该成功: {:?}", output);
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Graph\n  Node: 1@(50,50)\n    To: 2@(150,50), 1"));
    assert!(stdout.contains("valid: true"));
}

#[test]
fn test_dijkstra_prints_header_and_report() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let output = run_in(dir.path(), &["dijkstra", "--source", "1"]);

    assert!(output.status.success(), "dijkstra 应该成功: {:?}", output);
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "From chosen node: 1@(50,50)");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "To node 1@(50,50), distance is: 0");
    assert_eq!(lines[7], "To node 6@(250,100), distance is: 212");
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_bft_prints_visit_order() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let output = run_in(dir.path(), &["bft", "--start", "3"]);

    assert!(output.status.success(), "bft 应该成功: {:?}", output);
    let stdout = stdout_of(&output);
    assert!(stdout.contains(
        "BFT: 3@(150,150) -> 6@(250,100) -> 7@(250,150) -> 1@(50,50) -> 2@(150,50) -> 4@(50,150) -> 5@(250,50)"
    ));
}

// ==================== 全局配置参数 ====================

#[test]
fn test_config_flag_before_and_after_subcommand() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "[graph]\nduplicate_edges = \"reject\"\n\n[dijkstra]\nqueue_order = \"static_weight\"\n",
    )
    .expect("写入配置失败");
    let config = config.to_string_lossy().into_owned();

    let before = run_in(dir.path(), &["--config", &config, "dijkstra", "--source", "2"]);
    assert!(before.status.success(), "前置 --config 应该被接受: {:?}", before);
    assert!(stdout_of(&before).starts_with("From chosen node: 2@(150,50)"));

    let after = run_in(dir.path(), &["show", "-c", &config]);
    assert!(after.status.success(), "后置 -c 应该被接受: {:?}", after);

    let missing = run_in(dir.path(), &["--config", "nope.toml", "show"]);
    assert!(missing.status.success(), "配置文件不存在时使用默认值: {:?}", missing);
}

// ==================== 错误 ====================

#[test]
fn test_unknown_label_exits_non_zero() {
    let dir = TempDir::new().expect("创建临时目录失败");
    for args in [
        &["bft", "--start", "42"][..],
        &["dft", "--start", "42"][..],
        &["dijkstra", "--source", "42"][..],
    ] {
        let output = run_in(dir.path(), args);
        assert!(!output.status.success(), "{:?} 应该失败", args);
        assert!(stdout_of(&output).is_empty());
    }
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[dijkstra]\nqueue_order = \"sideways\"\n").expect("写入配置失败");
    let config = config.to_string_lossy().into_owned();

    let output = run_in(dir.path(), &["--config", &config, "show"]);
    assert!(!output.status.success());
}
