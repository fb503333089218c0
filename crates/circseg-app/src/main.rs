//! circseg 命令行入口
//!
//! 读取指针事件脚本，回放给交互引擎，输出三行状态文本。

mod config;
mod error;
mod script;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use circseg_ui::ShapeInputEngine;
use script::Script;

#[derive(Parser, Debug)]
#[command(
    name = "circseg",
    about = "Replay pointer events through the circle/segment intersection engine"
)]
struct Cli {
    /// 指针事件脚本（JSON），省略时回放内置演示
    script: Option<PathBuf>,

    /// 引擎配置（JSON）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 以 JSON 输出最后一帧的绘制快照
    #[arg(long)]
    dump_frame: bool,

    /// 提高日志级别（-v DEBUG，-vv TRACE）
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志，写到 stderr，stdout 只留结果
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    info!("Starting circseg...");

    let config = config::load(cli.config.as_deref())?;
    let mut engine = ShapeInputEngine::new(config)?;

    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => {
            info!("No script given, replaying built-in demo");
            Script::demo()
        }
    };

    let summary = script.replay(&mut engine)?;
    info!(
        applied = summary.applied,
        ignored = summary.ignored,
        redraws = summary.redraws,
        resets = summary.resets,
        "Replay finished"
    );
    if !engine.is_done() {
        warn!(phase = ?engine.phase_kind(), "Script ended before the segment was finalized");
    }

    for line in engine.status().lines() {
        if !line.is_empty() {
            println!("{line}");
        }
    }

    if cli.dump_frame {
        println!("{}", serde_json::to_string_pretty(&engine.frame())?);
    }

    Ok(())
}
