use std::path::Path;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

// 导入库模块
use placegraph::config::Config;
use placegraph::core::{GraphError, NodeId};
use placegraph::graph::{find_label, sample_graph, NodeColor, SampleGraph};
use placegraph::services::algorithm::{Bfs, Dfs, Dijkstra, QueueOrder, VisitRecorder};
use placegraph::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Traverse and measure the sample placed graph")]
struct Cli {
    /// Configuration file; defaults are used when it does not exist
    #[clap(short, long, global = true, default_value = "placegraph.toml")]
    config: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sample graph and its validation result
    Show,
    /// Breadth-first traversal from the node with the given label
    Bft {
        #[clap(short, long)]
        start: i32,
    },
    /// Depth-first traversal from the node with the given label
    Dft {
        #[clap(short, long)]
        start: i32,
    },
    /// Shortest distances from the node with the given label
    Dijkstra {
        #[clap(short, long)]
        source: i32,
        /// Order the queue by static edge weight instead of live distance
        #[clap(long)]
        static_order: bool,
    },
}

fn load_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        return Ok(Config::default());
    }
    Config::load(path).map_err(|e| anyhow!("无法加载配置文件 {}: {}", path, e))
}

fn lookup(graph: &SampleGraph, label: i32) -> Result<NodeId> {
    find_label(graph, label)
        .ok_or_else(|| GraphError::not_found(format!("没有标签为 {} 的节点", label)).into())
}

fn labels(graph: &SampleGraph, ids: &[NodeId]) -> String {
    ids.iter()
        .filter_map(|id| graph.node_data(*id))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// 把访问过的节点涂成红色，模拟图形界面中的逐个高亮
fn paint_visited(graph: &mut SampleGraph, visited: &[NodeId]) {
    for id in visited {
        if let Some(data) = graph.node_data_mut(*id) {
            data.set_color(NodeColor::Red);
        }
    }
}

fn print_colors(graph: &SampleGraph) {
    for node in graph.iter_nodes() {
        println!("  {} [{}]", node.data(), node.data().color());
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    let mut graph = sample_graph(config.graph.duplicate_edges)?;

    match command {
        Command::Show => {
            println!("{}", graph);
            println!("valid: {}", graph.validate());
        }
        Command::Bft { start } => {
            let start = lookup(&graph, start)?;
            let mut recorder = VisitRecorder::new();
            Bfs::traverse(&graph, start, &mut recorder)?;
            println!("BFT: {}", labels(&graph, recorder.pre_order()));
            paint_visited(&mut graph, recorder.pre_order());
            print_colors(&graph);
        }
        Command::Dft { start } => {
            let start = lookup(&graph, start)?;
            let mut recorder = VisitRecorder::new();
            Dfs::traverse(&graph, start, &mut recorder)?;
            println!("DFT pre-order:  {}", labels(&graph, recorder.pre_order()));
            println!("DFT post-order: {}", labels(&graph, recorder.post_order()));
            paint_visited(&mut graph, recorder.pre_order());
            print_colors(&graph);
        }
        Command::Dijkstra {
            source,
            static_order,
        } => {
            let source = lookup(&graph, source)?;
            let mut dijkstra = if static_order {
                Dijkstra::with_queue_order(QueueOrder::StaticWeight)
            } else {
                Dijkstra::from_config(&config.dijkstra)
            };
            let distances = dijkstra.execute(&graph, source)?;
            if let Some(data) = graph.node_data(source) {
                println!("From chosen node: {}", data);
            }
            println!();
            print!("{}", distances.format_report(&graph));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    logging::init(&config.log).map_err(|e| anyhow!("日志初始化失败: {}", e))?;

    let result = run(cli.command, &config);
    if let Err(e) = &result {
        log::error!("{}", e);
    }

    logging::shutdown();
    result
}
