use dinic_flow::loader::load_network;
use dinic_flow::Dinic;
use log::info;
use std::process::ExitCode;

const USAGE: &str = "usage: dinic <graph-file> [source sink]";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, terminals) = match args.as_slice() {
        [path] => (path, None),
        [path, source, sink] => match (source.parse::<usize>(), sink.parse::<usize>()) {
            (Ok(source), Ok(sink)) if source >= 1 && sink >= 1 => (path, Some((source - 1, sink - 1))),
            _ => {
                eprintln!("source and sink must be node numbers starting at 1\n{USAGE}");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut network = match load_network::<i64>(path) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("loaded {} nodes and {} edges from {path}", network.num_nodes(), network.num_edges());

    let (source, sink) = terminals.unwrap_or((0, network.num_nodes().saturating_sub(1)));
    let mut dinic = Dinic::default();
    match dinic.solve(source, sink, &mut network) {
        Ok(flow) => {
            println!("maximum flow: {flow}");
            info!("{} phases", dinic.num_phases());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
