use crate::domain::graph::{Graph, GraphKind};
use crate::infrastructure::edge_list::{read_graph_file, write_graph_file, LoadedGraph};
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::snapshot_json::GraphSnapshot;
use crate::usecase::event::AppEvent;
use crate::usecase::query::{ingest, run_query, PathAlgorithm, Query};
use crate::usecase::stats::GraphStats;
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::New { kind, output } => {
            write_graph_file(&output, &Graph::new(kind))
                .await
                .with_context(|| format!("creating empty graph: {output}"))?;
            eprintln!("created empty {kind} graph: {output}");
            Ok(())
        }

        Cli::Show { input } => {
            let graph = load(&input, &None).await?;
            eprint!("{graph}");
            print_summary(&graph);
            Ok(())
        }

        Cli::Snapshot { input, output } => {
            let graph = load(&input, &None).await?;
            let json = GraphSnapshot::capture(&graph)
                .context("capturing graph snapshot")?
                .to_json_pretty()?;
            match output {
                Some(path) => tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("writing snapshot JSON: {path}"))?,
                None => println!("{json}"),
            }
            Ok(())
        }

        Cli::Validate { input } => {
            let graph = load(&input, &None).await?;
            validate_graph(&graph).with_context(|| format!("validating graph: {input}"))?;
            eprintln!("ok: invariants validated");
            Ok(())
        }

        Cli::Query {
            input,
            output,
            emit_events,
            query,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };
            let sink = Some(tx);

            let mutates = query.mutates();
            let mut graph = load(&input, &sink).await?;
            let answered = run_query(&mut graph, query, sink.clone()).await;

            // Close the channel so the printer drains and exits.
            drop(sink);
            if let Some(handle) = printer {
                handle.await.ok();
            }

            let outcome = answered?;
            if mutates {
                if let Some(path) = output.as_deref() {
                    write_graph_file(path, &graph)
                        .await
                        .with_context(|| format!("writing output graph: {path}"))?;
                }
            }

            eprintln!("{outcome}");
            print_summary(&graph);
            Ok(())
        }
    }
}

async fn load(input: &str, sink: &Option<mpsc::Sender<AppEvent>>) -> Result<Graph> {
    let loaded = read_graph_file(input)
        .await
        .with_context(|| format!("reading input graph: {input}"))?;
    report_load_warnings(&loaded);
    Ok(ingest(loaded, sink).await)
}

fn report_load_warnings(loaded: &LoadedGraph) {
    for e in loaded.rejected.iter() {
        eprintln!("warning: {e}");
    }
    if let Some(stop) = loaded.stopped_at.as_ref() {
        eprintln!(
            "warning: parsing stopped at line {}: {}",
            stop.line, stop.reason
        );
    }
}

fn print_summary(graph: &Graph) {
    let stats = GraphStats::of(graph);
    eprintln!(
        "summary: kind={} vertices={} edges={} components={}",
        graph.kind(),
        stats.vertices,
        stats.edges,
        stats.components
    );
}

#[derive(Debug)]
enum Cli {
    New {
        kind: GraphKind,
        output: String,
    },
    Show {
        input: String,
    },
    Snapshot {
        input: String,
        output: Option<String>,
    },
    Validate {
        input: String,
    },
    Query {
        input: String,
        output: Option<String>,
        emit_events: bool,
        query: Query,
    },
}

#[derive(Debug, Default)]
struct Flags {
    input: Option<String>,
    output: Option<String>,
    emit_events: bool,
    kind: Option<String>,
    name: Option<String>,
    from: Option<String>,
    to: Option<String>,
    weight: Option<String>,
    bound: Option<String>,
    k: Option<String>,
    algorithm: Option<String>,
}

impl Flags {
    fn parse(args: &[String]) -> Result<Self> {
        let mut flags = Flags::default();

        let mut i = 3;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--in" | "--input" => &mut flags.input,
                "--out" | "--output" => &mut flags.output,
                "--kind" => &mut flags.kind,
                "--name" => &mut flags.name,
                "--from" => &mut flags.from,
                "--to" => &mut flags.to,
                "--weight" => &mut flags.weight,
                "--bound" => &mut flags.bound,
                "--k" => &mut flags.k,
                "--algorithm" => &mut flags.algorithm,
                "--emit-events" => {
                    flags.emit_events = true;
                    i += 1;
                    continue;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            };
            i += 1;
            *slot = args.get(i).cloned();
            i += 1;
        }

        Ok(flags)
    }

    fn input(&self) -> Result<String> {
        required(&self.input, "--in/--input")
    }

    fn reject_output(&self, command: &str) -> Result<()> {
        if self.output.is_some() {
            return Err(anyhow!(format!(
                "{command} does not write a graph; --out/--output is not accepted\n\n{}",
                usage()
            )));
        }
        Ok(())
    }

    fn from_to(&self) -> Result<(String, String)> {
        Ok((required(&self.from, "--from")?, required(&self.to, "--to")?))
    }
}

fn required(value: &Option<String>, flag: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| anyhow!(format!("missing {flag}\n\n{}", usage())))
}

fn number<T: FromStr>(value: &Option<String>, flag: &str) -> Result<T> {
    let raw = required(value, flag)?;
    raw.parse::<T>()
        .map_err(|_| anyhow!(format!("invalid {flag}: {raw}\n\n{}", usage())))
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph <command> --in/--input <graph.txt> [options] [--out/--output <graph.txt>] [--emit-events]
        // <bin> graph new --kind directed|undirected --out/--output <graph.txt>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        let command = args[2].as_str();
        if matches!(command, "-h" | "--help") {
            return Err(anyhow!(usage()));
        }
        let flags = Flags::parse(args)?;

        match command {
            "new" => {
                let kind = match required(&flags.kind, "--kind")?.as_str() {
                    "directed" => GraphKind::Directed,
                    "undirected" => GraphKind::Undirected,
                    other => {
                        return Err(anyhow!(format!("invalid --kind: {other}\n\n{}", usage())))
                    }
                };
                let output = required(&flags.output, "--out/--output")?;
                Ok(Cli::New { kind, output })
            }
            "show" => {
                flags.reject_output(command)?;
                Ok(Cli::Show {
                    input: flags.input()?,
                })
            }
            "snapshot" => Ok(Cli::Snapshot {
                input: flags.input()?,
                output: flags.output.clone(),
            }),
            "validate" => {
                flags.reject_output(command)?;
                Ok(Cli::Validate {
                    input: flags.input()?,
                })
            }
            other => {
                let query = Self::parse_query(other, &flags)?;
                if query.mutates() && flags.output.is_none() {
                    return Err(anyhow!(format!(
                        "{other} changes the graph and needs --out/--output\n\n{}",
                        usage()
                    )));
                }
                if !query.mutates() {
                    flags.reject_output(other)?;
                }
                Ok(Cli::Query {
                    input: flags.input()?,
                    output: flags.output.clone(),
                    emit_events: flags.emit_events,
                    query,
                })
            }
        }
    }

    fn parse_query(command: &str, flags: &Flags) -> Result<Query> {
        let query = match command {
            "add-vertex" => Query::AddVertex {
                name: required(&flags.name, "--name")?,
            },
            "remove-vertex" => Query::RemoveVertex {
                name: required(&flags.name, "--name")?,
            },
            "add-edge" => {
                let (from, to) = flags.from_to()?;
                Query::AddEdge {
                    from,
                    to,
                    weight: number(&flags.weight, "--weight")?,
                }
            }
            "remove-edge" => {
                let (from, to) = flags.from_to()?;
                Query::RemoveEdge { from, to }
            }
            "reverse" => Query::Reverse,
            "has-path" => {
                let (from, to) = flags.from_to()?;
                Query::HasPath { from, to }
            }
            "path" => {
                let (from, to) = flags.from_to()?;
                let algorithm = match flags.algorithm.as_deref() {
                    None => PathAlgorithm::default(),
                    Some(name) => PathAlgorithm::parse(name).ok_or_else(|| {
                        anyhow!(format!("invalid --algorithm: {name}\n\n{}", usage()))
                    })?,
                };
                Query::ShortestPath {
                    from,
                    to,
                    algorithm,
                }
            }
            "path-within" => {
                let (from, to) = flags.from_to()?;
                Query::PathWithin {
                    from,
                    to,
                    bound: number(&flags.bound, "--bound")?,
                }
            }
            "below" => Query::VerticesBelow {
                bound: number(&flags.bound, "--bound")?,
            },
            "mst" => Query::SpanningTree,
            "max-flow" => {
                let (from, to) = flags.from_to()?;
                Query::MaxFlow { from, to }
            }
            "components" => Query::Components,
            "cyclomatic" => Query::Cyclomatic,
            "critical-edges" => {
                let (from, to) = flags.from_to()?;
                Query::CriticalEdges { from, to }
            }
            "common-target" => {
                let (from, to) = flags.from_to()?;
                Query::CommonTarget { from, to }
            }
            "disconnect" => {
                let (from, to) = flags.from_to()?;
                Query::Disconnect {
                    from,
                    to,
                    k: number(&flags.k, "--k")?,
                }
            }
            "out-degree" => Query::OutDegree {
                name: required(&flags.name, "--name")?,
            },
            other => return Err(anyhow!(format!("unknown command: {other}\n\n{}", usage()))),
        };
        Ok(query)
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph new --kind directed|undirected --out/--output <graph.txt>\n  graph show|snapshot|validate --in/--input <graph.txt> [--out/--output <snapshot.json>]\n  graph <query> --in/--input <graph.txt> [options] [--out/--output <graph.txt>] [--emit-events]\n\nMutations (require --out/--output):\n  add-vertex --name <v>\n  remove-vertex --name <v>\n  add-edge --from <u> --to <v> --weight <w>\n  remove-edge --from <u> --to <v>\n  reverse\n\nQueries:\n  has-path --from <u> --to <v>\n  path --from <u> --to <v> [--algorithm dijkstra|bellman-ford]\n  path-within --from <u> --to <v> --bound <n>\n  below --bound <n>\n  mst\n  max-flow --from <s> --to <t>\n  components\n  cyclomatic\n  critical-edges --from <u> --to <v>\n  common-target --from <u> --to <v>\n  disconnect --from <u> --to <v> --k <n>\n  out-degree --name <v>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; results and summary go to stderr."
}
