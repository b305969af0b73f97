//! ssm — interactive query shell over a Simple Street Map file.
//!
//! ```text
//! $ ssm toronto.map
//! toronto.map successfully loaded. 29601 nodes, 4848 ways.
//! >> find node College Spadina
//! 328
//! >> path create 328 981
//! 328 329 330 981
//! >> quit
//! ```
//!
//! The engine crates return structured results; every user-facing string
//! is rendered here.

mod command;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use ssm_graph::{LoadError, StreetMap, load_map};
use ssm_routing::{RouteError, shortest_path, travel_time};

use command::{Command, ParseError};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let [_, map_path] = args.as_slice() else {
        eprintln!("usage: {} FILE", args.first().map_or("ssm", String::as_str));
        return Ok(());
    };

    let map = match load_map(Path::new(map_path)) {
        Ok(map) => {
            println!(
                "{map_path} successfully loaded. {} nodes, {} ways.",
                map.node_count(),
                map.way_count()
            );
            map
        }
        Err(LoadError::Io(e)) => {
            eprintln!("error: could not open {map_path} ({e})");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {map_path} has invalid file format ({e})");
            std::process::exit(1);
        }
    };

    repl(&map)
}

fn repl(map: &StreetMap) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!(">> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => execute(map, cmd),
            Err(ParseError { message, usage }) => {
                if let Some(message) = message {
                    println!("{message}");
                }
                if let Some(usage) = usage {
                    println!("{usage}");
                }
            }
        }
    }
    Ok(())
}

fn execute(map: &StreetMap, cmd: Command) {
    match cmd {
        Command::Quit => unreachable!("handled by the repl loop"),

        Command::PrintNode(id) => match map.node(id) {
            Some(node) => println!("Node {}: {}", node.id, node.position),
            None => println!("error: node {id} does not exist."),
        },

        Command::PrintWay(id) => match map.way(id) {
            Some(way) => println!("Way {}: {}", way.id, way.name),
            None => println!("error: way {id} does not exist."),
        },

        Command::FindWay(keyword) => {
            println!("{}", join_ids(map.find_ways_by_name(&keyword)));
        }

        Command::FindNode(first, second) => {
            println!(
                "{}",
                join_ids(map.find_nodes_by_names(&first, second.as_deref()))
            );
        }

        Command::PathTime(nodes) => match travel_time(map, &nodes) {
            Ok(minutes) => println!("{minutes:.4} minutes"),
            Err(e) => println!("error: {e}."),
        },

        Command::PathCreate(start, finish) => match shortest_path(map, start, finish) {
            Ok(route) => println!("{}", join_ids(route.nodes)),
            Err(RouteError::NoPath(a, b)) => println!("No path found from {a} to {b}."),
            Err(e) => println!("error: {e}."),
        },
    }
}

fn join_ids<I>(ids: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
