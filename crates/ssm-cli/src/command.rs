//! REPL command parsing.
//!
//! A line of input becomes a [`Command`], or a [`ParseError`] carrying
//! exactly what should be printed: an `error:` line, a `usage:` line, or
//! both. Rendering stays in `main`; this module only decides the words.

use ssm_core::{NodeId, WayId};

const FIND_USAGE: &str = "usage: find way keyword | find node keyword [keyword]";
const PATH_USAGE: &str = "usage: path create start finish | path time node1 node2 [nodes...]";

/// One parsed REPL command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    PrintNode(NodeId),
    PrintWay(WayId),
    FindWay(String),
    FindNode(String, Option<String>),
    PathTime(Vec<NodeId>),
    PathCreate(NodeId, NodeId),
}

/// What to tell the user about a line that did not parse.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: Option<String>,
    pub usage: Option<&'static str>,
}

impl ParseError {
    fn message(text: impl Into<String>) -> Self {
        Self { message: Some(text.into()), usage: None }
    }

    fn with_usage(text: impl Into<String>, usage: &'static str) -> Self {
        Self { message: Some(text.into()), usage: Some(usage) }
    }
}

/// Parse one input line. Blank lines produce `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };

    match command {
        "quit" => Ok(Some(Command::Quit)),
        "node" => parse_id(tokens).map(|id| Some(Command::PrintNode(NodeId(id)))),
        "way" => parse_id(tokens).map(|id| Some(Command::PrintWay(WayId(id)))),
        "find" => parse_find(tokens).map(Some),
        "path" => parse_path(tokens).map(Some),
        other => Err(ParseError::message(format!(
            "error: unknown command {other}. Available commands are:\n\tnode, way, find, path, quit"
        ))),
    }
}

fn parse_id<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<u32, ParseError> {
    let Some(token) = tokens.next() else {
        return Err(ParseError::message("error: '' is not an integer."));
    };
    token
        .parse()
        .map_err(|_| ParseError::message(format!("error: '{token}' is not an integer.")))
}

fn parse_find<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Command, ParseError> {
    let sub = tokens.next();
    let first = tokens.next();
    let second = tokens.next();
    let third = tokens.next();

    match sub {
        Some("way") => match (first, second) {
            (Some(keyword), None) => Ok(Command::FindWay(keyword.to_string())),
            _ => Err(ParseError::with_usage(
                "error: invalid number of arguments.",
                FIND_USAGE,
            )),
        },
        Some("node") => match (first, third) {
            (Some(keyword), None) => Ok(Command::FindNode(
                keyword.to_string(),
                second.map(str::to_string),
            )),
            _ => Err(ParseError::with_usage(
                "error: invalid number of arguments.",
                FIND_USAGE,
            )),
        },
        Some(_) => Err(ParseError::with_usage(
            "error: first argument must be either node or way.",
            FIND_USAGE,
        )),
        None => Err(ParseError { message: None, usage: Some(FIND_USAGE) }),
    }
}

fn parse_path<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Command, ParseError> {
    match tokens.next() {
        Some("time") => {
            let mut nodes = Vec::new();
            for token in tokens {
                let id = token.parse().map_err(|_| {
                    ParseError::with_usage(
                        format!("error: {token} is not an integer."),
                        PATH_USAGE,
                    )
                })?;
                nodes.push(NodeId(id));
            }
            if nodes.len() < 2 {
                return Err(ParseError::with_usage(
                    "error: must specify at least two nodes.",
                    PATH_USAGE,
                ));
            }
            Ok(Command::PathTime(nodes))
        }
        Some("create") => {
            let (Some(start), Some(finish)) = (tokens.next(), tokens.next()) else {
                return Err(ParseError::with_usage(
                    "error: must specify start node and finish node.",
                    PATH_USAGE,
                ));
            };
            let start = start.parse().map_err(|_| {
                ParseError::with_usage(format!("error: {start} is not an integer."), PATH_USAGE)
            })?;
            let finish = finish.parse().map_err(|_| {
                ParseError::with_usage(format!("error: {finish} is not an integer."), PATH_USAGE)
            })?;
            Ok(Command::PathCreate(NodeId(start), NodeId(finish)))
        }
        Some(_) => Err(ParseError::with_usage(
            "error: first argument must be either time or create.",
            PATH_USAGE,
        )),
        None => Err(ParseError { message: None, usage: Some(PATH_USAGE) }),
    }
}
