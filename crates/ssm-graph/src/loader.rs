//! Line-oriented loader for the "Simple Street Map" text format.
//!
//! # Format
//!
//! ```text
//! Simple Street Map
//! <W> ways
//! <N> nodes
//! way <id> <osmid> <name...>
//! <speed> <oneway|bidirectional> <count>
//! <count node ids, whitespace-separated, may continue on following lines>
//! ...
//! node <id> <osmid> <lat> <lon> <count>
//! <count way ids, whitespace-separated>
//! ...
//! ```
//!
//! Way names run to the end of their line and may contain spaces. The
//! OSM id column is parsed and discarded. The direction token is `oneway`
//! for one-way roads; any other token means bidirectional. Every way and
//! node record must carry at least one chain/incidence entry.
//!
//! Errors report the offending line number; builder-level violations
//! (duplicate ids, inconsistent incidence) surface as
//! [`LoadError::Graph`].

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::info;

use ssm_core::{GeoPoint, NodeId, WayId};

use crate::builder::StreetMapBuilder;
use crate::error::LoadError;
use crate::map::StreetMap;

const MAGIC: &str = "Simple Street Map";

/// Load a street map from a file.
pub fn load_map(path: &Path) -> Result<StreetMap, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let map = parse_map(&text)?;
    info!(
        "{} loaded: {} nodes, {} ways",
        path.display(),
        map.node_count(),
        map.way_count()
    );
    Ok(map)
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_map_reader<R: Read>(mut reader: R) -> Result<StreetMap, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_map(&text)
}

/// Parse the full text of a map file.
pub fn parse_map(text: &str) -> Result<StreetMap, LoadError> {
    let mut cur = Cursor::new(text);

    if cur.next_nonblank()?.trim_end() != MAGIC {
        return Err(cur.err(format!("expected magic line {MAGIC:?}")));
    }
    let nr_ways: usize = cur.counted_header("ways")?;
    let nr_nodes: usize = cur.counted_header("nodes")?;

    let mut builder = StreetMapBuilder::new(nr_nodes, nr_ways)?;

    for _ in 0..nr_ways {
        let (id, name) = cur.way_header()?;
        let (speed_kmh, one_way, count) = cur.way_attributes()?;
        let node_ids = cur.id_list(count, NodeId)?;
        builder.add_way(id, name, speed_kmh, one_way, node_ids)?;
    }

    for _ in 0..nr_nodes {
        let (id, position, count) = cur.node_header()?;
        let way_ids = cur.id_list(count, WayId)?;
        builder.add_node(id, position, way_ids)?;
    }

    Ok(builder.build()?)
}

// ── Line cursor ───────────────────────────────────────────────────────────────

struct Cursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines(), line_no: 0 }
    }

    fn err(&self, reason: impl Into<String>) -> LoadError {
        LoadError::Format { line: self.line_no, reason: reason.into() }
    }

    /// Next line with any content, skipping blank lines.
    fn next_nonblank(&mut self) -> Result<&'a str, LoadError> {
        loop {
            let line = self.lines.next().ok_or(LoadError::Format {
                line: self.line_no,
                reason: "unexpected end of file".into(),
            })?;
            self.line_no += 1;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }

    /// `"<count> ways"` / `"<count> nodes"` header line.
    fn counted_header(&mut self, label: &str) -> Result<usize, LoadError> {
        let line = self.next_nonblank()?;
        let mut tokens = line.split_whitespace();
        let count = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(num), Some(word), None) if word == label => num,
            _ => return Err(self.err(format!("expected \"<count> {label}\""))),
        };
        self.parse(count)
    }

    /// `"way <id> <osmid> <name...>"` — the name runs to end of line.
    fn way_header(&mut self) -> Result<(WayId, &'a str), LoadError> {
        let line = self.next_nonblank()?;
        let Some((keyword, rest)) = take_token(line) else {
            return Err(self.err("expected a way record"));
        };
        if keyword != "way" {
            return Err(self.err(format!("expected \"way\", found {keyword:?}")));
        }
        let (id_tok, rest) = take_token(rest)
            .ok_or_else(|| self.err("way record is missing its id"))?;
        let (osmid_tok, rest) = take_token(rest)
            .ok_or_else(|| self.err("way record is missing its OSM id"))?;
        let id = WayId(self.parse(id_tok)?);
        let _: i64 = self.parse(osmid_tok)?; // present in the format, unused
        let name = rest.trim();
        if name.is_empty() {
            return Err(self.err("way record is missing its name"));
        }
        Ok((id, name))
    }

    /// `"<speed> <direction> <count>"`.
    fn way_attributes(&mut self) -> Result<(f64, bool, usize), LoadError> {
        let line = self.next_nonblank()?;
        let mut tokens = line.split_whitespace();
        let (Some(speed), Some(dir), Some(count), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(self.err("expected \"<speed> <direction> <count>\""));
        };
        let speed_kmh: f64 = self.parse(speed)?;
        let count: usize = self.parse(count)?;
        if count == 0 {
            return Err(self.err("a way must list at least one node"));
        }
        Ok((speed_kmh, dir == "oneway", count))
    }

    /// `"node <id> <osmid> <lat> <lon> <count>"`.
    fn node_header(&mut self) -> Result<(NodeId, GeoPoint, usize), LoadError> {
        let line = self.next_nonblank()?;
        let mut tokens = line.split_whitespace();
        let (Some(kw), Some(id), Some(osmid), Some(lat), Some(lon), Some(count), None) = (
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
        ) else {
            return Err(self.err("expected \"node <id> <osmid> <lat> <lon> <count>\""));
        };
        if kw != "node" {
            return Err(self.err(format!("expected \"node\", found {kw:?}")));
        }
        let id = NodeId(self.parse(id)?);
        let _: i64 = self.parse(osmid)?; // unused
        let position = GeoPoint::new(self.parse(lat)?, self.parse(lon)?);
        let count: usize = self.parse(count)?;
        if count == 0 {
            return Err(self.err("a node must list at least one incident way"));
        }
        Ok((id, position, count))
    }

    /// Exactly `count` whitespace-separated ids, continuing across lines.
    /// Extra tokens after the last id on its line are a format violation.
    fn id_list<T>(&mut self, count: usize, wrap: impl Fn(u32) -> T) -> Result<Vec<T>, LoadError> {
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let line = self.next_nonblank()?;
            for token in line.split_whitespace() {
                if out.len() == count {
                    return Err(self.err(format!("expected {count} ids, found more")));
                }
                out.push(wrap(self.parse(token)?));
            }
        }
        Ok(out)
    }

    fn parse<T: FromStr>(&self, token: &str) -> Result<T, LoadError> {
        token
            .parse()
            .map_err(|_| self.err(format!("malformed number {token:?}")))
    }
}

/// Split off the first whitespace-delimited token; `None` on blank input.
fn take_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], &s[i..])),
        None => Some((s, "")),
    }
}
