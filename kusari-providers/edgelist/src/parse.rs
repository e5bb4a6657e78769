//! Line-based parsing of edge lists and breakpoint lists.

use std::io::BufRead;

use kusari_core::AdjacencyCluster;
use tracing::{debug, instrument};

use crate::errors::EdgeListError;

/// Upper bound on nodes per parsed edge, so a stray large id cannot size
/// the adjacency table far beyond the input.
pub const NODE_ID_SPREAD: usize = 16;

/// Parses an undirected edge list into a named cluster.
///
/// Each line holds two whitespace-separated node ids. Blank lines and text
/// after `#` are ignored. Edge ids follow line order and the node count is
/// one past the largest id seen, which may not exceed
/// [`NODE_ID_SPREAD`] times the number of edges.
///
/// # Errors
/// Returns [`EdgeListError::MalformedLine`] for lines without exactly two
/// tokens, [`EdgeListError::InvalidNodeId`] for tokens that are not unsigned
/// integers (including `usize::MAX`, which has no successor),
/// [`EdgeListError::NodeOutOfRange`] when the largest id exceeds the spread
/// limit, [`EdgeListError::EmptyInput`] when no edge is found, and
/// [`EdgeListError::Cluster`] when the edges break a cluster invariant.
///
/// # Examples
/// ```
/// use kusari_core::Cluster;
/// use kusari_providers_edgelist::parse_edge_list;
///
/// let cluster = parse_edge_list("demo", "# path\n0 1\n1 2\n".as_bytes())?;
/// assert_eq!(cluster.name(), "demo");
/// assert_eq!(cluster.node_count(), 3);
/// assert_eq!(cluster.edge_count(), 2);
/// # Ok::<(), kusari_providers_edgelist::EdgeListError>(())
/// ```
#[instrument(
    name = "edgelist.parse",
    err,
    skip(name, reader),
    fields(cluster = %name.as_ref()),
)]
pub fn parse_edge_list<R: BufRead>(
    name: impl AsRef<str>,
    reader: R,
) -> Result<AdjacencyCluster, EdgeListError> {
    let mut edges = Vec::new();
    let mut node_count = 0;
    let mut widest_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let mut tokens = content(&line).split_whitespace();
        let (Some(start), Some(end), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            if content(&line).trim().is_empty() {
                continue;
            }
            return Err(EdgeListError::MalformedLine {
                line: number,
                content: line.trim().to_owned(),
            });
        };
        let (start, end) = (node_id(number, start)?, node_id(number, end)?);
        let top = start.max(end);
        let count = top.checked_add(1).ok_or_else(|| EdgeListError::InvalidNodeId {
            line: number,
            token: top.to_string(),
        })?;
        if count > node_count {
            node_count = count;
            widest_line = number;
        }
        edges.push((start, end));
    }

    if edges.is_empty() {
        return Err(EdgeListError::EmptyInput);
    }
    let limit = edges.len().saturating_mul(NODE_ID_SPREAD);
    if node_count > limit {
        return Err(EdgeListError::NodeOutOfRange {
            line: widest_line,
            node: node_count - 1,
            limit,
        });
    }
    debug!(nodes = node_count, edges = edges.len(), "parsed edge list");
    Ok(AdjacencyCluster::from_edges(node_count, &edges)?.with_name(name.as_ref()))
}

/// Parses a breakpoint list into flags indexed by point index.
///
/// Each line holds one point index below `point_count`; blank lines and `#`
/// comments are ignored. The result is long enough to hold the largest
/// index, and an input without indices yields an empty slice, which leaves
/// chains unsplit.
///
/// # Errors
/// Returns [`EdgeListError::MalformedLine`] for lines with more than one
/// token, [`EdgeListError::InvalidNodeId`] for unparsable indices, and
/// [`EdgeListError::PointOutOfRange`] for indices not below `point_count`.
///
/// # Examples
/// ```
/// use kusari_providers_edgelist::parse_breakpoints;
///
/// let flags = parse_breakpoints("2\n# ignored\n4\n".as_bytes(), 8)?;
/// assert_eq!(flags, vec![false, false, true, false, true]);
/// # Ok::<(), kusari_providers_edgelist::EdgeListError>(())
/// ```
pub fn parse_breakpoints<R: BufRead>(
    reader: R,
    point_count: usize,
) -> Result<Vec<bool>, EdgeListError> {
    let mut flags = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let mut tokens = content(&line).split_whitespace();
        let Some(token) = tokens.next() else {
            continue;
        };
        if tokens.next().is_some() {
            return Err(EdgeListError::MalformedLine {
                line: number,
                content: line.trim().to_owned(),
            });
        }
        let point = node_id(number, token)?;
        if point >= point_count {
            return Err(EdgeListError::PointOutOfRange {
                line: number,
                point,
                point_count,
            });
        }
        if point >= flags.len() {
            flags.resize(point + 1, false);
        }
        if let Some(flag) = flags.get_mut(point) {
            *flag = true;
        }
    }
    Ok(flags)
}

/// Strips a trailing `#` comment.
fn content(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn node_id(line: usize, token: &str) -> Result<usize, EdgeListError> {
    token.parse().map_err(|_| EdgeListError::InvalidNodeId {
        line,
        token: token.to_owned(),
    })
}
