//! Parser for the one-line graph format.
//!
//! A line looks like `"4,A,B,C,D,A-B,B-C,C-D"`: the node count, the node
//! labels in declaration order, then any number of `<A>-<B>` edges. Double
//! quotes anywhere in the line are dropped before splitting.

use tracing::trace;

use super::{adjacency_graph::AdjacencyGraph, edge::UndirectedEdge};
use crate::error::ParseError;

pub fn parse(line: &str) -> Result<AdjacencyGraph, ParseError> {
    let line = line.replace('"', "");
    let mut fields: Vec<&str> = line.trim().split(',').collect();

    // a trailing comma does not introduce an (empty) edge
    while fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }

    let count_field = fields[0];
    let number_of_nodes: usize = count_field
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNodeCount(count_field.to_string()))?;
    if number_of_nodes == 0 {
        return Err(ParseError::NoNodes);
    }

    let found = fields.len() - 1;
    if found < number_of_nodes {
        return Err(ParseError::MissingNodes {
            expected: number_of_nodes,
            found,
        });
    }

    let (nodes, edges) = fields[1..].split_at(number_of_nodes);

    let mut graph = AdjacencyGraph::with_capacity(number_of_nodes);
    for label in nodes {
        graph.add_vertex(label)?;
    }

    for descriptor in edges {
        let edge = UndirectedEdge::from_descriptor(descriptor)?;
        if edge.is_loop() {
            trace!(node = edge.a(), "self loop");
        }
        graph.add_edge(&edge)?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::{error::ParseError, graphs::Graph};

    #[test]
    fn chain() {
        let graph = parse("4,A,B,C,D,A-B,B-C,C-D").unwrap();

        assert_eq!(graph.labels(), ["A", "B", "C", "D"]);
        assert_eq!(graph.neighbor_labels("A").unwrap(), ["B"]);
        assert_eq!(graph.neighbor_labels("B").unwrap(), ["A", "C"]);
        assert_eq!(graph.neighbor_labels("C").unwrap(), ["B", "D"]);
        assert_eq!(graph.neighbor_labels("D").unwrap(), ["C"]);
        assert_eq!(graph.number_of_neighbor_entries(), 6);
    }

    #[test]
    fn quotes_and_whitespace_are_stripped() {
        let graph = parse("  \"3,X,Y,Z,X-Y,X-Z\"\n").unwrap();

        assert_eq!(graph.labels(), ["X", "Y", "Z"]);
        assert_eq!(graph.vertex("Z"), Some(2));
        assert_eq!(graph.neighbor_labels("X").unwrap(), ["Y", "Z"]);
    }

    #[test]
    fn isolated_single_node() {
        let graph = parse("1,Q").unwrap();

        assert_eq!(graph.number_of_vertices(), 1);
        assert_eq!(graph.vertex("Q"), Some(0));
        assert!(graph.neighbor_labels("Q").unwrap().is_empty());
    }

    #[test]
    fn declared_node_without_edges_is_kept() {
        let graph = parse("3,A,B,C,A-C").unwrap();

        assert_eq!(graph.neighbor_labels("B").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn trailing_comma_is_ignored() {
        let graph = parse("2,A,B,A-B,").unwrap();

        assert_eq!(graph.number_of_neighbor_entries(), 2);
    }

    #[test]
    fn self_loop_is_stored_twice() {
        let graph = parse("2,A,B,A-A,A-B").unwrap();

        assert_eq!(graph.neighbor_labels("A").unwrap(), ["A", "A", "B"]);
    }

    #[test]
    fn invalid_node_count() {
        assert_eq!(
            parse("four,A,B,C,D").unwrap_err(),
            ParseError::InvalidNodeCount("four".to_string())
        );
        assert_eq!(
            parse("").unwrap_err(),
            ParseError::InvalidNodeCount(String::new())
        );
    }

    #[test]
    fn zero_nodes() {
        assert_eq!(parse("0").unwrap_err(), ParseError::NoNodes);
    }

    #[test]
    fn count_exceeds_fields() {
        assert_eq!(
            parse("5,A,B,C").unwrap_err(),
            ParseError::MissingNodes {
                expected: 5,
                found: 3
            }
        );
    }

    #[test]
    fn duplicate_node() {
        assert_eq!(
            parse("3,A,B,A,A-B").unwrap_err(),
            ParseError::DuplicateNode("A".to_string())
        );
    }

    #[test]
    fn malformed_edges() {
        for line in ["2,A,B,AB", "2,A,B,A-", "2,A,B,-B", "3,A,B,C,A-B-C", "2,A,B,,A-B"] {
            assert!(
                matches!(parse(line), Err(ParseError::MalformedEdge(_))),
                "{line}"
            );
        }
    }

    #[test]
    fn undeclared_node() {
        assert_eq!(
            parse("2,A,B,A-C").unwrap_err(),
            ParseError::UndeclaredNode {
                edge: "A-C".to_string(),
                node: "C".to_string()
            }
        );
    }
}
