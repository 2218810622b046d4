use itertools::Itertools;
use rand::prelude::*;

/// Builds one input line describing a random connected graph.
///
/// Node `N{i}` is attached to a random earlier node, which yields a spanning
/// tree, then `extra_edges` random edges between distinct nodes are added.
/// Edges are shuffled so the declaration order carries no structure.
pub fn random_connected_graph_line<R: Rng>(
    rng: &mut R,
    number_of_nodes: u32,
    extra_edges: u32,
) -> String {
    let number_of_nodes = number_of_nodes.max(1);
    let labels = (0..number_of_nodes)
        .map(|vertex| format!("N{}", vertex))
        .collect_vec();

    let mut edges = (1..number_of_nodes)
        .map(|vertex| (rng.gen_range(0..vertex), vertex))
        .collect_vec();

    if number_of_nodes > 1 {
        edges.extend((0..extra_edges).map(|_| {
            // guarantee that tail != head
            let tail = rng.gen_range(0..number_of_nodes);
            let mut head = rng.gen_range(0..number_of_nodes - 1);
            if head >= tail {
                head += 1;
            }
            (tail, head)
        }));
    }

    edges.shuffle(rng);

    let edges = edges
        .iter()
        .map(|&(tail, head)| format!("{}-{}", labels[tail as usize], labels[head as usize]));

    std::iter::once(number_of_nodes.to_string())
        .chain(labels.iter().cloned())
        .chain(edges)
        .join(",")
}

/// `number_of_graphs` lines from a generator seeded with `seed`.
pub fn random_connected_graph_lines(
    seed: u64,
    number_of_graphs: u32,
    number_of_nodes: u32,
    extra_edges: u32,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..number_of_graphs)
        .map(|_| random_connected_graph_line(&mut rng, number_of_nodes, extra_edges))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::random_connected_graph_lines;
    use crate::graphs::{graph_functions::hop_distances, graph_parser::parse, Graph};

    #[test]
    fn generated_graphs_parse_and_are_connected() {
        for line in random_connected_graph_lines(7, 20, 12, 5) {
            let graph = parse(&line).unwrap();
            assert_eq!(graph.number_of_vertices(), 12);
            assert_eq!(graph.number_of_neighbor_entries(), 2 * (11 + 5));
            assert!(hop_distances(&graph, 0).iter().all(Option::is_some));
        }
    }

    #[test]
    fn same_seed_same_lines() {
        assert_eq!(
            random_connected_graph_lines(42, 5, 8, 3),
            random_connected_graph_lines(42, 5, 8, 3)
        );
    }

    #[test]
    fn single_node() {
        assert_eq!(random_connected_graph_lines(1, 1, 1, 4), ["1,N0"]);
    }
}
