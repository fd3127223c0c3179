use std::collections::VecDeque;

/// Distance in edges from `source` to every vertex of the unweighted graph,
/// `None` for vertices the search never reaches. O(V + E).
pub fn distances(adj: &[Vec<usize>], source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; adj.len()];
    dist[source] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back((source, 0));
    while let Some((u, d)) = queue.pop_front() {
        for &v in &adj[u] {
            if dist[v].is_none() {
                dist[v] = Some(d + 1);
                queue.push_back((v, d + 1));
            }
        }
    }
    dist
}
