// AOJ ALDS1_11_C: directed adjacency lists, print each vertex's distance
// from vertex 1, -1 when unreachable.
use std::fmt::Write;

use proconio::{input, marker::Usize1};

fn main() {
    input! { n: usize, }
    let mut adj = vec![vec![]; n];
    for _ in 0..n {
        input! { u: Usize1, k: usize, vs: [Usize1; k], }
        adj[u] = vs;
    }
    let dist = bfs::distances(&adj, 0);
    let mut out = String::new();
    for (u, d) in dist.iter().enumerate() {
        writeln!(out, "{} {}", u + 1, d.map_or(-1, |d| d as i64)).unwrap();
    }
    print!("{out}");
}
