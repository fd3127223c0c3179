// AOJ GRL_5_C: rooted tree given as children lists, answer lca per query.
use std::fmt::Write;

use lca::LcaTable;
use proconio::input;

fn main() {
    input! {
        n: usize,
        children: [[usize]; n],
        q: usize,
        queries: [(usize, usize); q],
    }
    let mut adj = vec![vec![]; n];
    for (u, list) in children.iter().enumerate() {
        for &v in list {
            adj[u].push(v);
            adj[v].push(u);
        }
    }
    let table = LcaTable::from_adjacency(&adj, 0);
    let mut out = String::new();
    for (u, v) in queries {
        writeln!(out, "{}", table.lca(u, v)).unwrap();
    }
    print!("{out}");
}
