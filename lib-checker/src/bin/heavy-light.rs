// SPOJ QTREE: tree with weighted edges, "0 u v w" overwrites the weight of
// the edge between u and v, "1 u v" asks for the maximum weight on the path.
use std::fmt::Write;

use heavy_light::HldTree;
use proconio::{input, marker::Usize1};
use segtree::operation;

fn main() {
    input! {
        n: usize,
        edges: [(Usize1, Usize1, i64); n - 1],
        q: usize,
    }
    let mut tree = HldTree::from_edges(operation::max(), n, 0, edges).unwrap();
    let mut out = String::new();
    for _ in 0..q {
        input! { kind: u8, }
        match kind {
            0 => {
                input! { u: Usize1, v: Usize1, w: i64, }
                tree.update_edge(u, v, w).unwrap();
            }
            1 => {
                input! { u: Usize1, v: Usize1, }
                writeln!(out, "{}", tree.query_path(u, v).unwrap()).unwrap();
            }
            _ => unreachable!(),
        }
    }
    print!("{out}");
}
