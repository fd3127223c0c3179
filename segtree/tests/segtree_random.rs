use rand::{rngs::ThreadRng, Rng};
use segtree::{operation, Segtree};

#[derive(Debug, Clone, Copy)]
enum Query {
    Max(usize, usize),
    Update(usize, i64),
}

fn solve_segtree(data: &[i64], queries: &[Query]) -> Vec<i64> {
    let mut segtree = data
        .iter()
        .copied()
        .collect::<Segtree<_, operation::Max<_>>>();
    let mut res = vec![];
    for &query in queries {
        match query {
            Query::Max(l, r) => res.push(segtree.query(l..r)),
            Query::Update(i, x) => segtree.update(i, x),
        }
    }
    res
}

fn solve_simple(data: &[i64], queries: &[Query]) -> Vec<i64> {
    let mut data = data.to_vec();
    let mut res = vec![];
    for &query in queries {
        match query {
            Query::Max(l, r) => {
                res.push(data[l..r].iter().copied().fold(i64::MIN, i64::max));
            }
            Query::Update(i, x) => data[i] = x,
        }
    }
    res
}

fn range_max_test_once(rng: &mut ThreadRng) {
    let n = rng.gen_range(1..=300);
    let data = (0..n)
        .map(|_| rng.gen_range(-1_000_000..=1_000_000))
        .collect::<Vec<_>>();
    let q = rng.gen_range(1..=300);
    let queries = (0..q)
        .map(|_| {
            if rng.gen_bool(0.5) {
                let l = rng.gen_range(0..=n);
                let r = rng.gen_range(l..=n);
                Query::Max(l, r)
            } else {
                let i = rng.gen_range(0..n);
                let x = rng.gen_range(-1_000_000..=1_000_000);
                Query::Update(i, x)
            }
        })
        .collect::<Vec<_>>();
    let expected = solve_simple(&data, &queries);
    let result = solve_segtree(&data, &queries);
    assert_eq!(expected, result);
}

#[test]
fn range_max_test() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        range_max_test_once(&mut rng);
    }
}
