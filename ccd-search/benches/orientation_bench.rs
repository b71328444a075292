use ccd_core::traits::{IndependenceOracle, IndependenceResult, SepsetOracle};
use ccd_core::types::{Skeleton, VarId, VariableSet};
use ccd_search::CcdSearch;
use criterion::{criterion_group, criterion_main, Criterion};

/// Markov-chain oracle: x and y are independent exactly when the
/// conditioning set contains a variable strictly between them.
struct ChainOracle;

fn separated(x: VarId, y: VarId, z: &[VarId]) -> bool {
    let (lo, hi) = if x.0 < y.0 { (x.0, y.0) } else { (y.0, x.0) };
    z.iter().any(|m| m.0 > lo && m.0 < hi)
}

impl IndependenceOracle for ChainOracle {
    fn test(&self, x: VarId, y: VarId, z: &[VarId]) -> IndependenceResult {
        let independent = separated(x, y, z);
        let score = if independent {
            z.len() as f64
        } else {
            1000.0 + z.len() as f64
        };
        IndependenceResult { independent, score }
    }
}

impl SepsetOracle for ChainOracle {
    fn sepset(&self, x: VarId, y: VarId) -> Option<Vec<VarId>> {
        let (lo, hi) = if x.0 < y.0 { (x.0, y.0) } else { (y.0, x.0) };
        (hi - lo >= 2).then(|| vec![VarId(lo + 1)])
    }

    fn is_independent(&self, x: VarId, y: VarId, z: &[VarId]) -> bool {
        separated(x, y, z)
    }
}

fn chain(n: u32) -> (VariableSet, Skeleton) {
    let vars = VariableSet::new((0..n).map(|i| format!("v{i}")));
    let skeleton = Skeleton::from_edges((0..n - 1).map(|i| (VarId(i), VarId(i + 1))));
    (vars, skeleton)
}

fn bench_chain_orientation(c: &mut Criterion) {
    let oracle = ChainOracle;
    for n in [12u32, 24, 48] {
        let (vars, skeleton) = chain(n);
        c.bench_function(&format!("orient_chain_{n}"), |b| {
            b.iter(|| {
                CcdSearch::new(&vars, &oracle, &oracle)
                    .search(&skeleton)
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_chain_orientation);
criterion_main!(benches);
