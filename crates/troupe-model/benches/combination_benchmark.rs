// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use troupe_model::combination::{CombinationMode, LimitedCombination, total_combinations};
use troupe_model::pool::ModelPool;

fn fleet(models: usize, per_model: u32) -> ModelPool {
    ModelPool::from_pairs((0..models).map(|i| (format!("om#Model{i:02}"), per_model)))
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("limited_combination");

    for &(models, per_model, budget) in &[(4usize, 3u32, 12u64), (6, 2, 6), (8, 2, 4), (10, 1, 10)] {
        let bound = fleet(models, per_model);
        let label = format!("{models}x{per_model}");
        let expected = LimitedCombination::new(&bound, budget, CombinationMode::Max).count() as u64;

        group.throughput(Throughput::Elements(expected.min(total_combinations(&bound))));
        group.bench_with_input(BenchmarkId::new(label, budget), &bound, |b, bound| {
            b.iter(|| {
                let mut n = 0u64;
                for pool in LimitedCombination::new(black_box(bound), budget, CombinationMode::Max) {
                    n += black_box(pool.total_atoms());
                }
                n
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);
