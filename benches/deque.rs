use core::mem::MaybeUninit;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ring_deque::RingDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 256;
    {
        let mut group = c.benchmark_group("VecDeque vs RingDeque (PushBack 256, growing)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingDeque<i32> (elastic)", |b| {
            b.iter(|| {
                let mut d: RingDeque<i32> = RingDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingDeque<i32> (fixed buffer)", |b| {
            let mut region = [MaybeUninit::<i32>::uninit(); 256];
            b.iter(|| {
                let mut d = RingDeque::with_buffer(&mut region);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d.len()
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingDeque (Get 256)");
        let mut d_std = VecDeque::new();
        let mut d_ring: RingDeque<i32> = RingDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_ring.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("RingDeque<i32> (wrapping index)", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_ring.get(black_box(i as isize)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("RingDeque grow/shrink churn (fill 256, drain 256)");
        group.bench_function("RingDeque<i32> (elastic)", |b| {
            b.iter(|| {
                let mut d: RingDeque<i32> = RingDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                while let Some(v) = d.pop_front() {
                    black_box(v);
                }
                d.capacity()
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
