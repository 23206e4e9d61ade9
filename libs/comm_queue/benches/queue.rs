use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use comm_queue::{MaxFirst, PriorityQueue};
use criterion::{Criterion, criterion_group, criterion_main};

fn push_pop(c: &mut Criterion) {
    let queue = PriorityQueue::with_capacity(50_000);

    c.bench_function("comm_queue push_pop", |b| {
        b.iter(|| {
            queue.push(black_box(100u64));
            let popped = queue.pop();
            assert_eq!(popped, Ok(100));
        })
    });
}

fn push_high_priority_on_large_queue(c: &mut Criterion) {
    let queue = PriorityQueue::with_capacity_and_order(500_000, MaxFirst);
    // -- Prepare large queue
    let mut priority = 0u64;
    for _ in 0..50_000 {
        queue.push(black_box(priority));
        priority += 1;
    }

    c.bench_function("comm_queue push_high_priority_on_large_queue", |b| {
        b.iter(|| {
            queue.push(black_box(priority));

            let drained = queue.drain(1);
            assert_eq!(drained[0], priority); //<-- should equal the last one added (highest priority)
        });
    });
}

fn blocking_handoff(c: &mut Criterion) {
    let requests = Arc::new(PriorityQueue::new());
    let replies = Arc::new(PriorityQueue::new());

    let echo = {
        let requests = Arc::clone(&requests);
        let replies = Arc::clone(&replies);
        thread::spawn(move || {
            while let Some(value) = requests.wait_nonempty_pop() {
                replies.push(value);
            }
        })
    };

    c.bench_function("comm_queue blocking_handoff", |b| {
        b.iter(|| {
            requests.push(black_box(7u64));
            assert_eq!(replies.wait_nonempty_pop(), Some(7));
        })
    });

    requests.done();
    echo.join().unwrap();
}

criterion_group!(
    benches,
    push_pop,
    push_high_priority_on_large_queue,
    blocking_handoff
);
criterion_main!(benches);
