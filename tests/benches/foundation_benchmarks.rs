//! # Groundwork Benchmarks
//!
//! Performance checks for the hot paths:
//!
//! | Crate | Operation | Expectation |
//! |-------|-----------|-------------|
//! | groundwork-trees | path resolution | linear in path depth |
//! | groundwork-codec | flatten + rebuild | linear in node count |
//! | groundwork-bus | publish fan-out | linear in subscriber count |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use groundwork_bus::{EventBus, EventPublisher, TopicFilter};
use groundwork_codec::TreeDto;
use groundwork_trees::{ListPath, NodeId, Tree};

/// A complete tree with the given branching factor and depth.
fn build_tree(branching: usize, depth: usize) -> Tree<u32, u64> {
    let mut tree = Tree::new();
    let root = tree.set_root(0, 0);
    let mut frontier = vec![root];
    let mut rng = rand::thread_rng();

    for _ in 0..depth {
        let mut next: Vec<NodeId> = Vec::new();
        for parent in frontier {
            for key in 0..branching {
                let child = tree
                    .add_child(parent, key as u32, rng.gen())
                    .expect("parent is alive");
                next.push(child);
            }
        }
        frontier = next;
    }
    tree
}

fn bench_path_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("trees-path-resolution");

    for depth in [4usize, 8, 12] {
        let tree = build_tree(2, depth);
        // Deepest leftmost node: 0/0/0/...
        let path: ListPath<u32> = std::iter::repeat(0u32).take(depth + 1).collect();

        group.bench_with_input(BenchmarkId::new("resolve", depth), &depth, |b, _| {
            b.iter(|| black_box(tree.get(black_box(&path))));
        });
    }
    group.finish();
}

fn bench_tree_dto_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec-tree-dto");

    for depth in [6usize, 10] {
        let tree = build_tree(2, depth);
        group.bench_with_input(
            BenchmarkId::new("flatten_rebuild", tree.len()),
            &tree,
            |b, tree| {
                b.iter(|| {
                    let dto = TreeDto::from_tree(black_box(tree)).expect("live handles");
                    black_box(dto.into_tree().expect("rows connect"))
                });
            },
        );
    }
    group.finish();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Tick;

#[derive(Debug, Clone)]
struct TickEvent(u64);

impl groundwork_bus::BusEvent for TickEvent {
    type Topic = Tick;

    fn topic(&self) -> Tick {
        Tick
    }
}

fn bench_bus_fanout(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime builds");

    let mut group = c.benchmark_group("bus-publish-fanout");

    for subscribers in [1usize, 8, 64] {
        let bus: EventBus<TickEvent> = EventBus::new();
        let subs: Vec<_> = (0..subscribers)
            .map(|_| bus.subscribe(TopicFilter::all()))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("publish", subscribers),
            &subscribers,
            |b, _| {
                b.iter(|| runtime.block_on(async { black_box(bus.publish(TickEvent(1)).await) }));
            },
        );
        drop(subs);
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_path_resolution,
    bench_tree_dto_roundtrip,
    bench_bus_fanout
);
criterion_main!(benches);
