use std::fs::File;
use std::io::BufReader;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use rrt_rs::entities::{RRTree, TreeNode};
use rrt_rs::geometry::primitives::Edge;
use rrt_rs::io::ext_repr::ExtScene;
use rrt_rs::io::import::{SceneQuery, import_scene};
use rrt_rs::rrt::{RRTPlanner, UniformRectSampler};
use rrt_rs::util::{RRTConfig, TreePalette};
use rrt_rs::validity::ValidityChecker;

criterion_main!(benches);
criterion_group!(benches, solve_bench, admissibility_bench);

const CLUTTERED_PATH: &str = "../assets/cluttered.json";
const BLOCKING_WALL_PATH: &str = "../assets/blocking_wall.json";

fn load(path: &str) -> SceneQuery {
    let ext_scene: ExtScene =
        serde_json::from_reader(BufReader::new(File::open(path).unwrap())).unwrap();
    import_scene(&ext_scene, RRTConfig::default().endpoint_radius).unwrap()
}

/// Full planning runs for different step lengths
fn solve_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);
    for path in [CLUTTERED_PATH, BLOCKING_WALL_PATH] {
        let query = load(path);
        for step_length in [1.0, 1.5, 3.0] {
            let config = RRTConfig {
                step_length,
                ..RRTConfig::default()
            };
            let mut seed = 0;
            let id = BenchmarkId::new(path.rsplit('/').next().unwrap(), step_length);
            group.bench_function(id, |b| {
                b.iter(|| {
                    seed += 1;
                    RRTPlanner::new(
                        &query.scene,
                        query.start,
                        query.goal,
                        config,
                        SmallRng::seed_from_u64(seed),
                    )
                    .unwrap()
                    .solve()
                })
            });
        }
    }
    group.finish();
}

/// Crossing checks of random edges against trees of increasing size
fn admissibility_bench(c: &mut Criterion) {
    let query = load(CLUTTERED_PATH);
    let palette = TreePalette::default();
    let sampler = UniformRectSampler::new(query.scene.region.bbox()).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    let mut group = c.benchmark_group("admissibility");
    for n_nodes in [10, 100, 1000] {
        //grow an unchecked random tree, only the size matters here
        let mut tree = RRTree::new(
            TreeNode::new(query.start, 1.0, palette.start),
            TreeNode::new(query.goal, 1.0, palette.goal),
        );
        for _ in 0..n_nodes {
            let target = sampler.sample(&mut rng);
            let nearest = tree.nearest(&target);
            let from = tree.node(nearest).position;
            if let Some(p) = from.towards(&target, 1.5) {
                tree.add_child(nearest, TreeNode::new(p, 0.08, palette.node), palette.edge);
            }
        }
        let edges: Vec<Edge> = (0..1000)
            .filter_map(|_| {
                let a = sampler.sample(&mut rng);
                let b = a.towards(&sampler.sample(&mut rng), 1.5)?;
                Edge::new(a, b).ok()
            })
            .collect();
        group.bench_function(BenchmarkId::from_parameter(n_nodes), |b| {
            let checker = ValidityChecker::new(&query.scene, &tree);
            b.iter(|| edges.iter().filter(|e| checker.is_admissible(e)).count())
        });
    }
    group.finish();
}

