use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glimmer::animation::TransitionController;
use glimmer::options::{Options, SwarmOptions};
use glimmer::swarm::{Formation, ParticleStore};
use glimmer::util::easing::EasingFunction;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuadraticOut;
    let _ = c.bench_function("quadratic_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn transition_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_tick");

    for count in [100usize, 1000, 2000] {
        let options = Options {
            swarm: SwarmOptions {
                particle_count: count,
                ..SwarmOptions::default()
            },
            ..Options::default()
        };
        let mut rng = StdRng::seed_from_u64(99);
        let mut store =
            ParticleStore::new(&options.swarm, &options.palette, &mut rng);
        let mut controller = TransitionController::new();
        let t0 = Instant::now();
        controller.begin(Formation::Tree, &store, &options, t0, &mut rng);
        let mid = t0 + Duration::from_millis(400);

        let _ = group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| black_box(controller.update(&mut store, mid)));
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, transition_tick_benchmark);
criterion_main!(benches);
