use criterion::{criterion_group, criterion_main, Criterion};
use gradual_animation::{Shared, TickClock, TweenRegistry};

fn advance_thousand_float_tweens(c: &mut Criterion) {
    let clock = TickClock::new();
    let mut registry = TweenRegistry::new();
    let values: Vec<_> = (0..1_000).map(|i| Shared::new(i as f32)).collect();
    for value in &values {
        registry
            .spawn(value.clone(), 0.0, &clock, i64::MAX)
            .expect("valid tween");
    }

    c.bench_function("advance_all_1000_f32", |b| {
        b.iter(|| {
            clock.advance();
            registry.advance_all()
        });
    });
}

fn churn_short_lived_tweens(c: &mut Criterion) {
    let clock = TickClock::new();
    let mut registry = TweenRegistry::new();
    let value = Shared::new(false);

    c.bench_function("spawn_and_reclaim_bool", |b| {
        b.iter(|| {
            registry
                .spawn(value.clone(), true, &clock, 1)
                .expect("valid tween");
            clock.advance();
            registry.advance_all()
        });
    });
}

criterion_group!(benches, advance_thousand_float_tweens, churn_short_lived_tweens);
criterion_main!(benches);
