use anyhow::Context;
use clap::Parser;
use gradual_animation::{make_tween, GradualValue, TweenRegistry};
use gradual_core::{Shared, Tick, TickClock};

/// Drive two tweens through a simulated 60 fps frame loop and print samples.
#[derive(Debug, Parser)]
#[command(name = "gradual-demo", version)]
struct Options {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 200)]
    frames: Tick,

    /// Print a sample every N frames.
    #[arg(long, default_value_t = 20)]
    report_every: Tick,

    /// Target for the float value `x` (starts at 0).
    #[arg(long, default_value_t = 100.0)]
    x_target: f32,

    /// Ticks `x` takes to reach its target.
    #[arg(long, default_value_t = 120)]
    x_duration: Tick,

    /// Starting value for the integer `y`.
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    y_start: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y_target: i32,

    #[arg(long, default_value_t = 60)]
    y_duration: Tick,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = Options::parse();
    let report_every = options.report_every.max(1);

    let clock = TickClock::new();
    let mut registry = TweenRegistry::new();
    let x = Shared::new(0.0f32);
    let y = Shared::new(GradualValue::I32(options.y_start));

    registry
        .spawn(x.clone(), options.x_target, &clock, options.x_duration)
        .context("starting tween for x")?;
    make_tween(
        &mut registry,
        &y,
        GradualValue::I32(options.y_target),
        &clock,
        options.y_duration,
    )
    .context("starting tween for y")?;

    log::info!(
        "simulating {} frames with {} tweens",
        options.frames,
        registry.len()
    );

    while clock.now() < options.frames {
        registry.advance_all();
        if clock.now() % report_every == 0 {
            let y = match y.get() {
                GradualValue::I32(value) => value,
                other => anyhow::bail!("y changed type to {}", other.type_name()),
            };
            println!("t={}  x={}  y={}", clock.now(), x.get(), y);
        }
        clock.advance();
    }

    log::info!("{} tweens still registered", registry.len());
    Ok(())
}
