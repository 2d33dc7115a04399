//! Pointer sweep demo
//!
//! Orbits a synthetic pointer around the field and reports how strongly it
//! drags and brightens the batch, then releases it and watches the glow
//! relax back to base.
//!
//! Run with: cargo run --example 02_pointer_sweep

use constellation_core::{Bounds, Engine, PointerSnapshot, SimConfig};

fn brightness(engine: &Engine) -> f32 {
    engine.particles().iter().map(|p| p.opacity).sum::<f32>() / engine.particles().len() as f32
}

fn main() {
    env_logger::init();

    let bounds = Bounds::new(800.0, 600.0);
    let mut engine = Engine::with_seed(SimConfig::default(), bounds, 42);

    println!("baseline brightness: {:.3}", brightness(&engine));

    // Orbit the pointer around the center for a few seconds' worth of ticks
    for tick in 1..=480u64 {
        let angle = tick as f32 * 0.03;
        let pointer = PointerSnapshot::at(
            bounds.width / 2.0 + angle.cos() * 180.0,
            bounds.height / 2.0 + angle.sin() * 140.0,
        );
        engine.tick(pointer);
        if tick % 120 == 0 {
            println!(
                "tick {:>3}: brightness {:.3}, {} links",
                tick,
                brightness(&engine),
                engine.connections().len()
            );
        }
    }

    // Let go of the pointer and watch the glow settle
    for _ in 0..120 {
        engine.tick(PointerSnapshot::inactive());
    }
    println!("settled brightness: {:.3}", brightness(&engine));
}
