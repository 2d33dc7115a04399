//! Headless field demo
//!
//! Steps a seeded engine without a window and prints proximity-graph
//! statistics, which is handy for eyeballing how link density evolves.
//!
//! Run with: cargo run --example 01_headless_field

use constellation_core::{Bounds, Engine, PointerSnapshot, SimConfig};

fn main() {
    env_logger::init();

    let mut engine = Engine::with_seed(SimConfig::default(), Bounds::new(800.0, 600.0), 7);
    println!(
        "field: {} particles over {:.0}x{:.0}",
        engine.particles().len(),
        engine.bounds().width,
        engine.bounds().height
    );

    for tick in 1..=600u64 {
        engine.tick(PointerSnapshot::inactive());
        if tick % 100 == 0 {
            let links = engine.connections().len();
            let avg_speed: f32 = engine.particles().iter().map(|p| p.speed()).sum::<f32>()
                / engine.particles().len() as f32;
            let avg_link_opacity: f32 = if links > 0 {
                engine.connections().iter().map(|c| c.opacity).sum::<f32>() / links as f32
            } else {
                0.0
            };
            println!(
                "tick {:>4}: {:>4} links, avg speed {:.3} px/tick, avg link opacity {:.3}",
                tick, links, avg_speed, avg_link_opacity
            );
        }
    }
}
