//! Integration tests for the engine pipeline
//!
//! These tests drive the full store-simulator-engine pipeline the way the
//! application shell does:
//! 1. Long seeded runs hold the position and opacity invariants every tick
//! 2. Pointer interaction boosts and releases opacity through the facade
//! 3. Resize and control-surface calls regenerate atomically mid-run

use constellation_core::{Bounds, Engine, PointerSnapshot, SimConfig, MIN_OPACITY};

const BOUNDS: Bounds = Bounds { width: 800.0, height: 600.0 };

fn seeded_engine() -> Engine {
    Engine::with_seed(SimConfig::default(), BOUNDS, 1234)
}

/// Every tick of a long run keeps positions in bounds and opacity clamped
#[test]
fn test_long_run_holds_invariants() {
    let mut engine = seeded_engine();
    for tick in 0..600 {
        // Pointer sweeps across the surface for half the run
        let pointer = if tick % 2 == 0 {
            PointerSnapshot::at((tick % 800) as f32, 300.0)
        } else {
            PointerSnapshot::inactive()
        };
        engine.tick(pointer);

        for p in engine.particles() {
            assert!(
                BOUNDS.contains(p.position),
                "tick {}: particle escaped to {:?}",
                tick,
                p.position
            );
            assert!(
                p.opacity >= MIN_OPACITY && p.opacity <= 1.0,
                "tick {}: opacity {} out of range",
                tick,
                p.opacity
            );
        }
        for c in engine.connections() {
            assert!(c.a < engine.particles().len());
            assert!(c.b < engine.particles().len());
            assert!(c.distance < engine.config().max_link_distance);
        }
    }
    assert_eq!(engine.tick_index(), 600);
}

/// The damping factor keeps pointer-injected energy bounded over a long,
/// pointer-heavy run
#[test]
fn test_pointer_energy_stays_bounded() {
    let mut engine = seeded_engine();
    for tick in 0..2000 {
        let angle = tick as f32 * 0.05;
        let pointer =
            PointerSnapshot::at(400.0 + angle.cos() * 200.0, 300.0 + angle.sin() * 150.0);
        engine.tick(pointer);
    }
    for p in engine.particles() {
        assert!(p.speed() < 50.0, "runaway speed {}", p.speed());
    }
}

/// A mid-run resize swaps in a full batch sized to the new bounds
#[test]
fn test_resize_mid_run_is_atomic() {
    let mut engine = seeded_engine();
    for _ in 0..100 {
        engine.tick(PointerSnapshot::inactive());
    }
    let new_bounds = Bounds::new(400.0, 300.0);
    engine.resize(new_bounds);

    assert_eq!(engine.particles().len(), engine.config().particle_count);
    for p in engine.particles() {
        assert!(new_bounds.contains(p.position));
    }
    // Stale connections from the old batch are gone until the next tick
    assert!(engine.connections().is_empty());

    engine.tick(PointerSnapshot::inactive());
    for p in engine.particles() {
        assert!(new_bounds.contains(p.position));
    }
}

/// Lowering the count through the control surface mirrors the small-screen
/// profile the shell applies
#[test]
fn test_small_surface_profile() {
    let mut engine = seeded_engine();
    engine.set_particle_count(60);
    engine.set_pointer_radius(100.0);

    assert_eq!(engine.particles().len(), 60);
    assert_eq!(engine.config().pointer_radius, 100.0);

    // A pointer just outside the reduced radius no longer boosts opacity
    let lone = engine.particles()[0];
    engine.tick(PointerSnapshot::at(lone.position.x + 120.0, lone.position.y));
    let after = engine.particles()[0];
    assert!(
        after.opacity <= after.base_opacity + engine.config().twinkle_amplitude + 1e-6,
        "opacity {} exceeds base {} plus twinkle",
        after.opacity,
        after.base_opacity
    );
}

/// Pause during a pointer sweep freezes everything; resume picks up where
/// the run left off
#[test]
fn test_pause_resume_round_trip() {
    let mut engine = seeded_engine();
    for _ in 0..50 {
        engine.tick(PointerSnapshot::at(100.0, 100.0));
    }
    let frozen_tick = engine.tick_index();
    let frozen = engine.particles().to_vec();

    engine.pause();
    for _ in 0..25 {
        engine.tick(PointerSnapshot::at(500.0, 500.0));
    }
    assert_eq!(engine.tick_index(), frozen_tick);
    assert_eq!(engine.particles(), frozen.as_slice());

    engine.resume();
    engine.tick(PointerSnapshot::inactive());
    assert_eq!(engine.tick_index(), frozen_tick + 1);
}

/// Connection opacity never exceeds the configured scale
#[test]
fn test_connection_opacity_bounded_by_scale() {
    let mut engine = seeded_engine();
    for _ in 0..100 {
        engine.tick(PointerSnapshot::inactive());
        for c in engine.connections() {
            assert!(c.opacity <= engine.config().connection_opacity + 1e-6);
            assert!(c.opacity >= 0.0);
        }
    }
}
