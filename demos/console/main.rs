//! Bezel console demo: replays a scripted editing session without a window.
//!
//! Usage:
//! ```text
//! cargo run --example console
//! RUST_LOG=bezel=debug cargo run --example console
//! ```
//!
//! Script events mirror the editor's mouse bindings:
//! left click pushes a point, right click pops, middle click toggles the
//! subdivision animation.

use bezel::math::Point3;
use bezel::{BezelError, CurveSession, SessionConfig};

enum Event {
    Left(f64, f64),
    Right,
    Middle,
    Frames(usize),
}

fn main() -> Result<(), BezelError> {
    // Default: WARN for everything, INFO for bezel.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("console=info".parse().unwrap_or_default())
        .add_directive("bezel=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = CurveSession::new(SessionConfig {
        sample_count: 10,
        step_delta: 0.05,
        ..SessionConfig::default()
    })?;

    let script = [
        Event::Left(100.0, 800.0),
        Event::Left(100.0, 800.0),
        Event::Left(300.0, 200.0),
        Event::Left(700.0, 200.0),
        Event::Left(900.0, 800.0),
        Event::Left(500.0, 900.0),
        Event::Right,
        Event::Middle,
        Event::Frames(20),
        Event::Middle,
        Event::Frames(5),
    ];

    for event in script {
        match event {
            Event::Left(x, y) => {
                let accepted = session.push(Point3::new(x, y, 0.0));
                tracing::info!(x, y, accepted, "left click");
            }
            Event::Right => {
                let removed = session.pop();
                tracing::info!(removed, "right click");
            }
            Event::Middle => {
                session.animator_mut().toggle();
                tracing::info!(state = ?session.animator().state(), "middle click");
            }
            Event::Frames(count) => {
                for _ in 0..count {
                    session.advance();
                }
            }
        }
    }

    println!("t = {:.3}", session.animator().t());
    for (depth, level) in session.subdivision().iter().enumerate() {
        println!("level {depth}: {}", format_points(level));
    }
    println!("curve: {}", format_points(&session.curve()?));
    Ok(())
}

fn format_points(points: &[Point3]) -> String {
    points
        .iter()
        .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
