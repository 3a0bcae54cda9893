use dressense_motion::{OrbSize, OrbState, OrbitAnimation, OrbitTicker, StateTable, TickerOpts};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let anim = OrbitAnimation::new(OrbSize::Lg.pixels(), OrbState::Idle, StateTable::default());
    let (ticker, frames) = OrbitTicker::spawn(anim, TickerOpts::default())?;

    for (i, snap) in frames.iter().take(90).enumerate() {
        if i == 30 {
            ticker.set_state(OrbState::Thinking)?;
        }
        if i % 15 == 0 {
            let p = &snap.outer[0];
            println!(
                "{:>10} t={:.3}s p0=({:6.2}, {:6.2}) scale={:.2} inner={}",
                snap.state.to_string(),
                snap.elapsed_secs,
                p.x,
                p.y,
                p.scale,
                snap.inner.len()
            );
        }
    }

    let anim = ticker.stop()?;
    println!("stopped in state {}", anim.state());
    Ok(())
}
