use dressense_motion::EntranceTimeline;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let timeline = EntranceTimeline::reference();
    let fps = 30.0;
    let frames = (timeline.duration_secs() * fps).ceil() as u32;
    for f in (0..=frames).step_by(15) {
        let kf = timeline.sample(f64::from(f) / fps);
        println!(
            "frame {f:3}: x={:7.2}vw y={:7.2}vh scale={:.3} opacity={:.2}",
            kf.x, kf.y, kf.scale, kf.opacity
        );
    }
    Ok(())
}
