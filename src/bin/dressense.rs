use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use dressense_motion::{
    ControlPath, INNER_RING_SPEED, KeyframeShaping, KeyframeTracks, OrbSize, OrbState,
    ParticleSample, StateTable, inner_ring, outer_ring, sample_all,
};

#[derive(Parser, Debug)]
#[command(name = "dressense", version)]
struct Cli {
    /// Log engine events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample an entrance path into keyframes (JSON).
    Keyframes(KeyframesArgs),
    /// Sample the orb particle rings at one instant (JSON).
    Orbit(OrbitArgs),
}

#[derive(Parser, Debug)]
struct KeyframesArgs {
    /// Number of intervals; `steps + 1` keyframes are produced.
    #[arg(long, default_value_t = 1000)]
    steps: u32,

    /// Control path JSON (list of `[x, y, scale]`). Defaults to the landing page path.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Opacity reaches 1 at `t = 1 / fade_in_rate`.
    #[arg(long, default_value_t = KeyframeShaping::REFERENCE_FADE_IN_RATE)]
    fade_in_rate: f64,

    /// Lower bound for the interpolated scale.
    #[arg(long, default_value_t = KeyframeShaping::REFERENCE_MIN_SCALE)]
    min_scale: f64,

    /// Emit one array per property instead of one object per keyframe.
    #[arg(long, default_value_t = false)]
    columns: bool,

    /// Output file (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OrbitArgs {
    #[arg(long, value_enum, default_value_t = StateChoice::Idle)]
    state: StateChoice,

    #[arg(long, value_enum, default_value_t = SizeChoice::Md)]
    size: SizeChoice,

    /// Seconds since the orbit loop was armed.
    #[arg(long)]
    at: f64,

    /// State table JSON overriding some or all states.
    #[arg(long)]
    states: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StateChoice {
    Idle,
    Thinking,
    Searching,
    Presenting,
    Success,
    Error,
}

impl From<StateChoice> for OrbState {
    fn from(c: StateChoice) -> Self {
        match c {
            StateChoice::Idle => Self::Idle,
            StateChoice::Thinking => Self::Thinking,
            StateChoice::Searching => Self::Searching,
            StateChoice::Presenting => Self::Presenting,
            StateChoice::Success => Self::Success,
            StateChoice::Error => Self::Error,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeChoice {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl From<SizeChoice> for OrbSize {
    fn from(c: SizeChoice) -> Self {
        match c {
            SizeChoice::Xs => Self::Xs,
            SizeChoice::Sm => Self::Sm,
            SizeChoice::Md => Self::Md,
            SizeChoice::Lg => Self::Lg,
            SizeChoice::Xl => Self::Xl,
        }
    }
}

#[derive(Serialize)]
struct OrbitOut {
    state: OrbState,
    elapsed_secs: f64,
    orbit_angular_speed: f64,
    outer: Vec<ParticleSample>,
    inner: Vec<ParticleSample>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Keyframes(args) => cmd_keyframes(args),
        Command::Orbit(args) => cmd_orbit(args),
    }
}

fn cmd_keyframes(args: KeyframesArgs) -> anyhow::Result<()> {
    let path = match &args.path {
        Some(p) => ControlPath::from_path(p)
            .with_context(|| format!("load control path '{}'", p.display()))?,
        None => ControlPath::reference_entrance(),
    };
    let shaping = KeyframeShaping::new(args.fade_in_rate, args.min_scale)?;

    let keyframes = dressense_motion::generate_keyframe_sequence_with(args.steps, &path, shaping);
    if args.columns {
        write_json(args.out.as_ref(), &KeyframeTracks::from(keyframes.as_slice()))
    } else {
        write_json(args.out.as_ref(), &keyframes)
    }
}

fn cmd_orbit(args: OrbitArgs) -> anyhow::Result<()> {
    let table = match &args.states {
        Some(p) => StateTable::from_path(p)
            .with_context(|| format!("load state table '{}'", p.display()))?,
        None => StateTable::default(),
    };
    let state = OrbState::from(args.state);
    let px = OrbSize::from(args.size).pixels();
    let speed = table.orbit_angular_speed(state);

    let (outer, inner) = if state.animates_particles() {
        let outer = sample_all(
            &outer_ring(px, dressense_motion::OUTER_RING_COUNT),
            args.at,
            speed,
        );
        let inner = if state.shows_inner_ring() {
            sample_all(
                &inner_ring(px, dressense_motion::INNER_RING_COUNT),
                args.at,
                INNER_RING_SPEED,
            )
        } else {
            Vec::new()
        };
        (outer, inner)
    } else {
        (Vec::new(), Vec::new())
    };

    write_json(
        None,
        &OrbitOut {
            state,
            elapsed_secs: args.at,
            orbit_angular_speed: speed,
            outer,
            inner,
        },
    )
}

fn write_json<T: Serialize>(out: Option<&PathBuf>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value).context("serialize JSON")?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value).context("serialize JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}
