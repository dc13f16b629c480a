//! `opart` command line: list patterns or render one to PNG.
//!
//! ```text
//! opart list
//! opart render <pattern> [--count N] [--frames N] [--seed S] [--random]
//!                        [--settings FILE] [--width W] [--height H] [--out FILE]
//! ```

use opart::host::{HostSettings, Visualizer};
use opart::snapshot;
use opart::{PatternRegistry, SnapshotError};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

const USAGE: &str = "usage: opart list
       opart render <pattern> [--count N] [--frames N] [--seed S] [--random]
                              [--settings FILE] [--width W] [--height H] [--out FILE]";

#[derive(Debug, Clone, PartialEq)]
struct RenderArgs {
    pattern: String,
    count: Option<usize>,
    frames: u32,
    seed: Option<u64>,
    random: bool,
    settings: Option<PathBuf>,
    width: u32,
    height: u32,
    out: Option<PathBuf>,
}

impl RenderArgs {
    fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            count: None,
            frames: 1,
            seed: None,
            random: false,
            settings: None,
            width: 1280,
            height: 720,
            out: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    List,
    Render(RenderArgs),
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{} needs a value", flag))?;
    raw.parse()
        .map_err(|_| format!("invalid value for {}: '{}'", flag, raw))
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        Some("list") => Ok(Command::List),
        Some("render") => {
            let pattern = args.get(1).ok_or("render needs a pattern identifier")?;
            let mut render = RenderArgs::new(pattern.as_str());
            let mut rest = args[2..].iter();
            while let Some(flag) = rest.next() {
                match flag.as_str() {
                    "--count" => render.count = Some(parse_value(flag, rest.next())?),
                    "--frames" => render.frames = parse_value(flag, rest.next())?,
                    "--seed" => render.seed = Some(parse_value(flag, rest.next())?),
                    "--random" => render.random = true,
                    "--settings" => render.settings = Some(parse_value(flag, rest.next())?),
                    "--width" => render.width = parse_value(flag, rest.next())?,
                    "--height" => render.height = parse_value(flag, rest.next())?,
                    "--out" => render.out = Some(parse_value(flag, rest.next())?),
                    other => return Err(format!("unknown flag '{}'", other)),
                }
            }
            Ok(Command::Render(render))
        }
        Some(other) => Err(format!("unknown command '{}'", other)),
        None => Err("missing command".to_string()),
    }
}

fn list(registry: &PatternRegistry) {
    for pattern in registry.iter() {
        println!("{:<22}{}", pattern.id, pattern.name);
    }
}

fn render(registry: PatternRegistry, args: RenderArgs) -> Result<PathBuf, SnapshotError> {
    let mut viz = Visualizer::new(registry)?;
    if let Some(seed) = args.seed {
        viz = viz.with_seed(seed);
    }

    let mut settings = match &args.settings {
        Some(path) => HostSettings::load(path)?,
        None => HostSettings::default(),
    };
    if args.random {
        let mut rng = match args.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        settings = settings.randomized(&mut rng);
    }
    if let Some(count) = args.count {
        settings.particle_count = count;
    }
    viz.apply_settings(settings)?;
    viz.select_pattern(&args.pattern)?;

    for _ in 0..args.frames {
        viz.tick()?;
    }
    log::info!(
        "Rendered {} frame(s) of {} at t = {:.3}",
        args.frames,
        viz.pattern_id(),
        viz.clock().time()
    );

    let image = snapshot::render_visualizer(&viz, args.width, args.height)?;
    let path = args.out.unwrap_or_else(|| {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        PathBuf::from(snapshot::file_name(viz.pattern_id(), millis))
    });
    snapshot::save_png(&image, &path)?;
    Ok(path)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("opart: {e}\n{USAGE}");
        process::exit(2);
    });

    let registry = PatternRegistry::builtin();
    match command {
        Command::List => list(&registry),
        Command::Render(args) => match render(registry, args) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("opart: {e}");
                process::exit(1);
            }
        },
    }
}
