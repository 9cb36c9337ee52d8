use anyhow::{Context, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use metrogen::config::{GeneratorConfig, Mode};
use metrogen::generator::Generator;
use metrogen::logging::{self, LogLevel};
use metrogen::{city, metromap, svg};
use std::fs;
use std::path::{Path, PathBuf};

/// Generates a batch of metro planning instances as `.city` files.
#[derive(Parser, Debug)]
struct Cli {
    /// Grid width N (columns).
    #[clap(long, short = 'n')]
    width: Option<usize>,
    /// Grid height M (rows).
    #[clap(long, short = 'm')]
    height: Option<usize>,
    /// Number of lines K.
    #[clap(long, short = 'k')]
    lines: Option<usize>,
    /// Turn budget J per line.
    #[clap(long, short = 'j')]
    max_turns: Option<usize>,
    /// Number of popular cells P (scenario 2 when > 0).
    #[clap(long, short = 'p')]
    popular: Option<usize>,
    #[clap(long, value_enum)]
    mode: Option<Mode>,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// JSON config file. Flags given on the command line override its fields.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Number of instances to generate.
    #[clap(long, short = 'c', default_value_t = 1)]
    count: usize,
    #[clap(long, short = 'o', default_value = "instances")]
    out_dir: PathBuf,
    /// File name prefix; files are named `<prefix>_<index>.city`.
    #[clap(long, default_value = "instance")]
    prefix: String,
    /// Also write the constructed solution as `.metromap` for sat instances.
    #[clap(long, default_value_t = false)]
    witness: bool,
    /// Also write an `.svg` rendering.
    #[clap(long, default_value_t = false)]
    svg: bool,
    /// Also write the full instance (routes and label) as `.json`.
    #[clap(long, default_value_t = false)]
    json: bool,
    #[clap(long, value_enum, default_value = "info")]
    log_level: LogLevel,
    #[clap(long, default_value_t = false)]
    log_timestamp: bool,
}

impl Cli {
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Cannot read {}", path.display()))?;
                GeneratorConfig::from_json(&text)?
            }
            None => GeneratorConfig::default(),
        };
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.lines {
            config.lines = v;
        }
        if let Some(v) = self.max_turns {
            config.max_turns = v;
        }
        if let Some(v) = self.popular {
            config.popular = v;
        }
        if let Some(v) = self.mode {
            config.mode = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn write(dir: &Path, stem: &str, ext: &str, content: &str) -> anyhow::Result<()> {
    let path = dir.join(format!("{stem}.{ext}"));
    fs::write(&path, content).with_context(|| format!("Cannot write {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logger(args.log_level, args.log_timestamp)?;
    if args.count == 0 {
        bail!("count must be at least 1");
    }

    let config = args.generator_config()?;
    let mut generator = Generator::new(config)?;
    log::info!(
        "gen_city: config={} seed={} count={}",
        serde_json::to_string(generator.config())?,
        generator.seed(),
        args.count
    );

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Cannot create {}", args.out_dir.display()))?;

    let pb = ProgressBar::new(args.count as u64);
    pb.set_style(ProgressStyle::with_template(
        "{bar:40} {pos}/{len} [{elapsed_precise}] {msg}",
    )?);
    for i in 0..args.count {
        let stem = format!("{}_{:03}", args.prefix, i + 1);
        let instance = generator
            .generate()
            .with_context(|| format!("Failed to generate {stem} ({} of {})", i + 1, args.count))?;
        write(&args.out_dir, &stem, "city", &city::render(&instance))?;
        if args.witness {
            match metromap::render_witness(&instance) {
                Some(text) => write(&args.out_dir, &stem, "metromap", &text)?,
                None if !instance.popular.is_empty() => log::info!(
                    "gen_city: {stem} skips the witness, its paths miss the popular cells"
                ),
                None => log::debug!("gen_city: {stem} has unrouted lines, no witness"),
            }
        }
        if args.svg {
            write(&args.out_dir, &stem, "svg", &svg::render(&instance))?;
        }
        if args.json {
            write(
                &args.out_dir,
                &stem,
                "json",
                &serde_json::to_string_pretty(&instance)?,
            )?;
        }
        pb.set_message(stem);
        pb.inc(1);
    }
    pb.finish_and_clear();
    log::info!(
        "gen_city: wrote {} instances to {}",
        args.count,
        args.out_dir.display()
    );
    Ok(())
}
