use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scroll_transition::{
    Division, DivisionConfig, EdgePolicy, StyleTarget as _, TargetRange, TransitionPlan,
    compute_intensity, sub_window_bounds,
};

#[derive(Parser, Debug)]
#[command(name = "scroll-transition", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch a plan at evenly spaced scroll positions and print every target's styles.
    Sample(SampleArgs),
    /// Evaluate a single sub-window at one scroll position.
    Eval(EvalArgs),
    /// Validate a plan and report division diagnostics.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of intervals between 0 and 1 (prints steps + 1 rows).
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Emit one JSON object per row instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Global window fraction.
    #[arg(long, default_value_t = 1.0)]
    global: f64,

    /// Comma-separated sub-window fractions.
    #[arg(long, value_delimiter = ',', default_value = "1")]
    local: Vec<f64>,

    /// Start offset.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Amplitude ceiling.
    #[arg(long, default_value_t = 1.0)]
    max: f64,

    /// First sub-window starts from peak.
    #[arg(long)]
    front_peak: bool,

    /// Last sub-window ends at peak.
    #[arg(long)]
    back_peak: bool,

    /// Local sub-window index.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Scroll fraction in [0, 1].
    #[arg(long)]
    at: f64,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_plan(path: &Path) -> anyhow::Result<TransitionPlan> {
    TransitionPlan::from_path(path).with_context(|| format!("load plan '{}'", path.display()))
}

fn report_diagnostics(plan: &TransitionPlan, divisions: &[Division]) -> usize {
    let mut count = 0;
    for (group, division) in plan.groups.iter().zip(divisions) {
        for warning in division.diagnostics() {
            tracing::warn!(group = %group.name, id = division.id().0, "{warning}");
            count += 1;
        }
    }
    count
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let plan = read_plan(&args.in_path)?;
    let (mut registry, divisions) = plan.build_registry()?;
    report_diagnostics(&plan, &divisions);

    for step in 0..=args.steps {
        let fraction = f64::from(step) / f64::from(args.steps);
        let report = registry.on_driving_signal(fraction);

        if args.json {
            let mut targets = serde_json::Map::new();
            for t in registry.targets() {
                let styles = serde_json::to_value(&t.styles).context("serialize target styles")?;
                targets.insert(t.id.clone(), styles);
            }
            let row = serde_json::json!({
                "scroll_fraction": fraction,
                "report": report,
                "targets": targets,
            });
            println!("{row}");
        } else {
            println!("@ {fraction:.3}");
            for t in registry.targets() {
                let styles: Vec<String> = scroll_transition::StyleChannel::ALL
                    .iter()
                    .filter_map(|&c| t.style(c).map(|v| format!("{}={v}", c.css_property())))
                    .collect();
                println!("  {:<16} {}", t.id, styles.join(" "));
            }
        }
    }
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let config = DivisionConfig::default()
        .global_fragment(args.global)
        .local_fragments(args.local)
        .start_fragment(args.start)
        .max_value(args.max)
        .edges(EdgePolicy {
            front_from_peak: args.front_peak,
            back_to_peak: args.back_peak,
        });
    let division = Division::new(&config, TargetRange::new(0, config.local_fragments.len())?);
    for warning in division.diagnostics() {
        tracing::warn!("{warning}");
    }

    let value = compute_intensity(args.at, &division, args.index);
    match sub_window_bounds(&division, args.index) {
        Some(b) => eprintln!("sub-window {} spans [{:.4}, {:.4}]", args.index, b.start, b.end),
        None => eprintln!("sub-window {} does not exist", args.index),
    }
    println!("{value}");
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let plan = read_plan(&args.in_path)?;
    let (registry, divisions) = plan.build_registry()?;
    let warnings = report_diagnostics(&plan, &divisions);
    eprintln!(
        "ok: {} groups, {} targets, {} warnings",
        divisions.len(),
        registry.len(),
        warnings
    );
    Ok(())
}
