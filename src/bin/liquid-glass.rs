use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use liquid_glass::{
    ConfigResolver, DisplacementImageBuilder, EffectConfig, EffectOptions, EffectSetup,
    FALLBACK_SIZE, FilterGraph, GlassEffect, InstanceToken, Size, effective_size,
    rasterize_displacement, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "liquid-glass", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved effect config as JSON.
    Resolve(OptionArgs),
    /// Print the displacement map SVG (or its data URI).
    Map(MapArgs),
    /// Print the bound filter scaffold markup.
    Filter(FilterArgs),
    /// Write a PNG preview of the displacement map.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct OptionArgs {
    /// Options JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Option assignment `key=value`; repeatable, applied after `--config`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Preset name.
    #[arg(long)]
    preset: Option<String>,

    /// Preset table.
    #[arg(long, value_enum, default_value_t = TableChoice::Glass)]
    table: TableChoice,
}

#[derive(Args, Debug)]
struct SizeArgs {
    /// Measured container width in px.
    #[arg(long)]
    width: Option<f64>,

    /// Measured container height in px.
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Args, Debug)]
struct MapArgs {
    #[command(flatten)]
    options: OptionArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Print the `data:image/svg+xml` URI instead of the document.
    #[arg(long)]
    uri: bool,
}

#[derive(Args, Debug)]
struct FilterArgs {
    #[command(flatten)]
    options: OptionArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Instance token used for filter ids.
    #[arg(long, default_value = "lg")]
    id: String,

    /// Also print the container's inline style.
    #[arg(long)]
    css: bool,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    options: OptionArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per map unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TableChoice {
    Glass,
    Navbar,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Map(args) => cmd_map(args),
        Command::Filter(args) => cmd_filter(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolver(choice: TableChoice) -> ConfigResolver {
    match choice {
        TableChoice::Glass => ConfigResolver::glass(),
        TableChoice::Navbar => ConfigResolver::navbar(),
    }
}

fn load_options(args: &OptionArgs) -> anyhow::Result<EffectOptions> {
    let mut options = match &args.config {
        Some(path) => EffectOptions::from_path(path)?,
        None => EffectOptions::default(),
    };
    options
        .apply_assignments(&args.set)
        .context("parse --set")?;
    if let Some(preset) = &args.preset {
        options.set("preset", preset)?;
    }
    Ok(options)
}

fn resolved(args: &OptionArgs) -> anyhow::Result<(EffectOptions, EffectConfig)> {
    let options = load_options(args)?;
    let r = resolver(args.table);
    let preset = options
        .preset
        .clone()
        .unwrap_or_else(|| r.table().default_name().to_string());
    let config = r.resolve(&preset, &options.overrides());
    Ok((options, config))
}

fn measured(size: &SizeArgs) -> Option<Size> {
    if size.width.is_none() && size.height.is_none() {
        return None;
    }
    Some(Size::new(
        size.width.unwrap_or(FALLBACK_SIZE.width),
        size.height.unwrap_or(FALLBACK_SIZE.height),
    ))
}

fn cmd_resolve(args: OptionArgs) -> anyhow::Result<()> {
    let (_, config) = resolved(&args)?;
    let json = serde_json::to_string_pretty(&config).context("serialize config")?;
    println!("{json}");
    Ok(())
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let (_, config) = resolved(&args.options)?;
    let (size, _) = effective_size(&config, measured(&args.size));
    let image = DisplacementImageBuilder::build(&config, size.width, size.height);
    if args.uri {
        println!("{}", image.uri());
    } else {
        println!("{}", image.document());
    }
    Ok(())
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let (options, _) = resolved(&args.options)?;
    let token = InstanceToken::new(args.id)?;
    let container = measured(&args.size).unwrap_or(FALLBACK_SIZE);
    let setup = EffectSetup {
        token,
        ..EffectSetup::with_resolver(resolver(args.options.table))
    };
    let effect = GlassEffect::create(
        &container,
        options,
        setup,
        |ids| FilterGraph::new(ids.clone()),
        Duration::ZERO,
    );
    println!("{}", effect.filter_markup());
    if args.css {
        println!("{}", effect.container_style().to_css());
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (_, config) = resolved(&args.options)?;
    let (size, _) = effective_size(&config, measured(&args.size));
    let image = DisplacementImageBuilder::build(&config, size.width, size.height);
    let map = rasterize_displacement(&image, args.scale)?;
    write_png(&map, &args.out)?;
    eprintln!("wrote {} ({}x{})", args.out.display(), map.width, map.height);
    Ok(())
}
