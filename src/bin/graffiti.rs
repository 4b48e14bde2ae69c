use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "graffiti", version, about = "Render graffiti lettering to image files")]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame and export it.
    Render(RenderArgs),
    /// Render a preset look and export it.
    Preset(PresetArgs),
    /// Print a catalog.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Request JSON (camelCase fields); flags override its values.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[arg(long)]
    text: Option<String>,

    /// Style id, see `graffiti list styles`.
    #[arg(long)]
    style: Option<String>,

    #[arg(long)]
    fill: Option<String>,

    #[arg(long)]
    stroke: Option<String>,

    #[arg(long)]
    stroke_width: Option<f64>,

    /// Text size in percent of the layout baseline.
    #[arg(long)]
    size: Option<f64>,

    /// Rotation in degrees.
    #[arg(long)]
    rotation: Option<f64>,

    #[arg(long)]
    letter_spacing: Option<f64>,

    /// Background id, `custom` or `none`.
    #[arg(long)]
    background: Option<String>,

    /// Color for the `custom` background.
    #[arg(long)]
    background_color: Option<String>,

    /// Flat fill when the background is `none`.
    #[arg(long)]
    backdrop: Option<String>,

    #[arg(long)]
    effect: Option<String>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Small-screen layout (350x200 unless a size is given).
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct PresetArgs {
    /// Preset id, see `graffiti list presets`.
    id: String,

    /// Replace the preset text.
    #[arg(long)]
    text: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output file; the format follows the extension unless `--format` is given.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Lossy quality in (0, 1].
    #[arg(long, default_value_t = graffiti::DEFAULT_QUALITY)]
    quality: f64,

    /// Export width; the frame width when omitted.
    #[arg(long)]
    export_width: Option<u32>,

    #[arg(long)]
    export_height: Option<u32>,

    /// Fill behind the artwork in the exported file.
    #[arg(long)]
    export_background: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpg,
    Webp,
    Svg,
}

impl From<FormatChoice> for graffiti::ExportFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Png => Self::Png,
            FormatChoice::Jpg => Self::Jpeg,
            FormatChoice::Webp => Self::WebP,
            FormatChoice::Svg => Self::Svg,
        }
    }
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(value_enum)]
    what: Catalog,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Catalog {
    Styles,
    Effects,
    Backgrounds,
    Presets,
    Categories,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Preset(args) => cmd_preset(args),
        Command::List(args) => cmd_list(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_request_json(path: &Path) -> anyhow::Result<graffiti::RenderRequest> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let r = BufReader::new(f);
    let req = serde_json::from_reader(r).with_context(|| "parse request JSON")?;
    Ok(req)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut req = match &args.in_path {
        Some(path) => read_request_json(path)?,
        None => graffiti::RenderRequest::default(),
    };
    if args.compact {
        req.compact = true;
        req.surface_width = graffiti::COMPACT_SURFACE_WIDTH;
        req.surface_height = graffiti::COMPACT_SURFACE_HEIGHT;
    }
    macro_rules! set {
        ($($field:ident <- $arg:expr),* $(,)?) => {
            $(if let Some(v) = $arg { req.$field = v; })*
        };
    }
    set! {
        text <- args.text,
        style_id <- args.style,
        fill_color <- args.fill,
        stroke_color <- args.stroke,
        stroke_width <- args.stroke_width,
        size_percent <- args.size,
        rotation_deg <- args.rotation,
        letter_spacing <- args.letter_spacing,
        background_id <- args.background,
        custom_background_color <- args.background_color,
        backdrop_color <- args.backdrop,
        effect_id <- args.effect,
        surface_width <- args.width,
        surface_height <- args.height,
    }
    render_and_export(&req, &args.output)
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let preset = graffiti::preset(&args.id).with_context(|| {
        let ids: Vec<_> = graffiti::PRESETS.iter().map(|p| p.id).collect();
        format!("unknown preset '{}' (known: {})", args.id, ids.join(", "))
    })?;
    let mut req = preset.request();
    if let Some(text) = args.text {
        req.text = text;
    }
    render_and_export(&req, &args.output)
}

fn render_and_export(req: &graffiti::RenderRequest, out: &OutputArgs) -> anyhow::Result<()> {
    let config = graffiti::RendererConfig::from_env();
    let mut renderer =
        graffiti::FrameRenderer::with_config(req.surface_width, req.surface_height, config)?;
    renderer.render(req)?;

    let format = match out.format {
        Some(choice) => choice.into(),
        None => out
            .out
            .extension()
            .and_then(|e| e.to_str())
            .and_then(graffiti::ExportFormat::from_extension)
            .with_context(|| {
                format!("cannot infer format from '{}', pass --format", out.out.display())
            })?,
    };
    let options = graffiti::ExportOptions {
        format,
        quality: out.quality,
        width: out.export_width,
        height: out.export_height,
        background_color: out.export_background.clone(),
    };

    let dir = out
        .out
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let filename = out
        .out
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid output path '{}'", out.out.display()))?;
    std::fs::create_dir_all(dir).with_context(|| format!("create dir '{}'", dir.display()))?;

    let mut sink = graffiti::FsSink::new(dir);
    let image = graffiti::download_as(filename, renderer.surface(), &options, &mut sink)?;
    eprintln!(
        "wrote {} ({}x{}, {} bytes)",
        out.out.display(),
        image.width,
        image.height,
        image.bytes.len()
    );
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    use serde_json::json;

    let (rows, entries): (Vec<[String; 3]>, Vec<serde_json::Value>) = match args.what {
        Catalog::Styles => graffiti::STYLES
            .iter()
            .map(|s| {
                let row = [s.id.into(), s.display_name.into(), s.category.to_string()];
                let entry = json!({
                    "id": s.id,
                    "name": s.display_name,
                    "category": s.category,
                    "face": s.face.name,
                });
                (row, entry)
            })
            .unzip(),
        Catalog::Effects => graffiti::EFFECTS
            .iter()
            .map(|e| {
                let row = [e.id.into(), e.display_name.into(), e.description.into()];
                let entry = json!({
                    "id": e.id,
                    "name": e.display_name,
                    "category": e.category,
                    "description": e.description,
                });
                (row, entry)
            })
            .unzip(),
        Catalog::Backgrounds => graffiti::BACKGROUNDS
            .iter()
            .map(|b| {
                let row = [b.id.into(), b.display_name.into(), b.description.into()];
                let entry = json!({
                    "id": b.id,
                    "name": b.display_name,
                    "category": b.category,
                    "description": b.description,
                });
                (row, entry)
            })
            .unzip(),
        Catalog::Presets => {
            let rows = graffiti::PRESETS
                .iter()
                .map(|p| [p.id.into(), p.display_name.into(), p.style_id.into()])
                .collect();
            let entries = graffiti::PRESETS
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?;
            (rows, entries)
        }
        Catalog::Categories => graffiti::style_categories()
            .into_iter()
            .map(|c| {
                let ids: Vec<_> = graffiti::styles_in(Some(c)).map(|s| s.id).collect();
                let row = [c.label().into(), format!("{} styles", ids.len()), ids.join(", ")];
                (row, json!({ "category": c, "styles": ids }))
            })
            .unzip(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let w0 = rows.iter().map(|r| r[0].len()).max().unwrap_or(0);
    let w1 = rows.iter().map(|r| r[1].len()).max().unwrap_or(0);
    for [a, b, c] in &rows {
        println!("{a:<w0$}  {b:<w1$}  {c}");
    }
    Ok(())
}
