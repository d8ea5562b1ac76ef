use anyhow::Context;
use clap::{Parser, Subcommand};
use secondbrain_home::{HomePage, HomePageRenderer, RenderConfig, RenderReport};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "secondbrain-home", version, about = "Render the Second Brain home page")]
struct Cli {
    /// Directory holding the logo and demo assets
    #[arg(long, global = true)]
    asset_dir: Option<PathBuf>,

    /// JSON render configuration; flags given here override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page to a file or stdout
    Render {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Emit the bare fragments instead of a full HTML document
        #[arg(long)]
        fragments: bool,

        /// Print a JSON render report to stderr
        #[arg(long)]
        report: bool,
    },
    /// Serve the page over HTTP
    #[cfg(feature = "serve")]
    Serve {
        #[arg(long, default_value = "127.0.0.1:8501")]
        addr: String,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = &cli.asset_dir {
        config.asset_dir = dir.clone();
    }
    Ok(config)
}

fn render(renderer: &HomePageRenderer, out: Option<PathBuf>, fragments: bool, report: bool) -> anyhow::Result<()> {
    let assets = renderer.load_assets().context("failed to load page assets")?;
    let page = HomePage::assemble(&assets.logo, &assets.demo);
    let output = if fragments {
        page.to_markup()
    } else {
        renderer.document(&page)
    };

    match &out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(output.as_bytes())?;
            lock.flush()?;
        }
    }

    if report {
        let report = RenderReport::new(&assets, &page, &output);
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let renderer = HomePageRenderer::new(config)?;

    match cli.command {
        Command::Render { out, fragments, report } => render(&renderer, out, fragments, report),
        #[cfg(feature = "serve")]
        Command::Serve { addr } => {
            secondbrain_home::serve::serve(&addr, renderer)
                .with_context(|| format!("failed to serve on {}", addr))?;
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("secondbrain-home: {:#}", e);
        std::process::exit(1);
    }
}
