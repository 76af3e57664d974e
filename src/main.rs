use clap::Parser;
use folio::core::{config, router};
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio with animated routed views")]
struct Args {
    /// Path to open on startup: /, /about, /projects, /skills, /contact
    #[arg(short, long)]
    route: Option<String>,

    /// Skip entrance animations
    #[arg(long)]
    reduced_motion: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Folio starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        config::FolioConfig::default()
    });
    let resolved = config::resolve(&file_config, args.route.as_deref(), args.reduced_motion);

    // Runtime navigation is total over the declared routes; the CLI flag
    // is the one outside entry point, so it gets validated.
    if router::resolve(&resolved.start_route).is_none() {
        eprintln!(
            "unknown route {:?} — declared routes: {}",
            resolved.start_route,
            router::ROUTES
                .iter()
                .map(|r| r.path)
                .collect::<Vec<_>>()
                .join(", ")
        );
        std::process::exit(2);
    }

    tui::run(resolved)
}
