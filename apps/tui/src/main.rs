use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::info;

use year_wrapped::app::App;
use year_wrapped::cli::CliArgs;
use year_wrapped::config::AppConfig;
use year_wrapped::data::TIMELINE;
use year_wrapped::domain::{resolve_month, SlideId};
use year_wrapped::{event, logging, terminal};

/// Where the viewer should land, resolved from the command line.
enum StartAt {
    Landing,
    Slide(SlideId),
    Month(usize),
}

fn start_at(args: &CliArgs) -> Result<StartAt> {
    if let Some(month) = &args.month {
        return Ok(StartAt::Month(resolve_month(&TIMELINE, month)?));
    }
    if let Some(slide) = &args.slide {
        return Ok(StartAt::Slide(SlideId::resolve(slide)?));
    }
    Ok(StartAt::Landing)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = AppConfig::from_env().wrap_err("invalid configuration")?;
    if args.debug {
        logging::init(&config)?;
    }

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(args.json);
    }

    let start = start_at(&args)?;
    let mut app = App::new(config);
    match start {
        StartAt::Landing => {}
        StartAt::Slide(slide) => app.open_slide(slide),
        StartAt::Month(month) => app.open_month(month),
    }
    info!(stage = ?app.stage, slide = ?app.current_slide(), "starting viewer");

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
