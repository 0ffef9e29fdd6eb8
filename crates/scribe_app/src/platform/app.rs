use std::path::PathBuf;

use anyhow::Context;
use scribe_core::AppViewModel;
use scribe_engine::{ClientContext, Session};
use scribe_logging::{scribe_info, scribe_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::logging;
use super::ui::commands::{parse_line, Command, HELP_TEXT};
use super::ui::render::render_changes;

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    // The log destination lives in the config, so read it before logging exists.
    let loaded = config::load_config(&config_path);
    let destination = match &loaded {
        Ok(Some(config)) => config.log_destination,
        _ => Default::default(),
    };
    logging::initialize(destination);

    let config = match loaded {
        Ok(Some(config)) => {
            scribe_info!("Loaded configuration from {:?}", config_path);
            config
        }
        Ok(None) => {
            scribe_info!("No configuration at {:?}; using defaults", config_path);
            AppConfig::default()
        }
        Err(err) => {
            scribe_warn!("{:#}; using defaults", err);
            eprintln!("Warning: {err:#}; using defaults");
            AppConfig::default()
        }
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(event_loop(config))
}

enum Event {
    Line(Option<String>),
    Progress,
}

async fn event_loop(config: AppConfig) -> anyhow::Result<()> {
    scribe_info!(
        "Using backend {} (extract {}, outline {})",
        config.backend.base_url,
        config.backend.extract_path,
        config.backend.outline_path
    );
    let context = ClientContext::from_settings(config.backend, config.clipboard, config.session)
        .context("invalid backend settings")?;
    let mut session = Session::new(context);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_view: Option<AppViewModel> = None;

    println!("{HELP_TEXT}");

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line.context("failed to read input")?),
            _ = session.process_next(), if session.pending() > 0 => Event::Progress,
        };

        match event {
            Event::Line(None) => {
                // Input closed: let in-flight work finish so its result is shown.
                while session.process_next().await {
                    render(&mut session, &mut last_view);
                }
                break;
            }
            Event::Line(Some(line)) => match parse_line(&line) {
                Command::Quit => break,
                Command::Help => println!("{HELP_TEXT}"),
                command => {
                    for msg in command.into_msgs() {
                        session.dispatch(msg);
                    }
                }
            },
            Event::Progress => {}
        }
        render(&mut session, &mut last_view);
    }

    if session.pending() > 0 {
        scribe_info!("Exiting with {} task(s) still running", session.pending());
    }
    Ok(())
}

fn render(session: &mut Session, last_view: &mut Option<AppViewModel>) {
    if !session.consume_dirty() {
        return;
    }
    let view = session.view();
    for line in render_changes(last_view.as_ref(), &view) {
        println!("{line}");
    }
    *last_view = Some(view);
}
