mod app;
mod auth;
mod config;
mod error;
mod filter;
mod handler;
mod input;
mod logger;
mod model;
mod text_edit;
mod theme;
mod ui;
mod update;
mod vcs;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use app::{App, FocusedPanel, SessionConfig};
use filter::FileFilter;
use handler::{
    handle_branches_action, handle_commits_action, handle_files_action, handle_prompt_action,
};
use input::map_key_to_action;
use logger::SessionLogger;
use theme::Theme;
use update::UpdateCheckResult;
use vcs::git::GitBackend;

fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;

    if let UpdateCheckResult::UpdateAvailable { current, latest } = update::check_for_updates() {
        println!("A new version of stashly is available: {latest} (you are on {current})");
    }

    // Credential resolution and repository discovery are fatal before any
    // UI is shown: a session cannot start against a broken backend.
    let credential = match auth::resolve_credential() {
        Ok(credential) => credential,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let backend = match GitBackend::discover(credential) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("\nMake sure you run stashly inside a git repository.");
            std::process::exit(1);
        }
    };

    let logger = match &config.log_file {
        Some(path) => SessionLogger::to_file(path)?,
        None => SessionLogger::disabled(),
    };

    let filter = FileFilter::new(
        config.filter.include.clone(),
        config.filter.exclude.clone(),
        config.filter.include_pattern.as_deref(),
        config.filter.exclude_pattern.as_deref(),
    )?;

    let session_config = SessionConfig {
        theme: Theme::from_name(config.theme.as_deref()),
        filter,
        commit_limit: config.commit_limit(),
    };

    let mut app = match App::new(Box::new(backend), logger, session_config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Restore the terminal even if we panic mid-render.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop: one input event at a time; backend calls block the loop
    // for their duration.
    loop {
        app.ensure_diff();

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            let action = map_key_to_action(key, app.focus, app.modal.is_some());

            if app.modal.is_some() {
                handle_prompt_action(&mut app, action);
            } else {
                match app.focus {
                    FocusedPanel::Files => handle_files_action(&mut app, action),
                    FocusedPanel::Commits => handle_commits_action(&mut app, action),
                    FocusedPanel::Branches => handle_branches_action(&mut app, action),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
