use std::time::Duration;

use clap::Subcommand;
use opptime_core::activity::resolve;
use opptime_core::format::format_hms;
use opptime_core::{OpportunityDirectory, Selection, TimerState};

use crate::context::{load_session, session_path, Context};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start timing an opportunity/activity pairing (resumes when paused)
    Start {
        /// Opportunity record id
        #[arg(long)]
        opportunity: String,
        /// Activity name from the catalog
        #[arg(long)]
        activity: String,
        /// Role; defaults to tracker.default_role
        #[arg(long)]
        role: Option<String>,
        /// Optional comment stored with the record
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Pause the running timer
    Pause,
    /// Resume a paused timer
    Resume,
    /// Stop the timer and save the time log
    Stop,
    /// Print current timer state as JSON
    Status,
    /// Show the running timer, refreshed every second, until it stops
    Watch,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Watch => watch(),
        action => {
            let mut ctx = Context::open()?;
            apply(&mut ctx, action)?;
            ctx.save_session()
        }
    }
}

fn apply(ctx: &mut Context, action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Start {
            opportunity,
            activity,
            role,
            comment,
        } => {
            let tracker_cfg = &ctx.config.tracker;
            let activity = match resolve(&tracker_cfg.activities, &activity) {
                Some(known) => known.to_string(),
                None if activity.trim().is_empty() => activity,
                None => return Err(format!("unknown activity: {activity}").into()),
            };
            let role = match role {
                Some(role) => resolve(&tracker_cfg.roles, &role)
                    .map(str::to_string)
                    .ok_or_else(|| format!("unknown role: {role}"))?,
                None => tracker_cfg.default_role.clone(),
            };
            let opportunity = opportunity.trim().to_string();
            if !opportunity.is_empty()
                && ctx.tracker.directory().lookup(&opportunity).is_none()
            {
                eprintln!("warning: opportunity {opportunity} is not in the directory");
            }

            let selection = Selection::new(opportunity, activity)
                .with_role(role)
                .with_comment(comment);
            match ctx.tracker.start(selection)? {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&ctx.tracker.session().snapshot())?),
            }
        }
        TimerAction::Pause => {
            let event = ctx.tracker.pause()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Resume => {
            let event = ctx.tracker.resume()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Stop => {
            let stopped = ctx.tracker.stop()?;
            if let Some(e) = &stopped.save_error {
                eprintln!("warning: failed to save time logs: {e}");
            }
            println!("{}", serde_json::to_string_pretty(&stopped.record)?);
            eprintln!("Saved logs: {}", ctx.tracker.log_count());
        }
        TimerAction::Status => {
            let snapshot = ctx.tracker.session().snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        TimerAction::Watch => {}
    }
    Ok(())
}

/// Print the elapsed time once a second until the session is paused or
/// stopped (by another invocation) or Ctrl-C is pressed.
fn watch() -> Result<(), Box<dyn std::error::Error>> {
    let path = session_path()?;
    let session = load_session(&path);
    let Some(token) = session.tick_token() else {
        let state = match session.state() {
            TimerState::Paused => "paused",
            _ => "idle",
        };
        println!("timer is {state}");
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let current = load_session(&path);
                    match current.tick_with_at(&token, chrono::Local::now()) {
                        Some(elapsed) => println!("{}", format_hms(elapsed)),
                        None => {
                            println!("timer is no longer running");
                            break;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }
    });
    Ok(())
}
