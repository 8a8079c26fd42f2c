use super::surfaces::{
    ConsoleNavigator, ConsolePlayer, ConsoleRecordingPanel, ConsoleReviewPage, ConsoleSidebar,
};
use crate::config::Config;
use crate::playback::{MediaElement, PlaybackController, SimulatedMedia};
use crate::recording::{RecordingController, RecordingError, RecordingEvent};
use crate::sidebar::SidebarToggle;
use crate::validation::{Decision, LogSink, ValidationController};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};
use url::Url;

/// Page location used when none is given for the review page
pub const DEFAULT_PAGE_URL: &str = "http://localhost/validation.html";

/// How often the simulated video reports its position
const TIME_UPDATE_PERIOD: Duration = Duration::from_millis(250);

type Input = Lines<BufReader<Stdin>>;

fn stdin_commands() -> Input {
    BufReader::new(io::stdin()).lines()
}

/// Next non-empty line, split into a lowercase verb and its argument
async fn next_command<R>(input: &mut Lines<R>) -> Result<Option<(String, String)>>
where
    R: AsyncBufRead + Unpin,
{
    while let Some(line) = input.next_line().await.context("Failed to read command")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (verb, arg) = line.split_once(' ').unwrap_or((line, ""));
        return Ok(Some((verb.to_lowercase(), arg.trim().to_string())));
    }
    Ok(None)
}

fn unknown(verb: &str, known: &[&str]) {
    println!("Unknown command '{}'. Try: {}", verb, known.join(", "));
}

pub async fn run_dashboard(sidebar_hidden: bool) -> Result<()> {
    let mut sidebar = SidebarToggle::attach(ConsoleSidebar::new(sidebar_hidden));
    let mut input = stdin_commands();

    while let Some((verb, _)) = next_command(&mut input).await? {
        match verb.as_str() {
            "menu" => sidebar.toggle(),
            "quit" => break,
            other => unknown(other, &["menu", "quit"]),
        }
    }

    Ok(())
}

pub async fn run_live_cam(config: &Config, sidebar_hidden: bool) -> Result<()> {
    const COMMANDS: &[&str] = &["menu", "start", "pause", "save", "finish", "status", "quit"];

    let mut sidebar = SidebarToggle::attach(ConsoleSidebar::new(sidebar_hidden));
    let recording = RecordingController::attach(ConsoleRecordingPanel, &config.recording);
    let mut input = stdin_commands();

    while let Some((verb, _)) = next_command(&mut input).await? {
        let event = match verb.as_str() {
            "menu" => {
                sidebar.toggle();
                continue;
            }
            "status" => {
                let snapshot = recording.snapshot().await?;
                println!("{}", serde_json::to_string(&snapshot)?);
                continue;
            }
            "quit" => break,
            "start" => RecordingEvent::Start,
            "pause" | "resume" => RecordingEvent::PauseResume,
            "save" => RecordingEvent::Save,
            "finish" => RecordingEvent::Finish,
            other => {
                unknown(other, COMMANDS);
                continue;
            }
        };

        if let Err(e) = recording.send(event).await {
            // The button for a rejected event is hidden on a real page
            match e.downcast_ref::<RecordingError>() {
                Some(rejected) => println!("Not available: {}", rejected),
                None => return Err(e),
            }
        }
    }

    recording.detach().await
}

pub async fn run_room_video(config: &Config, sidebar_hidden: bool) -> Result<()> {
    const COMMANDS: &[&str] = &["menu", "play", "click-video", "skip", "quit"];

    let mut sidebar = SidebarToggle::attach(ConsoleSidebar::new(sidebar_hidden));
    let media = SimulatedMedia::new(config.playback.media_duration_secs);
    let mut player = PlaybackController::attach(media, ConsolePlayer::default(), &config.playback);
    player.on_loaded_metadata();

    let mut input = stdin_commands();
    let mut updates = tokio::time::interval(TIME_UPDATE_PERIOD);
    let mut was_playing = false;

    loop {
        tokio::select! {
            cmd = next_command(&mut input) => {
                let Some((verb, _)) = cmd? else { break };
                match verb.as_str() {
                    "menu" => sidebar.toggle(),
                    "play" | "click-video" => player.toggle_play_pause(),
                    "skip" => {
                        player.skip_forward();
                        player.on_time_update();
                    }
                    "quit" => break,
                    other => unknown(other, COMMANDS),
                }
            }
            _ = updates.tick() => {
                let playing = !player.media().is_paused();
                if playing || was_playing {
                    player.on_time_update();
                }
                was_playing = playing;
            }
        }
    }

    Ok(())
}

pub async fn run_validation(config: &Config, page_url: &str) -> Result<()> {
    const COMMANDS: &[&str] = &["comment <text>", "accept", "reject", "image-error", "quit"];

    let location =
        Url::parse(page_url).with_context(|| format!("Invalid page URL: {}", page_url))?;
    let mut page = ValidationController::attach(
        &location,
        ConsoleReviewPage::default(),
        Arc::new(LogSink),
        Arc::new(ConsoleNavigator),
        &config.validation,
    )?;
    let mut input = stdin_commands();

    while let Some((verb, arg)) = next_command(&mut input).await? {
        let decision = match verb.as_str() {
            "comment" => {
                page.surface_mut().set_comments(&arg);
                continue;
            }
            "image-error" => {
                page.on_image_error();
                continue;
            }
            "quit" => break,
            "accept" => Decision::Accepted,
            "reject" => Decision::Rejected,
            other => {
                unknown(other, COMMANDS);
                continue;
            }
        };

        if !page.submit(decision).await {
            println!("Decision already recorded");
            continue;
        }

        if let Some(redirect) = page.take_redirect() {
            if let Err(e) = redirect.await {
                warn!("Redirect task failed: {}", e);
            }
            info!("Left review page for {}", page.record().id);
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_next_command_splits_verb_and_argument() -> Result<()> {
        let mut input = BufReader::new(&b"  Comment  looks good \n\n   \nSTART\n"[..]).lines();

        assert_eq!(
            next_command(&mut input).await?,
            Some(("comment".to_string(), "looks good".to_string()))
        );
        assert_eq!(
            next_command(&mut input).await?,
            Some(("start".to_string(), String::new()))
        );
        assert_eq!(next_command(&mut input).await?, None);
        Ok(())
    }
}
