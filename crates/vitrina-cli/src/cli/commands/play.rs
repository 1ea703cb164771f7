//! Headless showcase playback.
//!
//! Runs the title typewriters and the code demo against stdout, honoring
//! the same engines and delays as the TUI. `--json` swaps the rendered
//! text for one JSON object per line; `--quick` collapses every delay so
//! scripted runs finish immediately.

use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tokio::sync::mpsc;
use vitrina_core::script::sequenced::{DemoEvent, SequencedTyper, SequencedTyperOptions};
use vitrina_core::script::typewriter::{Typewriter, TypewriterOptions};
use vitrina_core::showcase::ShowSpec;

pub struct PlayOptions {
    pub json: bool,
    pub quick: bool,
}

const QUICK_DELAY: Duration = Duration::from_millis(1);

pub async fn run(show: &ShowSpec, options: PlayOptions) -> Result<()> {
    for title in &show.hero_titles {
        play_title(title, &options).await?;
    }
    play_demo(show, &options).await
}

/// Types one title to completion, then prints it.
///
/// The intermediate frames drive the pacing but only the completed title
/// reaches stdout; per-character output is noise in a pipeline.
async fn play_title(title: &str, options: &PlayOptions) -> Result<()> {
    let tw_options = TypewriterOptions {
        loop_forever: false,
        type_speed: if options.quick {
            QUICK_DELAY
        } else {
            Duration::from_millis(40)
        },
        ..TypewriterOptions::default()
    };
    let typewriter = Typewriter::new(vec![title.to_string()], tw_options)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(typewriter.run(tx));
    let mut last = String::new();
    while let Some(frame) = rx.recv().await {
        last = frame;
    }
    task.await?;

    if options.json {
        println!("{}", json!({ "type": "title", "text": last }));
    } else {
        println!("{last}");
    }
    Ok(())
}

async fn play_demo(show: &ShowSpec, options: &PlayOptions) -> Result<()> {
    let typer_options = if options.quick {
        SequencedTyperOptions::uniform(QUICK_DELAY)
    } else {
        SequencedTyperOptions::default()
    };
    let typer = SequencedTyper::new(
        show.code.clone(),
        show.output_header.clone(),
        show.tasks.clone(),
        typer_options,
    )?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(async move {
        typer.start(&tx).await;
    });

    while let Some(event) = rx.recv().await {
        if options.json {
            println!("{}", serde_json::to_string(&event)?);
        } else if let Some(line) = render_event(&event) {
            println!("{line}");
        }
    }
    task.await?;
    Ok(())
}

/// Text rendering of a demo event; `None` for per-character progress.
fn render_event(event: &DemoEvent) -> Option<String> {
    match event {
        DemoEvent::LineCommitted { line, .. } => Some(line.text()),
        DemoEvent::OutputStarted { header } => Some(format!("\n== {header} ==")),
        DemoEvent::ItemRevealed { text, .. } => Some(format!("○ {text}")),
        DemoEvent::ItemCompleted { index } => Some(format!("✔ #{}", index + 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use vitrina_core::script::sequenced::StyledLine;

    use super::*;

    #[test]
    fn test_render_event_skips_typing_progress() {
        assert!(render_event(&DemoEvent::Reset).is_none());
        assert!(
            render_event(&DemoEvent::LineText {
                index: 0,
                text: "cl".to_string()
            })
            .is_none()
        );
    }

    #[test]
    fn test_render_committed_line_uses_plain_text() {
        let event = DemoEvent::LineCommitted {
            index: 0,
            line: StyledLine::plain("class Task:"),
        };
        assert_eq!(render_event(&event).as_deref(), Some("class Task:"));
    }
}
