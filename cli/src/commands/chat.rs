//! # AssignMaker Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Hosts one chat widget session on the terminal. Messages given as
//! arguments are answered one per line; without arguments, lines are read
//! from stdin until EOF and each reply is printed as `bot: <reply>`.
//! Blank messages are skipped, exactly as the widget ignores an empty input
//! box.
//!
//! ## Examples
//!
//! ```bash
//! assignmaker chat "hi" "need an assignment"
//! printf 'hello\nthanks\n' | assignmaker chat --json
//! ```
//!
use crate::chat::{ChatSession, Sender};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Messages to send. Reads from stdin when omitted.
    pub messages: Vec<String>,

    /// Print the whole transcript as JSON when the session ends.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Chat Command (`handle_chat`)
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    let mut stdout = std::io::stdout();

    let mut session = if args.messages.is_empty() {
        info!("Starting interactive chat session");
        eprintln!("Chatbot ready. Type your message (Ctrl+D to end).");
        let reader = BufReader::new(tokio::io::stdin());
        run_session(reader, &mut stdout, !args.json).await?
    } else {
        let mut session = ChatSession::new();
        for message in &args.messages {
            if let Some(reply) = session.send_text(message.as_str()) {
                if !args.json {
                    writeln!(stdout, "{}", reply.text)?;
                }
            }
        }
        session
    };

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, session.messages())
            .context("Failed to write chat transcript")?;
        writeln!(stdout)?;
    }

    session.end();
    Ok(())
}

/// # Run Session (`run_session`)
///
/// Feeds every line of `reader` into a fresh session, echoing bot replies to
/// `out` when `echo` is set. Returns the session at EOF so the caller can
/// inspect or print the transcript.
pub async fn run_session<R, W>(reader: R, out: &mut W, echo: bool) -> Result<ChatSession>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = ChatSession::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read chat input")? {
        session.set_draft(line);
        match session.send() {
            Some(reply) if echo => {
                writeln!(out, "{}: {}", Sender::Bot, reply.text)?;
                out.flush()?;
            }
            Some(_) => {}
            None => debug!("Skipped blank chat line"),
        }
    }

    info!("Chat session ended after {} messages", session.messages().len());
    Ok(session)
}
