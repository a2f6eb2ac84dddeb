use std::time::Instant;

use clap::Args;
use pastelink_core::session::Clipboard;
use pastelink_core::{Address, Session};

#[derive(Args)]
pub struct ShareArgs {
    /// Input text file to share
    #[arg(long)]
    pub r#in: String,

    /// Base page address the link is built on
    #[arg(long)]
    pub base: String,
}

/// Stands in for the system clipboard; the link is printed instead.
struct CaptureClipboard {
    captured: Option<String>,
}

impl Clipboard for CaptureClipboard {
    fn write_text(&mut self, text: &str) -> bool {
        self.captured = Some(text.to_string());
        true
    }
}

pub fn run(args: ShareArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.r#in)?;

    let now = Instant::now();
    let mut clipboard = CaptureClipboard { captured: None };

    let mut session = Session::open(Address::parse(&args.base), now);
    session.edit(text);

    if !session.share(&mut clipboard, now) {
        match session.feedback(now) {
            Some(status) => anyhow::bail!("share failed: {status}"),
            None => anyhow::bail!("input is blank; nothing to share"),
        }
    }

    let link = clipboard
        .captured
        .ok_or_else(|| anyhow::anyhow!("share flow produced no link"))?;
    println!("{link}");

    eprintln!(
        "share ok: in_bytes={} link_chars={} status={:?}",
        session.text().len(),
        link.len(),
        session.feedback(now)
    );

    Ok(())
}
