use clap::Args;
use pastelink_core::codec::fingerprint::content_id_hex;
use pastelink_core::codec::{b64url, token};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Share token to inspect
    #[arg(long)]
    pub token: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let compressed = b64url::decode(&args.token)?;
    let text = token::decode(&args.token)?;

    eprintln!("--- inspect ---");
    eprintln!("token_chars       = {}", args.token.len());
    eprintln!("compressed_bytes  = {}", compressed.len());
    eprintln!("text_bytes        = {}", text.len());
    eprintln!("text_chars        = {}", text.chars().count());
    eprintln!(
        "ratio             = {:.3}",
        args.token.len() as f64 / text.len() as f64
    );
    eprintln!("content_id        = {}", content_id_hex(text.as_bytes()));

    Ok(())
}
