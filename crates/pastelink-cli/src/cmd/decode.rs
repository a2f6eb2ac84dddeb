use clap::Args;
use pastelink_core::address::Address;
use pastelink_core::codec::fingerprint::content_id_hex;
use pastelink_core::codec::token;
use pastelink_core::session::{RAW_PARAM, TOKEN_PARAM};

#[derive(Args)]
pub struct DecodeArgs {
    /// A bare share token
    #[arg(long, conflicts_with = "url")]
    pub token: Option<String>,

    /// A full share link; both the token and the legacy raw parameter are honored
    #[arg(long)]
    pub url: Option<String>,

    /// Output text path. If omitted, the text is printed to stdout.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let text = match (args.token.as_deref(), args.url.as_deref()) {
        (Some(tok), None) => token::decode(tok)?,
        (None, Some(url)) => decode_link(url)?,
        _ => anyhow::bail!("exactly one of --token or --url is required"),
    };

    let cid = content_id_hex(text.as_bytes());

    match args.out.as_deref() {
        Some(path) => std::fs::write(path, &text)?,
        None => println!("{text}"),
    }

    eprintln!("decode ok: text_bytes={} content_id={}", text.len(), cid);
    Ok(())
}

fn decode_link(url: &str) -> anyhow::Result<String> {
    let address = Address::parse(url);

    if let Some(tok) = address.get(TOKEN_PARAM) {
        if !tok.is_empty() {
            return Ok(token::decode(tok)?);
        }
    }
    if let Some(raw) = address.get(RAW_PARAM) {
        if !raw.is_empty() {
            return Ok(raw.to_string());
        }
    }

    anyhow::bail!("link carries no shared content");
}
