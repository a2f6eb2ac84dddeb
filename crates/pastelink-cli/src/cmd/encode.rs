use clap::Args;
use pastelink_core::codec::fingerprint::content_id_hex;
use pastelink_core::codec::token;

#[derive(Args)]
pub struct EncodeArgs {
    /// Input text file to encode
    #[arg(long)]
    pub r#in: String,

    /// Output token path. If omitted, the token is printed to stdout.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.r#in)?;

    let tok = token::encode(&text)?
        .ok_or_else(|| anyhow::anyhow!("input is blank; blank content is never tokenized"))?;

    let cid = content_id_hex(text.as_bytes());

    match args.out.as_deref() {
        Some(path) => std::fs::write(path, tok.as_str())?,
        None => println!("{tok}"),
    }

    eprintln!(
        "encode ok: in_bytes={} token_chars={} ratio={:.3} content_id={}",
        text.len(),
        tok.as_str().len(),
        tok.as_str().len() as f64 / text.len() as f64,
        cid
    );

    Ok(())
}
