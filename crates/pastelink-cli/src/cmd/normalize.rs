use clap::Args;
use pastelink_core::normalize::normalize;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Input text file
    #[arg(long)]
    pub r#in: String,

    /// Output path. If omitted, the normalized text is printed to stdout.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.r#in)?;
    let normalized = normalize(&text);

    match args.out.as_deref() {
        Some(path) => std::fs::write(path, &normalized)?,
        None => print!("{normalized}"),
    }

    eprintln!(
        "normalize ok: in_bytes={} out_bytes={} changed={}",
        text.len(),
        normalized.len(),
        normalized != text
    );

    Ok(())
}
