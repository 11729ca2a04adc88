use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use eip191_textual::signing::{
    Eip191TextualHandler, HexDumpLogger, PrerenderedTextualHandler, Screen, SignContext,
    SignDocument, SignerData, TxData,
};
use eip191_textual::utils::logging;
use eip191_textual::{log_info, RenderLimits, RenderedSignBytes};

/// Render a SIGN_MODE_TEXTUAL sign doc as an EIP-191 personal message
#[derive(Debug, Parser)]
#[command(name = "eip191-textual", version)]
struct Cli {
    /// File holding the hex-encoded CBOR sign doc (stdin when omitted)
    #[arg(conflicts_with = "demo")]
    file: Option<PathBuf>,

    /// Render a built-in sample sign doc instead of reading input
    #[arg(long)]
    demo: bool,

    /// Print plaintext, sign bytes and digest as JSON
    #[arg(long)]
    json: bool,

    /// Use the strict decode limits
    #[arg(long)]
    strict: bool,

    /// Log a hex dump of the sign bytes to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn read_sign_doc(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    let payload = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let trimmed = payload.trim();
    let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if hex_str.is_empty() {
        bail!("empty sign doc");
    }
    hex::decode(hex_str).context("sign doc is not valid hex")
}

/// Sample bank send, as the textual renderer would lay it out
fn demo_sign_doc() -> Result<Vec<u8>> {
    let doc = SignDocument::new(vec![
        Screen::new("cosmoshub-4").with_title("Chain id"),
        Screen::new("1").with_title("Account number"),
        Screen::new("2").with_title("Sequence"),
        Screen::new("cosmos1ulav3hsenupswqfkw2y3sup5kgtqwnvqa8eyhs").with_title("Address"),
        Screen::new("10 ATOM").with_title("Amount").with_indent(1),
        Screen::new("0.002 ATOM").with_title("Fees"),
        Screen::new("100000").with_title("Gas limit").expert(),
    ]);
    Ok(doc.to_cbor()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        logging::enable_debug();
    }

    let sign_doc = if cli.demo {
        demo_sign_doc()?
    } else {
        read_sign_doc(cli.file.as_ref())?
    };
    let limits = if cli.strict {
        RenderLimits::strict()
    } else {
        RenderLimits::standard()
    };

    let handler = Eip191TextualHandler::new(Arc::new(PrerenderedTextualHandler))
        .with_limits(limits)?
        .with_observer(Arc::new(HexDumpLogger));

    let message = handler.render_message(
        &SignContext::default(),
        &SignerData::default(),
        &TxData::with_textual_sign_doc(sign_doc),
    )?;
    if cli.verbose {
        log_info!(
            "cli",
            "rendered textual sign doc",
            screens = message.lines().len(),
            digest = message.digest_hex(),
        );
    }

    if cli.json {
        let rendered = RenderedSignBytes::from(&message);
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", message.envelope_hex());
    }

    Ok(())
}
