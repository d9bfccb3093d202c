use std::io::Read;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zmin_transformer::{minify, MinifyOptions};

fn init_log() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("LOG"))
        .init();
}

fn main() -> Result<()> {
    init_log();

    let path = std::env::args().nth(1);

    let source = match path.as_deref() {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let options = MinifyOptions {
        filename: path,
        ..Default::default()
    };

    let output = minify(&source, &options)?;

    debug!(
        in_len = source.len(),
        out_len = output.content.len(),
        renamed = output.renames.len(),
        "writing minified source"
    );

    print!("{}", output.content);

    Ok(())
}
