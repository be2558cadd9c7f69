//! IR Blast demo binary
//!
//! Lists transmitter availability, then resolves and transmits a code
//! supplied on the command line in any of the four source formats.
//!
//! Usage:
//!   blast list
//!   blast pronto "0000 006D 0000 0022 00AC 00AC ..."
//!   blast protocol "NEC,32,159,0"
//!   blast raw 38000 9000,4500,560,560,560
//!   blast record codes.json

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use irblast::{
    audio::list_output_devices,
    config::AppConfig,
    signal::SourceCode,
    IrSender,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let mut sender = IrSender::new(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("list");

    match command {
        "list" => {
            println!("=== IR Transmitters ===");
            for descriptor in sender.descriptors() {
                let marker = if descriptor.available { "available" } else { "not available" };
                println!("  {} [{}]", descriptor.name, marker);
            }

            println!("\n=== Audio Output Devices ===");
            for device in list_output_devices() {
                let default_marker = if device.is_default { " [DEFAULT]" } else { "" };
                println!("  {}{}", device.name, default_marker);
                println!("    Sample rates: {:?}", device.sample_rates);
                println!("    Channels: {:?}", device.channels);
            }
            return Ok(());
        }
        "pronto" => {
            let text = args.get(1).context("usage: blast pronto \"<hex words>\"")?;
            transmit(&mut sender, &SourceCode::from_pronto(text.clone()))?;
        }
        "protocol" => {
            let text = args
                .get(1)
                .context("usage: blast protocol \"NEC,<addr>,<cmd>[,extra]\"")?;
            transmit(&mut sender, &SourceCode::from_protocol(text.clone()))?;
        }
        "raw" => {
            let carrier: u32 = args
                .get(1)
                .context("usage: blast raw <carrier_hz> <us,us,...>")?
                .parse()
                .context("carrier must be an integer")?;
            let pattern = args
                .get(2)
                .context("usage: blast raw <carrier_hz> <us,us,...>")?
                .split(',')
                .map(|p| p.trim().parse::<u32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("pattern must be comma-separated integers")?;
            transmit(&mut sender, &SourceCode::from_raw(carrier, pattern))?;
        }
        "record" => {
            let path = args.get(1).context("usage: blast record <file.json>")?;
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path))?;
            let record: SourceCode =
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path))?;
            transmit(&mut sender, &record)?;
        }
        other => bail!("unknown command: {}", other),
    }

    Ok(())
}

/// Transmit a record, wait for playback, and report asynchronous failures
fn transmit(sender: &mut IrSender, record: &SourceCode) -> Result<()> {
    sender.transmit_code(record)?;
    sender.flush();

    if let Some(e) = sender.take_error() {
        bail!("transmission failed: {}", e);
    }

    tracing::info!("Transmission complete");
    Ok(())
}
