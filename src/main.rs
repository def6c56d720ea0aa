//! Snowplow Analytics CLI - enriched TSV events in, JSON lines out
//!
//! ```text
//! snowplow-analytics [--geo] [config.yaml] < events.tsv > events.jsonl
//! ```
//!
//! Lines that fail to decode are logged and skipped. The exit code is
//! non-zero only when the configuration or the streams fail.

use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};
use std::time::Instant;

use snowplow_analytics::config::{AnalyticsConfig, LogFormat, LoggingConfig};
use snowplow_analytics::to_json_with_config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let mut include_geo = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--geo" => include_geo = true,
            "-h" | "--help" => {
                println!("usage: snowplow-analytics [--geo] [config.yaml]");
                return Ok(());
            }
            _ => config_path = Some(arg),
        }
    }

    let mut config = match &config_path {
        Some(path) => AnalyticsConfig::from_file(path)?,
        None => AnalyticsConfig::default(),
    };
    config.decode.include_geo_location |= include_geo;

    init_tracing(&config.logging)?;
    info!(
        config = config_path.as_deref().unwrap_or("<defaults>"),
        name = config.name.as_deref().unwrap_or(""),
        include_geo_location = config.decode.include_geo_location,
        "decoder_started"
    );

    let start = Instant::now();
    let (mut decoded, mut failed) = (0u64, 0u64);
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }
        match to_json_with_config(line, &config.decode) {
            Ok(json) => {
                out.write_all(&json)?;
                out.write_all(b"\n")?;
                decoded += 1;
            }
            Err(err) => {
                warn!(line = line_no + 1, error = %err, "line_skipped");
                failed += 1;
            }
        }
    }
    out.flush()?;

    info!(
        decoded,
        failed,
        elapsed_millis = start.elapsed().as_millis(),
        "decoder_finished"
    );
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_new(&logging.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    let installed = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|err| -> Box<dyn Error> { err })
}
