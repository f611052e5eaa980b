//! Prints every fixture family for one seed as a JSON document, followed by
//! its SHA-256 fingerprint, so runs can be compared.
//!
//! SEED=42 NOW=2026-10-16T09:30:00Z cargo run --bin fixture_dump

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;

use sous::fixtures::dump::{fingerprint, snapshot};
use sous::fixtures::FixtureSource;
use sous::logging::{log, obj, v_str, Domain, Level};

fn main() -> Result<()> {
    let seed: u64 = match std::env::var("SEED") {
        Ok(raw) => raw.parse().with_context(|| format!("SEED must be a u64, got {:?}", raw))?,
        Err(_) => 42,
    };
    let mut src = match std::env::var("NOW") {
        Ok(raw) => {
            let now = DateTime::parse_from_rfc3339(&raw)
                .with_context(|| format!("NOW must be RFC3339, got {:?}", raw))?
                .with_timezone(&Utc);
            FixtureSource::with_clock(seed, now)
        }
        Err(_) => FixtureSource::new(seed),
    };

    let snap = snapshot(&mut src);
    let digest = fingerprint(&snap);
    log(
        Level::Info,
        Domain::Fixture,
        "dump",
        obj(&[("sha256", v_str(&digest)), ("seed", json!(seed))]),
    );
    println!("{}", serde_json::to_string_pretty(&json!({ "fixtures": snap, "sha256": digest }))?);
    Ok(())
}
