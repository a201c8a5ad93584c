//! Spoiler report serialization.
//!
//! Projects the fill engine's already-computed placement list and
//! accessibility chain into a three-section text report. The body is a pure
//! function of its inputs; only the file name carries a timestamp.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use seed_schema::{FillingMethod, ItemLocation, ProgressionChain, Seed};

#[derive(Debug, Error)]
pub enum SpoilerError {
    /// Shared-session seeds keep their placements on the session server;
    /// there is no local data to report.
    #[error("spoiler logs are not supported for connected-session seeds")]
    UnsupportedMethod,
    #[error("failed to write spoiler log")]
    Io(#[from] io::Error),
}

/// Serialize the report body.
///
/// Section order: progression chain (one tab of indentation per depth
/// level), progression items (non-trivial unlocks, flat-list order), other
/// locations (the rest, same order). Order within a chain layer is the
/// layer's stored order, which the fill engine keeps stable per seed.
pub fn write_spoiler_log<W: Write>(
    mut out: W,
    seed: Seed,
    placements: &[ItemLocation],
    chain: &ProgressionChain,
) -> io::Result<()> {
    writeln!(out, "Seed: {seed}")?;
    writeln!(out, "Generator version: v{}", env!("CARGO_PKG_VERSION"))?;

    writeln!(out)?;
    writeln!(out, "Progression Chain:")?;
    for (depth, layer) in chain.layers().enumerate() {
        write_item_list(&mut out, layer.locations.iter(), depth)?;
    }

    write_section(
        &mut out,
        "Progression Items:",
        placements.iter().filter(|p| p.is_progression()),
    )?;
    write_section(
        &mut out,
        "Other Locations:",
        placements.iter().filter(|p| !p.is_progression()),
    )?;

    Ok(())
}

/// Generate the report file next to the host's other output.
///
/// Fails fast for shared-session seeds before any I/O happens. A write
/// failure propagates: a half-written spoiler file must not be reported as
/// success.
pub fn generate_spoiler_log(
    seed: Seed,
    method: FillingMethod,
    placements: &[ItemLocation],
    chain: &ProgressionChain,
    out_dir: &Path,
) -> Result<PathBuf, SpoilerError> {
    if method == FillingMethod::SharedSession {
        return Err(SpoilerError::UnsupportedMethod);
    }

    let path = out_dir.join(spoiler_file_name(seed, Utc::now()));
    let mut file = BufWriter::new(File::create(&path)?);
    write_spoiler_log(&mut file, seed, placements, chain)?;
    file.flush()?;

    info!(path = %path.display(), "spoiler log written");
    Ok(path)
}

/// `SpoilerLog {seed} {UTC date}.txt`, minute precision.
pub fn spoiler_file_name(seed: Seed, timestamp: DateTime<Utc>) -> String {
    format!("SpoilerLog {seed} {}.txt", timestamp.format("%Y-%m-%d %H.%M"))
}

fn write_section<'a, W: Write>(
    out: &mut W,
    name: &str,
    placements: impl Iterator<Item = &'a ItemLocation>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{name}")?;
    write_item_list(out, placements, 0)
}

fn write_item_list<'a, W: Write>(
    out: &mut W,
    placements: impl Iterator<Item = &'a ItemLocation>,
    depth: usize,
) -> io::Result<()> {
    let prefix = "\t".repeat(depth);
    for placement in placements {
        writeln!(out, "{prefix}{placement}")?;
    }
    Ok(())
}
