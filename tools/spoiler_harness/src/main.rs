use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::info;

use save_select::{
    InputFrame, MemorySlotCollection, SaveFileRef, SaveSelectScreen, SaveWriteQueue,
    SlotCollection, SlotEntry,
};
use seed_schema::{FillingMethod, ItemLocation, ProgressionChain};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scripted harness for the save-select screen", long_about = None)]
struct Args {
    /// Path to a JSON slot fixture
    #[arg(long)]
    fixture: PathBuf,

    /// Number of display ticks to run
    #[arg(long, default_value_t = 8)]
    ticks: u32,

    /// Display zoom handed to the screen each tick
    #[arg(long, default_value_t = 2)]
    zoom: i32,

    /// Confirm a delete-all sweep before ticking
    #[arg(long)]
    delete_all: bool,

    /// Write a spoiler log for the fixture's seed into --out-dir
    #[arg(long)]
    spoiler: bool,

    /// Output directory for generated spoiler logs
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Simulated disk latency (ticks) after each delete request
    #[arg(long, default_value_t = 2)]
    write_latency: u32,
}

/// Fixture format: the slot list plus, optionally, the fill output needed
/// for spoiler generation.
#[derive(Debug, Deserialize)]
struct Fixture {
    slots: Vec<SlotEntry>,
    #[serde(default)]
    spoiler: Option<SpoilerFixture>,
}

#[derive(Debug, Deserialize)]
struct SpoilerFixture {
    seed: seed_schema::Seed,
    method: FillingMethod,
    placements: Vec<ItemLocation>,
    chain: ProgressionChain,
}

/// Write queue that pretends each delete keeps the disk busy for a fixed
/// number of ticks.
struct LatencyWriter {
    latency: u32,
    busy_for: u32,
    deleted: Vec<SaveFileRef>,
}

impl LatencyWriter {
    fn new(latency: u32) -> Self {
        Self {
            latency,
            busy_for: 0,
            deleted: Vec::new(),
        }
    }

    fn advance(&mut self) {
        self.busy_for = self.busy_for.saturating_sub(1);
    }
}

impl SaveWriteQueue for LatencyWriter {
    fn is_finished_saving(&self) -> bool {
        self.busy_for == 0
    }

    fn request_delete(&mut self, file: SaveFileRef) {
        info!(file = file.0, "delete requested");
        self.deleted.push(file);
        self.busy_for = self.latency;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let args = Args::parse();

    let fixture_json = fs::read_to_string(&args.fixture)
        .with_context(|| format!("Failed to read fixture at {}", args.fixture.display()))?;
    let fixture: Fixture = serde_json::from_str(&fixture_json)
        .with_context(|| format!("Failed to parse fixture JSON at {}", args.fixture.display()))?;

    let mut collection = MemorySlotCollection::new(fixture.slots);
    let mut writer = LatencyWriter::new(args.write_latency);
    let mut screen = SaveSelectScreen::new(&collection);

    info!(
        slots = collection.len(),
        occupied = collection.occupied_count(),
        "fixture loaded"
    );

    if args.delete_all {
        screen.confirm_delete_all();
    }

    for tick in 0..args.ticks {
        let requests = screen.update(&mut collection, &mut writer, &InputFrame::default(), args.zoom);
        writer.advance();
        for request in &requests {
            info!(tick, ?request, "ui request");
        }
        if args.delete_all && !screen.is_deleting() {
            info!(tick, deleted = writer.deleted.len(), "sweep finished");
            break;
        }
    }

    if args.delete_all && screen.is_deleting() {
        bail!(
            "sweep still running after {} ticks; raise --ticks or lower --write-latency",
            args.ticks
        );
    }

    if args.spoiler {
        let spoiler = fixture
            .spoiler
            .context("fixture has no spoiler section but --spoiler was requested")?;
        let (requests, path) = screen
            .confirm_spoiler(
                spoiler.seed,
                spoiler.method,
                &spoiler.placements,
                &spoiler.chain,
                &args.out_dir,
            )
            .context("spoiler log generation failed")?;
        for request in &requests {
            info!(?request, "ui request");
        }
        if let Some(path) = path {
            println!("{}", path.display());
        }
    }

    Ok(())
}
