//! The harness fixture format deserializes straight into host records; this
//! pins the JSON shape (externally tagged slot state, flag names as strings).

use anyhow::Result;
use save_select::{MemorySlotCollection, SlotCollection, SlotId, SlotState};
use seed_schema::SeedOptions;

const SLOTS_JSON: &str = r#"{
    "entries": [
        {
            "id": 1,
            "state": {
                "Occupied": {
                    "file": 101,
                    "seed": { "id": 66, "options": "SHARED_SESSION | KEY_CARDS" },
                    "session": { "server": "play.example.net:38281", "slot_name": "Lunais" },
                    "game_cleared": false
                }
            },
            "metrics": {
                "draw_position": [40.0, 96.0],
                "text_offset_x": 12,
                "save_column_offset_x": 180,
                "line_spacing": 16.0,
                "left_column_width": 220,
                "scrolled_off": false
            }
        },
        {
            "id": 2,
            "state": "Empty",
            "metrics": {
                "draw_position": [40.0, 128.0],
                "text_offset_x": 12,
                "save_column_offset_x": 180,
                "line_spacing": 16.0,
                "left_column_width": 220,
                "scrolled_off": false
            }
        }
    ]
}"#;

#[test]
fn slot_collection_deserializes_from_fixture_json() -> Result<()> {
    let collection: MemorySlotCollection = serde_json::from_str(SLOTS_JSON)?;

    assert_eq!(collection.len(), 2);
    assert!(collection.contains(SlotId(1)));

    let entry = collection.entry(0).expect("first slot");
    let save = entry.state.save().expect("occupied");
    let seed = save.seed.expect("seed present");
    assert!(seed.options.contains(SeedOptions::SHARED_SESSION));
    assert!(seed.options.contains(SeedOptions::KEY_CARDS));
    assert_eq!(
        save.session.as_ref().map(|s| s.slot_name.as_str()),
        Some("Lunais")
    );

    assert!(matches!(
        collection.entry(1).map(|e| &e.state),
        Some(SlotState::Empty)
    ));
    Ok(())
}
