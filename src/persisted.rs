//! Saved puzzle selection. The page remembers which year/day/part
//! was last run so a revisit (or a back/forward navigation) starts
//! where the user left off.

use serde::{Deserialize, Serialize};

use advent_runner_core::Problem;

pub const STORAGE_KEY: &str = "problem";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSelection {
    pub year: String,
    pub day: String,
    pub part: String,
}

/// Parses a stored selection, discarding anything that no longer
/// names a valid problem. Storage contents survive deploys, so old
/// or hand-edited values must not break the page.
pub fn decode_selection(raw: &str) -> Option<SavedSelection> {
    let selection: SavedSelection = serde_json::from_str(raw).ok()?;
    Problem::parse(&selection.year, &selection.day, &selection.part).ok()?;
    Some(selection)
}

pub fn load_selection() -> Option<SavedSelection> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    let decoded = decode_selection(&raw);
    if decoded.is_none() {
        gloo::console::warn!("ignoring malformed saved selection");
    }
    decoded
}

pub fn save_selection(selection: &SavedSelection) {
    let Ok(raw) = serde_json::to_string(selection) else {
        return;
    };
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_round_trip() {
        let selection = SavedSelection {
            year: "2019".to_string(),
            day: "6".to_string(),
            part: "2".to_string(),
        };
        let raw = serde_json::to_string(&selection).unwrap();
        assert_eq!(decode_selection(&raw), Some(selection));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode_selection("not json"), None);
        assert_eq!(decode_selection("{\"year\":\"2019\"}"), None);
        assert_eq!(
            decode_selection("{\"year\":\"1980\",\"day\":\"6\",\"part\":\"1\"}"),
            None
        );
        assert_eq!(
            decode_selection("{\"year\":\"2019\",\"day\":\"6\",\"part\":\"7\"}"),
            None
        );
    }
}
