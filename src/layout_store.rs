//! Layout Persistence
//!
//! Saves the board as one JSON array under a fixed key. The browser backend
//! is `window.localStorage`; the memory backend stands in for tests and
//! for browsers that refuse storage access.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::board::Board;
use crate::config::LAYOUT_STORAGE_KEY;
use crate::models::PlacedComponent;

/// Layout persistence errors
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("no saved layout found")]
    NotFound,
    #[error("saved layout is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("could not write layout: {0}")]
    Write(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Key-value backend for layouts
pub trait LayoutStorage {
    fn read(&self, key: &str) -> LayoutResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> LayoutResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> LayoutResult<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(LayoutError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl LayoutStorage for BrowserStorage {
    fn read(&self, key: &str) -> LayoutResult<Option<String>> {
        self.storage.get_item(key).map_err(|_| LayoutError::Unavailable)
    }

    fn write(&self, key: &str, value: &str) -> LayoutResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| LayoutError::Write(format!("{:?}", e)))
    }
}

/// In-memory storage for testing and ephemeral use
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStorage for MemoryStorage {
    fn read(&self, key: &str) -> LayoutResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> LayoutResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode_layout(components: &[PlacedComponent]) -> LayoutResult<String> {
    Ok(serde_json::to_string(components)?)
}

pub fn decode_layout(raw: &str) -> LayoutResult<Vec<PlacedComponent>> {
    Ok(serde_json::from_str(raw)?)
}

/// Write the whole board; returns the number of components saved
pub fn save_layout(board: &Board, storage: &impl LayoutStorage) -> LayoutResult<usize> {
    let raw = encode_layout(board.components())?;
    storage.write(LAYOUT_STORAGE_KEY, &raw)?;
    log::info!("[STORE] saved {} components", board.len());
    Ok(board.len())
}

/// Replace the board with the saved layout
///
/// On any error the board is left untouched.
pub fn load_layout(board: &mut Board, storage: &impl LayoutStorage) -> LayoutResult<usize> {
    let raw = storage.read(LAYOUT_STORAGE_KEY)?.ok_or(LayoutError::NotFound)?;
    let components = decode_layout(&raw)?;
    let count = components.len();
    board.replace_components(components);
    log::info!("[STORE] loaded {} components, next z-index {}", count, board.next_z_index());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardRect, ComponentKind, ControlValue, JoystickPoint, Offset, Point, Viewport};

    fn sample_board() -> Board {
        let rect = Some(BoardRect { left: 0.0, top: 0.0, scroll_left: 0.0, scroll_top: 0.0 });
        let mut board = Board::new();
        let switch = board.add_from_palette(ComponentKind::Switch, Point::new(40, 60), rect, Viewport::Desktop).unwrap();
        let joystick = board.add_from_palette(ComponentKind::Joystick, Point::new(300, 60), rect, Viewport::Desktop).unwrap();
        board.add_at_next_slot(ComponentKind::StepperV, Viewport::Mobile);
        board.change_value(switch, ControlValue::Flag(true));
        board.change_value(joystick, ControlValue::Point(JoystickPoint { x: 0.25, y: -0.5 }));
        board.bring_to_front(switch);
        board
    }

    #[test]
    fn test_save_then_load_restores_board() {
        let storage = MemoryStorage::new();
        let original = sample_board();
        assert_eq!(save_layout(&original, &storage).unwrap(), 3);

        let mut restored = Board::new();
        assert_eq!(load_layout(&mut restored, &storage).unwrap(), 3);
        assert_eq!(restored.components(), original.components());

        let top = original.components().iter().filter_map(|c| c.z_index).max().unwrap();
        assert_eq!(restored.next_z_index(), top + 1);
    }

    #[test]
    fn test_empty_layout_round_trip() {
        let storage = MemoryStorage::new();
        save_layout(&Board::new(), &storage).unwrap();
        assert_eq!(storage.read(LAYOUT_STORAGE_KEY).unwrap().as_deref(), Some("[]"));

        let mut board = sample_board();
        assert_eq!(load_layout(&mut board, &storage).unwrap(), 0);
        assert!(board.is_empty());
        assert_eq!(board.next_z_index(), 1);
    }

    #[test]
    fn test_load_without_saved_layout_keeps_state() {
        let storage = MemoryStorage::new();
        let mut board = sample_board();
        let snapshot = board.clone();
        assert!(matches!(load_layout(&mut board, &storage), Err(LayoutError::NotFound)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_load_malformed_json_keeps_state() {
        let storage = MemoryStorage::new();
        storage.write(LAYOUT_STORAGE_KEY, "[{\"id\": oops").unwrap();
        let mut board = sample_board();
        let snapshot = board.clone();
        let err = load_layout(&mut board, &storage).unwrap_err();
        assert!(matches!(err, LayoutError::Malformed(_)));
        assert!(err.to_string().starts_with("saved layout is malformed"));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_load_rejects_unknown_kind() {
        let storage = MemoryStorage::new();
        let raw = r#"[{"id":"6f1c7b0e-5f7d-4f8e-9a51-1d2b3c4d5e6f","type":"thermostat","left":0,"top":0}]"#;
        storage.write(LAYOUT_STORAGE_KEY, raw).unwrap();
        let mut board = Board::new();
        assert!(matches!(load_layout(&mut board, &storage), Err(LayoutError::Malformed(_))));
    }

    #[test]
    fn test_load_top_of_range_z_index() {
        let storage = MemoryStorage::new();
        let raw = r#"[
            {"id":"6f1c7b0e-5f7d-4f8e-9a51-1d2b3c4d5e6f","type":"switch","left":0,"top":0,"zIndex":4294967295},
            {"id":"0b9a2f4e-3c1d-4e5f-8a7b-6c5d4e3f2a1b","type":"slider","left":40,"top":0,"zIndex":7}
        ]"#;
        storage.write(LAYOUT_STORAGE_KEY, raw).unwrap();

        let mut board = Board::new();
        assert_eq!(load_layout(&mut board, &storage).unwrap(), 2);
        let z = |b: &Board, i: usize| b.components()[i].z_index_or_default();
        assert!(z(&board, 0) > z(&board, 1));
        assert_eq!(board.next_z_index(), 3);

        let slider = board.components()[1].id;
        assert!(board.bring_to_front(slider));
        assert!(z(&board, 1) > z(&board, 0));
    }

    #[test]
    fn test_persisted_shape() {
        let mut board = Board::new();
        let id = board.add_at_next_slot(ComponentKind::RectangleButton, Viewport::Desktop);
        let raw = encode_layout(board.components()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &json.as_array().unwrap()[0];
        assert_eq!(entry["id"], id.to_string());
        assert_eq!(entry["type"], "rectangle-button");
        assert_eq!(entry["zIndex"], 1);
        assert_eq!(entry["width"], 180);
        assert_eq!(entry["value"], false);
    }

    #[test]
    fn test_switch_scenario() {
        let storage = MemoryStorage::new();
        let rect = Some(BoardRect { left: 144.0, top: 64.0, scroll_left: 0.0, scroll_top: 0.0 });
        let mut board = Board::new();

        let id = board.add_from_palette(ComponentKind::Switch, Point::new(344, 264), rect, Viewport::Desktop).unwrap();
        assert_eq!(board.len(), 1);
        let added = board.get(id).unwrap().clone();
        assert_eq!(added.kind, ComponentKind::Switch);
        assert_eq!(added.value, Some(ControlValue::Flag(false)));
        assert_eq!(added.width, Some(180));

        board.move_existing(id, Offset::new(50, -20));
        let moved = board.get(id).unwrap().clone();
        assert_eq!((moved.left, moved.top), (added.left + 50, added.top - 20));
        assert!(moved.z_index > added.z_index);

        save_layout(&board, &storage).unwrap();
        let saved = decode_layout(&storage.read(LAYOUT_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved, vec![moved.clone()]);

        board.clear();
        load_layout(&mut board, &storage).unwrap();
        assert_eq!(board.components(), &[moved][..]);
    }
}
