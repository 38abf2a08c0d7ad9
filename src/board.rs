//! Board State
//!
//! Owns the placed components and the z-index counter. Every operation is
//! total: unknown ids are ignored, and the only fallible entry point (a
//! palette drop without a board rect) degrades to a no-op.

use uuid::Uuid;

use crate::config::{
    GRID_CELL_HEIGHT, GRID_CELL_WIDTH, GRID_COLUMNS, GRID_GAP, MAX_Z_INDEX, MIN_ITEM_HEIGHT, MIN_ITEM_WIDTH,
};
use crate::models::{BoardRect, ComponentKind, ControlValue, Offset, PlacedComponent, Point, Size, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    components: Vec<PlacedComponent>,
    next_z_index: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            next_z_index: 1,
        }
    }

    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    pub fn next_z_index(&self) -> u32 {
        self.next_z_index
    }

    pub fn get(&self, id: Uuid) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Next stacking value, strictly above every placed component
    fn take_z_index(&mut self) -> u32 {
        if self.next_z_index > MAX_Z_INDEX {
            self.compact_z_order();
        }
        let z = self.next_z_index;
        self.next_z_index += 1;
        z
    }

    /// Renumber stacking to 1..=n, keeping the relative order
    fn compact_z_order(&mut self) {
        let mut order: Vec<usize> = (0..self.components.len()).collect();
        order.sort_by_key(|&i| self.components[i].z_index_or_default());
        for (rank, &i) in order.iter().enumerate() {
            self.components[i].z_index = Some(rank as u32 + 1);
        }
        self.next_z_index = self.components.len() as u32 + 1;
        log::info!("[BOARD] z-order compacted, next z-index {}", self.next_z_index);
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut PlacedComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    fn insert(&mut self, kind: ComponentKind, left: i32, top: i32, viewport: Viewport) -> Uuid {
        let size = kind.default_size(viewport);
        let id = Uuid::new_v4();
        let z_index = self.take_z_index();
        self.components.push(PlacedComponent {
            id,
            kind,
            left,
            top,
            width: Some(size.width),
            height: Some(size.height),
            z_index: Some(z_index),
            value: Some(kind.default_value()),
        });
        log::info!("[BOARD] added {:?} {} at ({}, {}) z={}", kind, id, left, top, z_index);
        id
    }

    /// Drop from the palette at a client point
    ///
    /// Returns `None` without touching state when the board rect could not
    /// be resolved.
    pub fn add_from_palette(
        &mut self,
        kind: ComponentKind,
        drop_point: Point,
        board_rect: Option<BoardRect>,
        viewport: Viewport,
    ) -> Option<Uuid> {
        let Some(rect) = board_rect else {
            log::warn!("[BOARD] drop of {:?} skipped: board rect unavailable", kind);
            return None;
        };
        let (left, top) = rect.to_board(drop_point);
        Some(self.insert(kind, left, top, viewport))
    }

    /// Tap-to-add: place into the next free cell of the two-column grid
    pub fn add_at_next_slot(&mut self, kind: ComponentKind, viewport: Viewport) -> Uuid {
        let (left, top) = grid_slot(self.components.len());
        self.insert(kind, left, top, viewport)
    }

    /// Shift by a drag delta and bring to front
    pub fn move_existing(&mut self, id: Uuid, delta: Offset) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let z_index = self.take_z_index();
        let comp = &mut self.components[pos];
        comp.left = comp.left.saturating_add(delta.dx);
        comp.top = comp.top.saturating_add(delta.dy);
        comp.z_index = Some(z_index);
        true
    }

    pub fn change_value(&mut self, id: Uuid, value: ControlValue) -> bool {
        match self.find_mut(id) {
            Some(comp) => {
                comp.value = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn delete_component(&mut self, id: Uuid) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        before != self.components.len()
    }

    /// Set dimensions as given; the resize handle enforces the floor
    pub fn resize(&mut self, id: Uuid, width: i32, height: i32) -> bool {
        match self.find_mut(id) {
            Some(comp) => {
                comp.width = Some(width);
                comp.height = Some(height);
                true
            }
            None => false,
        }
    }

    pub fn bring_to_front(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let z_index = self.take_z_index();
        self.components[pos].z_index = Some(z_index);
        true
    }

    pub fn clear(&mut self) {
        self.components.clear();
        self.next_z_index = 1;
    }

    /// Replace the whole collection, e.g. after loading a saved layout
    ///
    /// Stacking values above [`MAX_Z_INDEX`] are renumbered instead of
    /// overflowing the counter.
    pub fn replace_components(&mut self, components: Vec<PlacedComponent>) {
        let top = components.iter().map(PlacedComponent::z_index_or_default).max();
        self.components = components;
        match top {
            Some(top) if top >= MAX_Z_INDEX => self.compact_z_order(),
            Some(top) => self.next_z_index = top + 1,
            None => self.next_z_index = 1,
        }
    }
}

/// Board position of the `index`-th tap-added control
pub fn grid_slot(index: usize) -> (i32, i32) {
    let col = (index % GRID_COLUMNS) as i32;
    let row = (index / GRID_COLUMNS) as i32;
    (
        GRID_GAP + col * (GRID_CELL_WIDTH + GRID_GAP),
        GRID_GAP + row * (GRID_CELL_HEIGHT + GRID_GAP),
    )
}

/// An in-progress resize from a fixed starting pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGesture {
    start: Point,
    start_size: Size,
}

impl ResizeGesture {
    pub fn begin(start: Point, start_size: Size) -> Self {
        Self { start, start_size }
    }

    /// Size for the current pointer, never below the minimum
    pub fn size_at(&self, pointer: Point) -> Size {
        let dx = pointer.x - self.start.x;
        let dy = pointer.y - self.start.y;
        Size::new(
            (self.start_size.width + dx).max(MIN_ITEM_WIDTH),
            (self.start_size.height + dy).max(MIN_ITEM_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Option<BoardRect> {
        Some(BoardRect { left: 100.0, top: 50.0, scroll_left: 0.0, scroll_top: 0.0 })
    }

    fn board_with(kinds: &[ComponentKind]) -> (Board, Vec<Uuid>) {
        let mut board = Board::new();
        let ids = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let at = Point::new(150 + i as i32 * 10, 100);
                board.add_from_palette(*kind, at, rect(), Viewport::Desktop).unwrap()
            })
            .collect();
        (board, ids)
    }

    fn max_other_z(board: &Board, id: Uuid) -> u32 {
        board
            .components()
            .iter()
            .filter(|c| c.id != id)
            .map(PlacedComponent::z_index_or_default)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_add_assigns_pre_call_z_and_increments() {
        let mut board = Board::new();
        for kind in ComponentKind::ALL {
            let before = board.next_z_index();
            let id = board.add_from_palette(kind, Point::new(300, 200), rect(), Viewport::Desktop).unwrap();
            assert_eq!(board.get(id).unwrap().z_index, Some(before));
            assert_eq!(board.next_z_index(), before + 1);
        }
        assert_eq!(board.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn test_add_without_rect_is_noop() {
        let mut board = Board::new();
        let result = board.add_from_palette(ComponentKind::Switch, Point::new(10, 10), None, Viewport::Desktop);
        assert!(result.is_none());
        assert!(board.is_empty());
        assert_eq!(board.next_z_index(), 1);
    }

    #[test]
    fn test_add_uses_viewport_defaults() {
        let mut board = Board::new();
        let id = board.add_from_palette(ComponentKind::StepperV, Point::new(100, 50), rect(), Viewport::Mobile).unwrap();
        let comp = board.get(id).unwrap();
        assert_eq!((comp.left, comp.top), (0, 0));
        assert_eq!((comp.width, comp.height), (Some(100), Some(150)));
        assert_eq!(comp.value, Some(ControlValue::Number(0.0)));
    }

    #[test]
    fn test_ids_are_unique() {
        let (board, ids) = board_with(&[ComponentKind::Switch; 20]);
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), board.len());
    }

    #[test]
    fn test_click_brings_to_front() {
        let (mut board, ids) = board_with(&[ComponentKind::Switch, ComponentKind::Slider, ComponentKind::Button]);
        for &id in ids.iter().rev() {
            assert!(board.bring_to_front(id));
            let z = board.get(id).unwrap().z_index_or_default();
            assert!(z > max_other_z(&board, id));
        }
    }

    #[test]
    fn test_move_shifts_and_brings_to_front() {
        let (mut board, ids) = board_with(&[ComponentKind::Switch, ComponentKind::Slider]);
        let first = ids[0];
        let (left, top) = {
            let c = board.get(first).unwrap();
            (c.left, c.top)
        };
        assert!(board.move_existing(first, Offset::new(50, -20)));
        let comp = board.get(first).unwrap();
        assert_eq!((comp.left, comp.top), (left + 50, top - 20));
        assert!(comp.z_index_or_default() > max_other_z(&board, first));
    }

    #[test]
    fn test_drag_start_raises_before_release() {
        let (mut board, ids) = board_with(&[ComponentKind::Switch, ComponentKind::Slider, ComponentKind::Button]);
        let first = ids[0];
        let before = board.get(first).cloned().unwrap();

        // Threshold crossing: only the stacking changes
        assert!(board.bring_to_front(first));
        let dragging = board.get(first).unwrap();
        assert_eq!((dragging.left, dragging.top), (before.left, before.top));
        assert!(dragging.z_index_or_default() > max_other_z(&board, first));

        // Release still leaves it on top
        assert!(board.move_existing(first, Offset::new(30, 30)));
        assert!(board.get(first).unwrap().z_index_or_default() > max_other_z(&board, first));
    }

    #[test]
    fn test_counter_at_ceiling_renumbers() {
        let (mut board, ids) = board_with(&[ComponentKind::Switch, ComponentKind::Slider, ComponentKind::Button]);
        board.components[0].z_index = Some(MAX_Z_INDEX - 1);
        board.components[1].z_index = Some(MAX_Z_INDEX);
        board.next_z_index = MAX_Z_INDEX + 1;

        assert!(board.bring_to_front(ids[2]));
        let z: Vec<u32> = ids.iter().map(|&id| board.get(id).unwrap().z_index_or_default()).collect();
        assert_eq!(z, vec![2, 3, 4]);
        assert_eq!(board.next_z_index(), 5);
    }

    #[test]
    fn test_replace_renumbers_out_of_range_z() {
        let (source, ids) = board_with(&[ComponentKind::Switch, ComponentKind::Slider]);
        let mut components = source.components().to_vec();
        components[0].z_index = Some(u32::MAX);
        components[1].z_index = None;

        let mut board = Board::new();
        board.replace_components(components);
        assert_eq!(board.get(ids[0]).unwrap().z_index, Some(2));
        assert_eq!(board.get(ids[1]).unwrap().z_index, Some(1));
        assert_eq!(board.next_z_index(), 3);
    }

    #[test]
    fn test_move_can_leave_visible_area() {
        let (mut board, ids) = board_with(&[ComponentKind::Timer]);
        board.move_existing(ids[0], Offset::new(-500, -500));
        let comp = board.get(ids[0]).unwrap();
        assert!(comp.left < 0 && comp.top < 0);
    }

    #[test]
    fn test_change_value_is_unvalidated() {
        let (mut board, ids) = board_with(&[ComponentKind::Slider]);
        assert!(board.change_value(ids[0], ControlValue::Number(250.0)));
        assert_eq!(board.get(ids[0]).unwrap().value, Some(ControlValue::Number(250.0)));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut board, _) = board_with(&[ComponentKind::Switch, ComponentKind::Slider]);
        let snapshot = board.clone();
        let ghost = Uuid::new_v4();
        assert!(!board.delete_component(ghost));
        assert!(!board.move_existing(ghost, Offset::new(1, 1)));
        assert!(!board.bring_to_front(ghost));
        assert!(!board.resize(ghost, 300, 300));
        assert!(!board.change_value(ghost, ControlValue::Flag(true)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let (mut board, ids) = board_with(&[ComponentKind::Switch, ComponentKind::Slider, ComponentKind::Button]);
        assert!(board.delete_component(ids[1]));
        assert_eq!(board.len(), 2);
        assert!(board.get(ids[1]).is_none());
        assert!(board.get(ids[0]).is_some() && board.get(ids[2]).is_some());
    }

    #[test]
    fn test_resize_sets_dimensions() {
        let (mut board, ids) = board_with(&[ComponentKind::Switch]);
        assert!(board.resize(ids[0], 320, 240));
        let comp = board.get(ids[0]).unwrap();
        assert_eq!((comp.width, comp.height), (Some(320), Some(240)));
    }

    #[test]
    fn test_grid_slots_flow_in_two_columns() {
        assert_eq!(grid_slot(0), (20, 20));
        assert_eq!(grid_slot(1), (200, 20));
        assert_eq!(grid_slot(2), (20, 190));
        assert_eq!(grid_slot(5), (200, 360));
    }

    #[test]
    fn test_tap_to_add_uses_next_slot() {
        let mut board = Board::new();
        board.add_at_next_slot(ComponentKind::Switch, Viewport::Mobile);
        let second = board.add_at_next_slot(ComponentKind::Slider, Viewport::Mobile);
        let comp = board.get(second).unwrap();
        assert_eq!((comp.left, comp.top), (200, 20));
        assert_eq!(comp.width, Some(160));
        assert_eq!(comp.z_index, Some(2));
    }

    #[test]
    fn test_replace_recomputes_next_z() {
        let (source, _) = board_with(&[ComponentKind::Switch, ComponentKind::Slider, ComponentKind::Button]);
        let mut components = source.components().to_vec();
        components[1].z_index = Some(42);

        let mut board = Board::new();
        board.replace_components(components);
        assert_eq!(board.next_z_index(), 43);

        board.replace_components(Vec::new());
        assert_eq!(board.next_z_index(), 1);
    }

    #[test]
    fn test_replace_counts_missing_z_as_default() {
        let (source, _) = board_with(&[ComponentKind::Switch]);
        let mut components = source.components().to_vec();
        components[0].z_index = None;

        let mut board = Board::new();
        board.replace_components(components);
        assert_eq!(board.next_z_index(), 2);
        let id = board.components()[0].id;
        board.bring_to_front(id);
        assert_eq!(board.get(id).unwrap().z_index, Some(2));
    }

    #[test]
    fn test_clear_resets_counter() {
        let (mut board, _) = board_with(&[ComponentKind::Switch, ComponentKind::Slider]);
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.next_z_index(), 1);
    }

    #[test]
    fn test_resize_gesture_never_below_floor() {
        let gesture = ResizeGesture::begin(Point::new(400, 300), Size::new(180, 100));
        assert_eq!(gesture.size_at(Point::new(450, 320)), Size::new(230, 120));
        for (x, y) in [(-5000, -5000), (0, 300), (400, 0), (399, 299), (i32::MIN / 2, 10_000)] {
            let size = gesture.size_at(Point::new(x, y));
            assert!(size.width >= MIN_ITEM_WIDTH, "width {} at ({x}, {y})", size.width);
            assert!(size.height >= MIN_ITEM_HEIGHT, "height {} at ({x}, {y})", size.height);
        }
    }
}
