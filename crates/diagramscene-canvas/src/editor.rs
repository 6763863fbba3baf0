//! Diagram editor state.
//!
//! Owns the scene, the selection, the internal clipboard and the undo/redo
//! history. The canvas context menu pastes into it through [`PasteTarget`].

use std::cell::RefCell;
use std::collections::HashMap;

use diagramscene_core::constants::UNDO_LIMIT;
use diagramscene_core::{Error, Point, Rect, Result};

use crate::commands::{AddItem, EditorCommand, PasteItems, RemoveItems};
use crate::context_menu::PasteTarget;
use crate::items::{DiagramItem, ItemKind};
use crate::scene::Scene;

/// Editor state for UI integration
#[derive(Debug, Clone, Default)]
pub struct DiagramEditor {
    scene: Scene,
    clipboard: Vec<DiagramItem>,
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
    is_modified: bool,
}

impl DiagramEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn items(&self) -> impl Iterator<Item = &DiagramItem> {
        self.scene.items()
    }

    pub fn item(&self, id: u64) -> Option<&DiagramItem> {
        self.scene.get(id)
    }

    pub fn item_count(&self) -> usize {
        self.scene.len()
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Pushes a command to the undo stack and executes it.
    pub fn push_command(&mut self, mut cmd: EditorCommand) {
        cmd.apply(&mut self.scene);
        tracing::debug!(command = cmd.name(), "Applied editor command");
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.undo_stack.len() > UNDO_LIMIT {
            self.undo_stack.remove(0);
        }
        self.is_modified = true;
    }

    pub fn undo(&mut self) {
        if let Some(mut cmd) = self.undo_stack.pop() {
            cmd.undo(&mut self.scene);
            self.redo_stack.push(cmd);
            self.is_modified = true;
        }
    }

    pub fn redo(&mut self) {
        if let Some(mut cmd) = self.redo_stack.pop() {
            cmd.apply(&mut self.scene);
            self.undo_stack.push(cmd);
            self.is_modified = true;
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Adds a new item and returns its id.
    pub fn add_item(&mut self, kind: ItemKind, bounds: Rect) -> u64 {
        let id = self.scene.generate_id();
        self.push_command(EditorCommand::AddItem(AddItem {
            id,
            item: Some(DiagramItem::new(id, kind, bounds)),
        }));
        id
    }

    /// Selects an item. Without `additive` the previous selection is cleared.
    pub fn select(&mut self, id: u64, additive: bool) -> bool {
        if self.scene.get(id).is_none() {
            return false;
        }
        if !additive {
            self.scene.deselect_all();
        }
        if let Some(item) = self.scene.get_mut(id) {
            item.selected = true;
        }
        true
    }

    pub fn deselect_all(&mut self) {
        self.scene.deselect_all();
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.scene
            .items()
            .filter(|i| i.selected)
            .map(|i| i.id)
            .collect()
    }

    /// Groups the selected items under a fresh group id.
    pub fn group_selected(&mut self) -> Option<u64> {
        if self.selected_ids().len() < 2 {
            return None;
        }
        let group_id = self.scene.generate_id();
        for item in self.scene.items_mut().filter(|i| i.selected) {
            item.group_id = Some(group_id);
        }
        self.is_modified = true;
        Some(group_id)
    }

    /// Copies selected items to the clipboard.
    pub fn copy_selected(&mut self) {
        self.clipboard = self.scene.items().filter(|i| i.selected).cloned().collect();
        tracing::debug!(count = self.clipboard.len(), "Copied items to clipboard");
    }

    /// Copies then deletes the selected items.
    pub fn cut_selected(&mut self) {
        self.copy_selected();
        self.delete_selected();
    }

    pub fn clipboard(&self) -> &[DiagramItem] {
        &self.clipboard
    }

    pub fn can_paste(&self) -> bool {
        !self.clipboard.is_empty()
    }

    /// Serialises the clipboard for the system clipboard.
    pub fn clipboard_to_json(&self) -> Result<String> {
        serde_json::to_string(&self.clipboard)
            .map_err(|e| Error::other(format!("Failed to serialize clipboard: {}", e)))
    }

    /// Replaces the clipboard with items read from the system clipboard.
    pub fn set_clipboard_from_json(&mut self, json: &str) -> Result<()> {
        let items: Vec<DiagramItem> = serde_json::from_str(json)
            .map_err(|e| Error::other(format!("Invalid clipboard contents: {}", e)))?;
        self.clipboard = items;
        Ok(())
    }

    /// Pastes clipboard items centred on `position` (scene coordinates).
    ///
    /// Copies get fresh ids; copies of one group form a new group. The pasted
    /// copies become the selection, and the whole paste is one undo step.
    pub fn paste_items(&mut self, position: Point) {
        let Some(bounds) = Rect::bounding(self.clipboard.iter().map(|i| &i.bounds)) else {
            tracing::debug!("Paste requested with an empty clipboard");
            return;
        };

        let center = bounds.center();
        let dx = position.x - center.x;
        let dy = position.y - center.y;

        let previous_selection = self.selected_ids();

        let mut ids = Vec::with_capacity(self.clipboard.len());
        let mut items = Vec::with_capacity(self.clipboard.len());
        let mut group_map = HashMap::new();

        for source in &self.clipboard {
            let mut item = source.clone();
            item.id = self.scene.generate_id();

            if let Some(gid) = source.group_id {
                let new_gid = *group_map
                    .entry(gid)
                    .or_insert_with(|| self.scene.generate_id());
                item.group_id = Some(new_gid);
            }

            item.translate(dx, dy);

            ids.push(item.id);
            items.push(Some(item));
        }

        tracing::info!(count = ids.len(), %position, "Pasted items");
        self.push_command(EditorCommand::PasteItems(PasteItems {
            ids,
            items,
            previous_selection,
        }));
    }

    /// Deletes the selected items.
    pub fn delete_selected(&mut self) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return;
        }
        self.push_command(EditorCommand::RemoveItems(RemoveItems {
            ids,
            removed: Vec::new(),
        }));
    }
}

impl PasteTarget for RefCell<DiagramEditor> {
    fn paste_items(&self, position: Point) {
        match self.try_borrow_mut() {
            Ok(mut editor) => editor.paste_items(position),
            Err(_) => tracing::warn!(%position, "Editor busy, paste dropped"),
        }
    }
}
