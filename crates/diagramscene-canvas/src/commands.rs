use crate::items::DiagramItem;
use crate::scene::Scene;

/// An undoable change to the scene.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    AddItem(AddItem),
    RemoveItems(RemoveItems),
    PasteItems(PasteItems),
}

#[derive(Debug, Clone)]
pub struct AddItem {
    pub id: u64,
    pub item: Option<DiagramItem>, // Some while off the scene
}

#[derive(Debug, Clone)]
pub struct RemoveItems {
    pub ids: Vec<u64>,
    // Filled when executed: (paint index, item)
    pub removed: Vec<(usize, DiagramItem)>,
}

#[derive(Debug, Clone)]
pub struct PasteItems {
    pub ids: Vec<u64>,
    pub items: Vec<Option<DiagramItem>>, // Some while off the scene
    // Selection before the paste, restored on undo
    pub previous_selection: Vec<u64>,
}

impl EditorCommand {
    pub fn apply(&mut self, scene: &mut Scene) {
        match self {
            EditorCommand::AddItem(cmd) => {
                if let Some(item) = cmd.item.take() {
                    scene.restore_item(item);
                }
            }
            EditorCommand::RemoveItems(cmd) => {
                cmd.removed.clear();
                for id in &cmd.ids {
                    if let Some(entry) = scene.remove_item_return(*id) {
                        cmd.removed.push(entry);
                    }
                }
            }
            EditorCommand::PasteItems(cmd) => {
                scene.deselect_all();
                for slot in cmd.items.iter_mut() {
                    if let Some(mut item) = slot.take() {
                        item.selected = true;
                        scene.restore_item(item);
                    }
                }
            }
        }
    }

    pub fn undo(&mut self, scene: &mut Scene) {
        match self {
            EditorCommand::AddItem(cmd) => {
                if let Some((_, item)) = scene.remove_item_return(cmd.id) {
                    cmd.item = Some(item);
                }
            }
            EditorCommand::RemoveItems(cmd) => {
                // Reinsert in reverse removal order so paint indices line up
                for (index, item) in cmd.removed.drain(..).rev() {
                    scene.restore_item_at(index, item);
                }
            }
            EditorCommand::PasteItems(cmd) => {
                for (i, id) in cmd.ids.iter().enumerate() {
                    if let Some((_, item)) = scene.remove_item_return(*id) {
                        cmd.items[i] = Some(item);
                    }
                }
                scene.deselect_all();
                for id in &cmd.previous_selection {
                    if let Some(item) = scene.get_mut(*id) {
                        item.selected = true;
                    }
                }
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EditorCommand::AddItem(_) => "Add Item",
            EditorCommand::RemoveItems(_) => "Delete Items",
            EditorCommand::PasteItems(_) => "Paste",
        }
    }
}
