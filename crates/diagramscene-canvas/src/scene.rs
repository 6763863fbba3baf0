//! Item storage for the canvas, in paint order.

use diagramscene_core::Point;

use crate::items::DiagramItem;

/// The set of items on the canvas. Later items are painted on top.
#[derive(Debug, Clone)]
pub struct Scene {
    items: Vec<DiagramItem>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates a new unique id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &DiagramItem> {
        self.items.iter()
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut DiagramItem> {
        self.items.iter_mut()
    }

    pub fn get(&self, id: u64) -> Option<&DiagramItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DiagramItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Topmost item containing `point`.
    pub fn item_at(&self, point: &Point) -> Option<&DiagramItem> {
        self.items.iter().rev().find(|i| i.contains_point(point))
    }

    /// Adds an item on top of the others (also used for undo/redo).
    pub fn restore_item(&mut self, item: DiagramItem) {
        if item.id >= self.next_id {
            self.next_id = item.id + 1;
        }
        self.items.push(item);
    }

    /// Re-inserts an item at its previous paint position.
    pub fn restore_item_at(&mut self, index: usize, item: DiagramItem) {
        if item.id >= self.next_id {
            self.next_id = item.id + 1;
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Removes an item and returns it with its paint position.
    pub fn remove_item_return(&mut self, id: u64) -> Option<(usize, DiagramItem)> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some((index, self.items.remove(index)))
    }

    pub fn deselect_all(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;
    use diagramscene_core::Rect;

    #[test]
    fn test_remove_and_restore_keeps_order() {
        let mut scene = Scene::new();
        for _ in 0..3 {
            let id = scene.generate_id();
            scene.restore_item(DiagramItem::new(id, ItemKind::Process, Rect::default()));
        }
        let (index, item) = scene.remove_item_return(2).unwrap();
        assert_eq!(index, 1);
        scene.restore_item_at(index, item);
        let ids: Vec<u64> = scene.items().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_item_at_prefers_topmost() {
        let mut scene = Scene::new();
        scene.restore_item(DiagramItem::new(1, ItemKind::Process, Rect::new(0.0, 0.0, 10.0, 10.0)));
        scene.restore_item(DiagramItem::new(2, ItemKind::Io, Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert_eq!(scene.item_at(&Point::new(7.0, 7.0)).map(|i| i.id), Some(2));
        assert_eq!(scene.item_at(&Point::new(1.0, 1.0)).map(|i| i.id), Some(1));
        assert!(scene.item_at(&Point::new(50.0, 50.0)).is_none());
        assert_eq!(scene.generate_id(), 3);
    }
}
