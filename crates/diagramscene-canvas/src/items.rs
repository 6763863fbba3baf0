//! Diagram items placed on the scene.

use diagramscene_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The flowchart shape an item is drawn as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum ItemKind {
    /// Plain rectangle
    Process,
    /// Diamond
    Conditional,
    /// Rounded terminator
    StartEnd,
    /// Parallelogram
    Io,
    /// Free text label
    Text(String),
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Process => "Process",
            ItemKind::Conditional => "Conditional",
            ItemKind::StartEnd => "Start/End",
            ItemKind::Io => "Input/Output",
            ItemKind::Text(_) => "Text",
        }
    }
}

/// An item on the scene, in scene coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramItem {
    pub id: u64,
    pub kind: ItemKind,
    pub bounds: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip)]
    pub selected: bool,
}

impl DiagramItem {
    pub fn new(id: u64, kind: ItemKind, bounds: Rect) -> Self {
        Self {
            id,
            kind,
            bounds,
            group_id: None,
            selected: false,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.bounds = self.bounds.translated(dx, dy);
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.bounds.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_moves_bounds() {
        let mut item = DiagramItem::new(1, ItemKind::Process, Rect::new(0.0, 0.0, 20.0, 10.0));
        item.translate(5.0, -5.0);
        assert_eq!(item.bounds, Rect::new(5.0, -5.0, 20.0, 10.0));
        assert_eq!(item.center(), Point::new(15.0, 0.0));
    }

    #[test]
    fn test_serialized_kind_is_tagged() {
        let item = DiagramItem::new(
            7,
            ItemKind::Text("hello".to_string()),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"]["type"], "text");
        assert_eq!(json["kind"]["text"], "hello");
        assert!(json.get("selected").is_none());
        assert!(json.get("group_id").is_none());
    }
}
