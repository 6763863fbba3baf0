//! Integration tests for pasting clipboard items at a scene position

use diagramscene_canvas::{DiagramEditor, ItemKind};
use diagramscene_core::{Point, Rect};

fn editor_with_copied_pair() -> (DiagramEditor, u64, u64) {
    let mut editor = DiagramEditor::new();
    let a = editor.add_item(ItemKind::Process, Rect::new(0.0, 0.0, 20.0, 10.0));
    let b = editor.add_item(ItemKind::Conditional, Rect::new(40.0, 30.0, 20.0, 10.0));
    editor.select(a, false);
    editor.select(b, true);
    editor.copy_selected();
    (editor, a, b)
}

#[test]
fn test_paste_centres_clipboard_on_position() {
    let (mut editor, _, _) = editor_with_copied_pair();
    // Clipboard bounds: (0,0)-(60,40), centre (30,20)
    editor.paste_items(Point::new(130.0, 220.0));

    assert_eq!(editor.item_count(), 4);
    let pasted: Vec<_> = editor.items().skip(2).collect();
    assert_eq!(pasted[0].bounds, Rect::new(100.0, 200.0, 20.0, 10.0));
    assert_eq!(pasted[1].bounds, Rect::new(140.0, 230.0, 20.0, 10.0));
}

#[test]
fn test_pasted_copies_get_fresh_ids_and_selection() {
    let (mut editor, a, b) = editor_with_copied_pair();
    editor.paste_items(Point::new(0.0, 0.0));

    let selected = editor.selected_ids();
    assert_eq!(selected.len(), 2);
    assert!(!selected.contains(&a));
    assert!(!selected.contains(&b));
    assert!(!editor.item(a).unwrap().selected);
}

#[test]
fn test_paste_twice_gives_distinct_items() {
    let (mut editor, _, _) = editor_with_copied_pair();
    editor.paste_items(Point::new(10.0, 10.0));
    editor.paste_items(Point::new(90.0, 90.0));

    let mut ids: Vec<u64> = editor.items().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn test_group_is_remapped_on_paste() {
    let (mut editor, _, _) = editor_with_copied_pair();
    let group = editor.group_selected().unwrap();
    editor.copy_selected();
    editor.paste_items(Point::new(300.0, 300.0));

    let pasted: Vec<_> = editor.items().skip(2).collect();
    let new_group = pasted[0].group_id.unwrap();
    assert_ne!(new_group, group);
    assert_eq!(pasted[1].group_id, Some(new_group));
}

#[test]
fn test_paste_undo_redo() {
    let (mut editor, _, _) = editor_with_copied_pair();
    editor.paste_items(Point::new(50.0, 50.0));
    assert_eq!(editor.item_count(), 4);

    editor.undo();
    assert_eq!(editor.item_count(), 2);
    assert!(editor.can_redo());

    editor.redo();
    assert_eq!(editor.item_count(), 4);
    assert!(!editor.can_redo());
}

#[test]
fn test_new_command_clears_redo() {
    let (mut editor, _, _) = editor_with_copied_pair();
    editor.paste_items(Point::new(50.0, 50.0));
    editor.undo();
    editor.add_item(ItemKind::Io, Rect::new(0.0, 0.0, 5.0, 5.0));
    assert!(!editor.can_redo());
}

#[test]
fn test_cut_then_paste_moves_items() {
    let (mut editor, a, _) = editor_with_copied_pair();
    editor.cut_selected();
    assert_eq!(editor.item_count(), 0);
    assert!(editor.can_paste());

    editor.paste_items(Point::new(30.0, 20.0));
    assert_eq!(editor.item_count(), 2);
    // Same centre as before the cut, new ids
    assert!(editor.item(a).is_none());
    let bounds: Vec<Rect> = editor.items().map(|i| i.bounds).collect();
    assert_eq!(bounds[0], Rect::new(0.0, 0.0, 20.0, 10.0));
}

#[test]
fn test_clipboard_json_round_trip() {
    let (editor, _, _) = editor_with_copied_pair();
    let json = editor.clipboard_to_json().unwrap();

    let mut other = DiagramEditor::new();
    assert!(!other.can_paste());
    other.set_clipboard_from_json(&json).unwrap();
    assert_eq!(other.clipboard().len(), 2);
    assert_eq!(other.clipboard()[1].kind, ItemKind::Conditional);

    other.paste_items(Point::new(0.0, 0.0));
    assert_eq!(other.item_count(), 2);
}

#[test]
fn test_invalid_clipboard_json_is_rejected() {
    let (mut editor, _, _) = editor_with_copied_pair();
    assert!(editor.set_clipboard_from_json("not json").is_err());
    assert_eq!(editor.clipboard().len(), 2);
}

#[test]
fn test_undo_paste_restores_previous_selection() {
    let (mut editor, a, _) = editor_with_copied_pair();
    editor.select(a, false);
    editor.paste_items(Point::new(50.0, 50.0));
    assert!(!editor.selected_ids().contains(&a));

    editor.undo();
    assert_eq!(editor.selected_ids(), vec![a]);

    editor.redo();
    let selected = editor.selected_ids();
    assert_eq!(selected.len(), 2);
    assert!(!selected.contains(&a));
}

#[test]
fn test_clipboard_json_with_negative_size_is_centred() {
    let mut editor = DiagramEditor::new();
    let json = r#"[
        {"id": 1, "kind": {"type": "process"},
         "bounds": {"x": 20.0, "y": 0.0, "width": -20.0, "height": 10.0}},
        {"id": 2, "kind": {"type": "io"},
         "bounds": {"x": 40.0, "y": 30.0, "width": 20.0, "height": 10.0}}
    ]"#;
    editor.set_clipboard_from_json(json).unwrap();
    assert_eq!(editor.clipboard()[0].bounds, Rect::new(0.0, 0.0, 20.0, 10.0));

    // Bounding box (0,0)-(60,40), centre (30,20)
    editor.paste_items(Point::new(130.0, 220.0));
    let bounds: Vec<Rect> = editor.items().map(|i| i.bounds).collect();
    assert_eq!(bounds[0], Rect::new(100.0, 200.0, 20.0, 10.0));
    assert_eq!(bounds[1], Rect::new(140.0, 230.0, 20.0, 10.0));
}
