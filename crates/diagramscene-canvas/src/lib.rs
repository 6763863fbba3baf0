//! # DiagramScene Canvas
//!
//! The toolkit-independent half of the diagram editor's drawing surface.
//!
//! ## Components
//!
//! - **Viewport**: pan, zoom and rotation of the view; maps widget-local
//!   points into scene coordinates
//! - **Items / Scene**: the diagram items and their storage
//! - **Editor**: the owner of the canvas; selection, clipboard, paste at a
//!   scene position, undo/redo
//! - **Context menu**: the right-click controller that offers "Paste" and
//!   hands the mapped click position to the editor
//!
//! ## Architecture
//!
//! ```text
//! toolkit right-click
//!   └── ContextMenuController
//!         ├── ContextMenuPresenter (toolkit popup, blocks)
//!         ├── SceneView            (Viewport, current transform)
//!         └── PasteTarget          (DiagramEditor)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use diagramscene_canvas::{ContextMenuController, ContextMenuEvent, DiagramEditor, Viewport};
//! use diagramscene_core::{shared, Point};
//!
//! let editor = shared(DiagramEditor::new());
//! let viewport = shared(Viewport::default());
//! let controller = ContextMenuController::new(editor.clone());
//!
//! let event = ContextMenuEvent::new(Point::new(50.0, 30.0), Point::new(650.0, 430.0));
//! controller.handle_context_menu_trigger(&event, &mut presenter, &viewport);
//! ```

pub mod commands;
pub mod context_menu;
pub mod editor;
pub mod items;
pub mod scene;
pub mod viewport;

pub use commands::EditorCommand;
pub use context_menu::{
    ContextMenuController, ContextMenuEvent, ContextMenuOutcome, ContextMenuPresenter,
    EntryHandle, MenuEntry, MenuModel, PasteTarget,
};
pub use editor::DiagramEditor;
pub use items::{DiagramItem, ItemKind};
pub use scene::Scene;
pub use viewport::{SceneView, Viewport};
