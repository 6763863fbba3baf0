//! Canvas context menu.
//!
//! A right-click (or the platform's context-menu key) on the canvas pops up a
//! single "Paste" entry. If the user picks it, the click position is mapped
//! into scene coordinates and handed to the editor that owns the canvas.
//!
//! The menu itself is plain data ([`MenuModel`]); the toolkit only renders it
//! and reports which [`EntryHandle`] was picked, if any.

use std::rc::Rc;

use diagramscene_core::constants::PASTE_LABEL;
use diagramscene_core::{Error, Point, Result};
use uuid::Uuid;

use crate::viewport::SceneView;

/// A context-menu trigger delivered by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenuEvent {
    /// Trigger position relative to the canvas widget.
    pub local: Point,
    /// Trigger position in the coordinate space used to place the popup.
    pub global: Point,
}

impl ContextMenuEvent {
    pub fn new(local: Point, global: Point) -> Self {
        Self { local, global }
    }

    /// Both positions must be finite.
    pub fn is_well_formed(&self) -> bool {
        self.local.is_finite() && self.global.is_finite()
    }
}

/// Identity of one menu entry.
///
/// Handles are only minted by [`MenuModel::add_entry`] and never repeat, so
/// an entry from one menu can never be mistaken for an entry of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle(Uuid);

impl EntryHandle {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// A labelled, selectable menu entry.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    handle: EntryHandle,
    label: String,
}

impl MenuEntry {
    pub fn handle(&self) -> EntryHandle {
        self.handle
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Description of a popup menu. Building one has no side effects; nothing is
/// shown until it is passed to a [`ContextMenuPresenter`].
#[derive(Debug, Clone, Default)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns its handle.
    pub fn add_entry(&mut self, label: impl Into<String>) -> EntryHandle {
        let handle = EntryHandle::fresh();
        self.entries.push(MenuEntry {
            handle,
            label: label.into(),
        });
        handle
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, handle: EntryHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn label_of(&self, handle: EntryHandle) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.label.as_str())
    }
}

/// Toolkit side of the context menu.
pub trait ContextMenuPresenter {
    /// Shows `menu` at `global` and blocks until the user picks an entry
    /// (`Some`) or dismisses the popup (`None`).
    ///
    /// Implementations may run the toolkit's event loop while blocked, so the
    /// canvas can be repainted, panned or zoomed in the meantime.
    fn present_modal(&mut self, menu: &MenuModel, global: Point) -> Option<EntryHandle>;
}

/// The owner of the canvas, which knows how to paste at a scene position.
pub trait PasteTarget {
    fn paste_items(&self, position: Point);
}

/// What a single trigger ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContextMenuOutcome {
    /// The event carried non-finite coordinates; no menu was shown.
    Rejected,
    /// The user closed the menu without choosing.
    Dismissed,
    /// The presenter returned an entry that is not this menu's paste entry.
    Ignored,
    /// The owner was asked to paste at this scene position.
    Pasted(Point),
}

/// Right-click handler embedded in the canvas widget.
///
/// Holds no per-trigger state: each call builds, shows and drops its own
/// menu.
#[derive(Clone)]
pub struct ContextMenuController {
    owner: Rc<dyn PasteTarget>,
    paste_label: String,
}

impl ContextMenuController {
    /// Creates a controller with the default "Paste" label.
    pub fn new(owner: Rc<dyn PasteTarget>) -> Self {
        Self {
            owner,
            paste_label: PASTE_LABEL.to_string(),
        }
    }

    /// Creates a controller with a custom (e.g. translated) paste label.
    pub fn with_label(owner: Rc<dyn PasteTarget>, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(Error::configuration(
                "context menu paste label must not be empty",
            ));
        }
        Ok(Self {
            owner,
            paste_label: label,
        })
    }

    pub fn paste_label(&self) -> &str {
        &self.paste_label
    }

    /// Handles one context-menu trigger.
    ///
    /// The owner is called at most once, and only when the entry picked is
    /// the paste entry created by this very call. The click position is
    /// mapped through `view` after the menu closes, so a pan or zoom made
    /// while the menu was open is taken into account.
    pub fn handle_context_menu_trigger<P, V>(
        &self,
        event: &ContextMenuEvent,
        presenter: &mut P,
        view: &V,
    ) -> ContextMenuOutcome
    where
        P: ContextMenuPresenter + ?Sized,
        V: SceneView + ?Sized,
    {
        if !event.is_well_formed() {
            tracing::warn!(?event, "Ignoring context menu event with invalid coordinates");
            return ContextMenuOutcome::Rejected;
        }

        let mut menu = MenuModel::new();
        let paste = menu.add_entry(self.paste_label.as_str());

        tracing::debug!(global = %event.global, "Presenting canvas context menu");
        let selected = presenter.present_modal(&menu, event.global);

        match selected {
            None => {
                tracing::debug!("Context menu dismissed");
                ContextMenuOutcome::Dismissed
            }
            Some(handle) if handle != paste => {
                tracing::debug!(?handle, "Context menu returned an unknown entry");
                ContextMenuOutcome::Ignored
            }
            Some(_) => {
                let position = view.map_to_scene(event.local);
                tracing::info!(local = %event.local, scene = %position, "Pasting at context menu position");
                self.owner.paste_items(position);
                ContextMenuOutcome::Pasted(position)
            }
        }
    }
}

impl std::fmt::Debug for ContextMenuController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextMenuController")
            .field("paste_label", &self.paste_label)
            .finish_non_exhaustive()
    }
}
