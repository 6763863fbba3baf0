//! # DiagramScene UI
//!
//! GTK4 front end for the diagram editor. The toolkit-specific code lives
//! behind the `gtk` feature; [`input`] holds the pointer handling that does
//! not depend on the toolkit.

pub mod input;

#[cfg(feature = "gtk")]
pub mod canvas_widget;
#[cfg(feature = "gtk")]
pub mod context_popover;
#[cfg(feature = "gtk")]
pub mod gtk_app;

/// Application id registered with the desktop session.
pub const APP_ID: &str = "io.github.diagramscene.DiagramScene";
