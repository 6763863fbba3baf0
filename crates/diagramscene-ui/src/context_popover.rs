//! GTK popover that shows a [`MenuModel`] and waits for the user.

use std::cell::Cell;
use std::rc::Rc;

use diagramscene_canvas::{ContextMenuPresenter, EntryHandle, MenuModel};
use diagramscene_core::Point;
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Orientation, Popover, PositionType};

/// Presents context menus as a popover attached to `parent`.
pub struct GtkContextMenu<'a> {
    parent: &'a gtk4::Widget,
}

impl<'a> GtkContextMenu<'a> {
    pub fn new(parent: &'a impl IsA<gtk4::Widget>) -> Self {
        Self {
            parent: parent.upcast_ref(),
        }
    }
}

impl ContextMenuPresenter for GtkContextMenu<'_> {
    fn present_modal(&mut self, menu: &MenuModel, global: Point) -> Option<EntryHandle> {
        let popover = Popover::new();
        popover.set_parent(self.parent);
        popover.set_has_arrow(false);
        popover.set_autohide(true);
        let rect = gtk4::gdk::Rectangle::new(global.x as i32, global.y as i32, 1, 1);
        popover.set_pointing_to(Some(&rect));
        popover.set_position(PositionType::Bottom);

        let vbox = Box::new(Orientation::Vertical, 0);
        vbox.add_css_class("context-menu");

        let chosen: Rc<Cell<Option<EntryHandle>>> = Rc::new(Cell::new(None));
        for entry in menu.entries() {
            let btn = Button::builder()
                .label(entry.label())
                .has_frame(false)
                .halign(Align::Start)
                .build();

            let chosen = chosen.clone();
            let popover_clone = popover.clone();
            let handle = entry.handle();
            btn.connect_clicked(move |_| {
                chosen.set(Some(handle));
                popover_clone.popdown();
            });
            vbox.append(&btn);
        }
        popover.set_child(Some(&vbox));

        // Nested loop: the canvas keeps repainting and reacting to scroll
        // while the popover is open.
        let main_loop = glib::MainLoop::new(None, false);
        let loop_clone = main_loop.clone();
        popover.connect_closed(move |_| loop_clone.quit());

        popover.popup();
        main_loop.run();
        popover.unparent();

        chosen.get()
    }
}
