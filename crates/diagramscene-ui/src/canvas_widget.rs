//! Diagram canvas - drawing area and interaction handling
//!
//! Wires GTK input on a `DrawingArea` to the editor:
//! - left click selects (Shift adds to the selection)
//! - right click, touch long-press and the Menu key open the paste menu
//! - wheel zooms around the pointer, middle drag pans
//! - Ctrl+C / Ctrl+X / Ctrl+Z / Ctrl+Shift+Z / Delete edit the selection

use std::cell::RefCell;
use std::rc::Rc;

use diagramscene_canvas::{
    ContextMenuController, ContextMenuOutcome, DiagramEditor, DiagramItem, ItemKind, Viewport,
};
use diagramscene_core::{shared, Error, Point, Result, Shared};
use diagramscene_settings::Config;
use gtk4::gdk::{Key, ModifierType};
use gtk4::prelude::*;
use gtk4::{
    cairo, DrawingArea, EventControllerKey, EventControllerMotion, EventControllerScroll,
    EventControllerScrollFlags, GestureClick, GestureDrag, GestureLongPress,
};

use crate::context_popover::GtkContextMenu;
use crate::input::{apply_drag_pan, apply_scroll_zoom, context_menu_event};

#[derive(Clone)]
pub struct DiagramCanvas {
    pub widget: DrawingArea,
    pub editor: Shared<DiagramEditor>,
    pub viewport: Shared<Viewport>,
    context_menu: ContextMenuController,
    // Widget coordinates of the pointer, used by the Menu key
    mouse_pos: Rc<RefCell<(f64, f64)>>,
    last_drag_offset: Rc<RefCell<(f64, f64)>>,
}

impl DiagramCanvas {
    pub fn new(editor: Shared<DiagramEditor>, config: &Config) -> Result<Rc<Self>> {
        let context_menu =
            ContextMenuController::with_label(editor.clone(), config.context_menu.paste_label.as_str())?;

        let mut viewport = Viewport::new(config.canvas.width, config.canvas.height);
        viewport.set_zoom(config.canvas.initial_zoom);

        let widget = DrawingArea::builder()
            .content_width(config.canvas.width as i32)
            .content_height(config.canvas.height as i32)
            .hexpand(true)
            .vexpand(true)
            .focusable(true)
            .build();

        let canvas = Rc::new(Self {
            widget,
            editor,
            viewport: shared(viewport),
            context_menu,
            mouse_pos: Rc::new(RefCell::new((0.0, 0.0))),
            last_drag_offset: Rc::new(RefCell::new((0.0, 0.0))),
        });

        canvas.connect_drawing();
        canvas.connect_input();
        Ok(canvas)
    }

    fn connect_drawing(self: &Rc<Self>) {
        let canvas = self.clone();
        self.widget.set_draw_func(move |_, cr, _w, _h| {
            if let Err(e) = canvas.draw(cr) {
                tracing::warn!(error = %e, "Canvas draw failed");
            }
        });

        let viewport = self.viewport.clone();
        self.widget.connect_resize(move |_, w, h| {
            viewport.borrow_mut().set_canvas_size(w as f64, h as f64);
        });
    }

    fn connect_input(self: &Rc<Self>) {
        let widget = &self.widget;

        let motion = EventControllerMotion::new();
        let mouse_pos = self.mouse_pos.clone();
        motion.connect_motion(move |_, x, y| {
            *mouse_pos.borrow_mut() = (x, y);
        });
        widget.add_controller(motion);

        let click_gesture = GestureClick::new();
        click_gesture.set_button(1); // Left click only
        let canvas_click = self.clone();
        click_gesture.connect_pressed(move |gesture, _n_press, x, y| {
            let additive = gesture.current_event_state().contains(ModifierType::SHIFT_MASK);
            canvas_click.widget.grab_focus();
            canvas_click.handle_click(x, y, additive);
        });
        widget.add_controller(click_gesture);

        // Right click gesture
        let right_click_gesture = GestureClick::new();
        right_click_gesture.set_button(3);
        let canvas_right_click = self.clone();
        right_click_gesture.connect_pressed(move |_gesture, _n_press, x, y| {
            canvas_right_click.handle_context_menu(x, y);
        });
        widget.add_controller(right_click_gesture);

        let long_press = GestureLongPress::new();
        long_press.set_touch_only(true);
        let canvas_long_press = self.clone();
        long_press.connect_pressed(move |_gesture, x, y| {
            canvas_long_press.handle_context_menu(x, y);
        });
        widget.add_controller(long_press);

        let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
        let canvas_scroll = self.clone();
        scroll.connect_scroll(move |_, _dx, dy| {
            let (x, y) = *canvas_scroll.mouse_pos.borrow();
            apply_scroll_zoom(&mut canvas_scroll.viewport.borrow_mut(), Point::new(x, y), dy);
            canvas_scroll.widget.queue_draw();
            glib::Propagation::Stop
        });
        widget.add_controller(scroll);

        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(2); // Middle button pans
        let canvas_drag_begin = self.clone();
        drag_gesture.connect_drag_begin(move |_, _x, _y| {
            *canvas_drag_begin.last_drag_offset.borrow_mut() = (0.0, 0.0);
        });
        let canvas_drag = self.clone();
        drag_gesture.connect_drag_update(move |_, dx, dy| {
            apply_drag_pan(
                &mut canvas_drag.viewport.borrow_mut(),
                &mut canvas_drag.last_drag_offset.borrow_mut(),
                (dx, dy),
            );
            canvas_drag.widget.queue_draw();
        });
        widget.add_controller(drag_gesture);

        let keys = EventControllerKey::new();
        let canvas_keys = self.clone();
        keys.connect_key_pressed(move |_, key, _code, state| {
            if canvas_keys.handle_key(key, state) {
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });
        widget.add_controller(keys);
    }

    /// Runs the paste context menu for a trigger at widget position `(x, y)`.
    pub fn handle_context_menu(&self, x: f64, y: f64) {
        let event = context_menu_event(x, y);
        let mut presenter = GtkContextMenu::new(&self.widget);
        let outcome = self
            .context_menu
            .handle_context_menu_trigger(&event, &mut presenter, &self.viewport);
        if matches!(outcome, ContextMenuOutcome::Pasted(_)) {
            self.widget.queue_draw();
        }
    }

    fn handle_click(&self, x: f64, y: f64, additive: bool) {
        let scene_point = self.viewport.borrow().map_to_scene(Point::new(x, y));
        let mut editor = self.editor.borrow_mut();
        let hit = editor.scene().item_at(&scene_point).map(|item| item.id);
        match hit {
            Some(id) => {
                editor.select(id, additive);
            }
            None if !additive => editor.deselect_all(),
            None => {}
        }
        drop(editor);
        self.widget.queue_draw();
    }

    fn handle_key(&self, key: Key, state: ModifierType) -> bool {
        let ctrl = state.contains(ModifierType::CONTROL_MASK);
        let shift = state.contains(ModifierType::SHIFT_MASK);

        if key == Key::Menu || (shift && key == Key::F10) {
            let (x, y) = *self.mouse_pos.borrow();
            self.handle_context_menu(x, y);
            return true;
        }

        let mut editor = self.editor.borrow_mut();
        let handled = match key.to_lower() {
            Key::c if ctrl => {
                editor.copy_selected();
                true
            }
            Key::x if ctrl => {
                editor.cut_selected();
                true
            }
            Key::z if ctrl && shift => {
                editor.redo();
                true
            }
            Key::z if ctrl => {
                editor.undo();
                true
            }
            Key::Delete => {
                editor.delete_selected();
                true
            }
            _ => false,
        };
        drop(editor);

        if handled {
            self.widget.queue_draw();
        }
        handled
    }

    fn draw(&self, cr: &cairo::Context) -> Result<()> {
        let cairo_err = |e: cairo::Error| Error::other(format!("cairo: {}", e));

        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.paint().map_err(cairo_err)?;

        let viewport = self.viewport.borrow();
        cr.save().map_err(cairo_err)?;
        cr.translate(viewport.pan_x(), viewport.pan_y());
        cr.rotate(viewport.rotation());
        cr.scale(viewport.zoom(), viewport.zoom());
        cr.set_line_width(1.5 / viewport.zoom());

        let editor = self.editor.borrow();
        for item in editor.items() {
            trace_item(cr, item);
            cr.set_source_rgb(0.96, 0.96, 0.86);
            cr.fill_preserve().map_err(cairo_err)?;
            if item.selected {
                cr.set_source_rgb(0.2, 0.4, 0.9);
            } else {
                cr.set_source_rgb(0.1, 0.1, 0.1);
            }
            cr.stroke().map_err(cairo_err)?;

            if let ItemKind::Text(text) = &item.kind {
                cr.move_to(item.bounds.left() + 4.0, item.center().y);
                cr.show_text(text).map_err(cairo_err)?;
            }
        }

        cr.restore().map_err(cairo_err)?;
        Ok(())
    }
}

fn trace_item(cr: &cairo::Context, item: &DiagramItem) {
    let b = item.bounds;
    let c = b.center();
    match item.kind {
        ItemKind::Process | ItemKind::Text(_) => cr.rectangle(b.x, b.y, b.width, b.height),
        ItemKind::Conditional => {
            cr.move_to(c.x, b.top());
            cr.line_to(b.right(), c.y);
            cr.line_to(c.x, b.bottom());
            cr.line_to(b.left(), c.y);
            cr.close_path();
        }
        ItemKind::StartEnd => {
            let r = (b.height / 2.0).min(b.width / 2.0);
            cr.new_sub_path();
            cr.arc(b.left() + r, c.y, r, std::f64::consts::FRAC_PI_2, 3.0 * std::f64::consts::FRAC_PI_2);
            cr.arc(b.right() - r, c.y, r, -std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
            cr.close_path();
        }
        ItemKind::Io => {
            let skew = b.width * 0.15;
            cr.move_to(b.left() + skew, b.top());
            cr.line_to(b.right(), b.top());
            cr.line_to(b.right() - skew, b.bottom());
            cr.line_to(b.left(), b.bottom());
            cr.close_path();
        }
    }
}
