use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, CssProvider, HeaderBar, Label};

use diagramscene_canvas::{DiagramEditor, ItemKind};
use diagramscene_core::{shared, Rect, Shared};
use diagramscene_settings::Config;

use crate::canvas_widget::DiagramCanvas;
use crate::APP_ID;

const CSS: &str = "
.context-menu button { padding: 4px 12px; }
";

/// Runs the GTK application until the last window closes.
pub fn run(config: Config) -> glib::ExitCode {
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_startup(|_| load_css());

    app.connect_activate(move |app| {
        let editor = shared(DiagramEditor::new());
        seed_demo_items(&editor);

        let canvas = match DiagramCanvas::new(editor, &config) {
            Ok(canvas) => canvas,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create canvas");
                app.quit();
                return;
            }
        };

        let window = ApplicationWindow::builder()
            .application(app)
            .title("DiagramScene")
            .default_width(config.canvas.width as i32)
            .default_height(config.canvas.height as i32)
            .build();

        let header = HeaderBar::new();
        header.pack_start(&Label::new(Some(
            "Right-click to paste, Ctrl+C to copy the selection",
        )));
        window.set_titlebar(Some(&header));
        window.set_child(Some(&canvas.widget));
        window.present();
        canvas.widget.grab_focus();
    });

    // GTK must not see our own command line arguments
    app.run_with_args::<&str>(&[])
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(CSS);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

fn seed_demo_items(editor: &Shared<DiagramEditor>) {
    let mut editor = editor.borrow_mut();
    editor.add_item(ItemKind::StartEnd, Rect::new(80.0, 40.0, 140.0, 50.0));
    editor.add_item(ItemKind::Process, Rect::new(80.0, 140.0, 140.0, 60.0));
    editor.add_item(ItemKind::Conditional, Rect::new(80.0, 250.0, 140.0, 90.0));
    editor.add_item(ItemKind::Io, Rect::new(300.0, 265.0, 150.0, 60.0));
    editor.add_item(
        ItemKind::Text("right-click me".to_string()),
        Rect::new(300.0, 140.0, 150.0, 30.0),
    );
}
