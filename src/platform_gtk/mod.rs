use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{GreenSession, Readout};
use crate::core::{ViewAngles, Viewport};
use crate::render::CairoRenderer;

/// Body of the alert shown when a coordinate entry is not a number.
pub const INVALID_INPUT_MESSAGE: &str = "Enter x_0, and y_0, that are numbers!";

/// Degrees of rotation per pixel of drag.
const ROTATE_DEG_PER_PX: f64 = 0.5;

type SharedSession = Rc<RefCell<GreenSession<CairoRenderer>>>;

/// GTK4 widget tree around a `GreenSession`.
///
/// Left: the surface drawing area. Right: the `N` and `(x_0,y_0)` readout,
/// order step buttons, and the coordinate entries with their set button.
/// Dragging on the drawing area rotates the view. Callbacks only mutate the session and queue a redraw; drawing happens in
/// the area's draw function.
pub struct GtkGreenAdapter {
    session: SharedSession,
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
}

impl GtkGreenAdapter {
    #[must_use]
    pub fn new(session: GreenSession<CairoRenderer>) -> Self {
        let viewport = session.viewport();
        let readout = session.readout().clone();
        let session = Rc::new(RefCell::new(session));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        {
            let session = Rc::clone(&session);
            drawing_area.set_draw_func(move |_, context, width, height| {
                let Ok(mut session) = session.try_borrow_mut() else {
                    return;
                };
                if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) {
                    if let Err(err) = session.set_viewport(Viewport::new(width, height)) {
                        warn!(error = %err, "ignoring drawing area size");
                    }
                }
                if let Err(err) = session.render_on_cairo_context(context) {
                    warn!(error = %err, "failed to draw surface");
                }
            });
        }

        install_rotate_gesture(&session, &drawing_area);

        {
            let anchor = drawing_area.clone();
            session
                .borrow_mut()
                .set_error_notifier(move |_| show_invalid_input_alert(&anchor));
        }

        let order_label = gtk::Label::new(Some(&readout.order));
        let source_label = gtk::Label::new(Some(&readout.source));
        let display = gtk::Box::new(gtk::Orientation::Vertical, 4);
        display.add_css_class("frame");
        display.set_margin_top(5);
        display.set_margin_bottom(5);
        display.append(&order_label);
        display.append(&source_label);

        let add_button = gtk::Button::with_label("N --> N+1");
        let sub_button = gtk::Button::with_label("N --> N-1");
        let x_entry = gtk::Entry::new();
        let y_entry = gtk::Entry::new();
        let set_button = gtk::Button::with_label("Set (x0,y0)");

        let labels = ReadoutLabels {
            order: order_label,
            source: source_label,
        };

        {
            let session = Rc::clone(&session);
            let drawing_area = drawing_area.clone();
            let labels = labels.clone();
            add_button.connect_clicked(move |_| {
                if let Ok(mut session) = session.try_borrow_mut() {
                    if session.increment_order() {
                        labels.update(session.readout());
                        drawing_area.queue_draw();
                    }
                }
            });
        }

        {
            let session = Rc::clone(&session);
            let drawing_area = drawing_area.clone();
            let labels = labels.clone();
            sub_button.connect_clicked(move |_| {
                if let Ok(mut session) = session.try_borrow_mut() {
                    if session.decrement_order() {
                        labels.update(session.readout());
                        drawing_area.queue_draw();
                    }
                }
            });
        }

        {
            let session = Rc::clone(&session);
            let drawing_area = drawing_area.clone();
            let x_entry = x_entry.clone();
            let y_entry = y_entry.clone();
            set_button.connect_clicked(move |_| {
                if let Ok(mut session) = session.try_borrow_mut() {
                    let x_text = x_entry.text();
                    let y_text = y_entry.text();
                    // Rejections are surfaced by the session's error notifier.
                    if session
                        .set_source_from_text(x_text.as_str(), y_text.as_str())
                        .is_ok()
                    {
                        labels.update(session.readout());
                        drawing_area.queue_draw();
                    }
                }
            });
        }

        let controls = gtk::Box::new(gtk::Orientation::Vertical, 6);
        controls.set_margin_start(5);
        controls.set_margin_end(5);
        controls.set_valign(gtk::Align::Center);
        controls.append(&display);
        controls.append(&add_button);
        controls.append(&sub_button);
        controls.append(&labeled_entry("x_0: ", &x_entry));
        controls.append(&labeled_entry("y_0: ", &y_entry));
        controls.append(&set_button);

        let root = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        root.set_margin_top(5);
        root.set_margin_bottom(5);
        root.set_margin_start(5);
        root.set_margin_end(5);
        root.append(&drawing_area);
        root.append(&controls);

        Self {
            session,
            root,
            drawing_area,
        }
    }

    #[must_use]
    pub fn session(&self) -> SharedSession {
        Rc::clone(&self.session)
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

#[derive(Clone)]
struct ReadoutLabels {
    order: gtk::Label,
    source: gtk::Label,
}

impl ReadoutLabels {
    fn update(&self, readout: &Readout) {
        self.order.set_text(&readout.order);
        self.source.set_text(&readout.source);
    }
}

fn install_rotate_gesture(session: &SharedSession, drawing_area: &gtk::DrawingArea) {
    let drag = gtk::GestureDrag::new();
    let start_angles = Rc::new(Cell::new(ViewAngles::default()));

    {
        let session = Rc::clone(session);
        let start_angles = Rc::clone(&start_angles);
        drag.connect_drag_begin(move |_, _, _| {
            if let Ok(session) = session.try_borrow() {
                start_angles.set(session.view_angles());
            }
        });
    }

    {
        let session = Rc::clone(session);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_update(move |_, offset_x, offset_y| {
            let start = start_angles.get();
            let angles = ViewAngles {
                elevation_deg: (start.elevation_deg + offset_y * ROTATE_DEG_PER_PX)
                    .clamp(-90.0, 90.0),
                azimuth_deg: start.azimuth_deg - offset_x * ROTATE_DEG_PER_PX,
            };
            if let Ok(mut session) = session.try_borrow_mut() {
                match session.set_view_angles(angles) {
                    Ok(()) => drawing_area.queue_draw(),
                    Err(err) => warn!(error = %err, "ignoring view rotation"),
                }
            }
        });
    }

    drawing_area.add_controller(drag);
}

fn labeled_entry(caption: &str, entry: &gtk::Entry) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 4);
    row.append(&gtk::Label::new(Some(caption)));
    row.append(entry);
    row
}

fn show_invalid_input_alert(anchor: &gtk::DrawingArea) {
    let dialog = gtk::AlertDialog::builder()
        .modal(true)
        .message("Error")
        .detail(INVALID_INPUT_MESSAGE)
        .build();
    let parent = anchor.root().and_downcast::<gtk::Window>();
    dialog.show(parent.as_ref());
}
