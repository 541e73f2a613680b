//! Browser frontend for the pinsim replay driver.
//!
//! Wires the replay core to a host page with four elements: a `#canvas` the
//! board picture and LED are painted on, an `#input` text field for the
//! command name, a `#run` button, and an optional `#output` log. On module
//! start the board image is loaded and drawn at 400x300; if the page address
//! contains the auto-run marker, the matching command is run as soon as the
//! image has rendered.
//!
//! All replay timing goes through `setTimeout` with one-shot closures; see
//! [`schedule`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlImageElement, HtmlInputElement, Window, console,
};

use pinsim_core::Driver;
use pinsim_core::common::constants::{AUTO_RUN_MARKER, CANVAS_HEIGHT, CANVAS_WIDTH};
use pinsim_core::module::OutputLog;
use pinsim_firmware::{SimFirmware, command_registry};

mod canvas;
mod schedule;

use crate::canvas::CanvasSurface;

/// Board picture drawn behind the LED rectangle.
const BOARD_IMAGE_SRC: &str = "pinecone.png";

/// One browser session: driver, firmware module, canvas, page log.
struct App {
    driver: Driver<SimFirmware>,
    firmware: SimFirmware,
    surface: CanvasSurface,
    log: PageLog,
}

type SharedApp = Rc<RefCell<App>>;

/// Output log that mirrors lines to the console and the `#output` element.
struct PageLog {
    output: Option<Element>,
}

impl OutputLog for PageLog {
    fn print(&mut self, line: &str) {
        console::log_1(&JsValue::from_str(line));
        if let Some(output) = &self.output {
            let mut text = output.text_content().unwrap_or_default();
            text.push_str(line);
            text.push('\n');
            output.set_text_content(Some(&text));
        }
    }
}

/// Builds the app and wires the page; runs once the wasm module loads.
///
/// # Errors
///
/// Fails if the host page is missing the canvas or its 2d context.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = document()?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| JsValue::from_str("page has no #canvas element"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#canvas is not a canvas element"))?;
    let surface = CanvasSurface::from_canvas(canvas)?;

    let registry = command_registry().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let app: SharedApp = Rc::new(RefCell::new(App {
        driver: Driver::new(registry),
        firmware: SimFirmware::new(),
        surface,
        log: PageLog {
            output: document.get_element_by_id("output"),
        },
    }));

    wire_run_button(&document, &app)?;
    load_board_image(&document, &app)
}

fn wire_run_button(document: &Document, app: &SharedApp) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("run") else {
        return Ok(());
    };
    let document = document.clone();
    let app = Rc::clone(app);
    let on_click = Closure::<dyn FnMut()>::new(move || run_from_input(&document, &app));
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives for the page lifetime.
    on_click.forget();
    Ok(())
}

fn load_board_image(document: &Document, app: &SharedApp) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;
    let document = document.clone();
    let app = Rc::clone(app);
    let loaded = image.clone();
    let on_load = Closure::once_into_js(move || {
        if let Err(err) = render_board(&document, &loaded, &app) {
            console::error_1(&err);
        }
    });
    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_src(BOARD_IMAGE_SRC);
    Ok(())
}

/// Draws the board picture at 400x300, then honors the auto-run hook.
fn render_board(
    document: &Document,
    image: &HtmlImageElement,
    app: &SharedApp,
) -> Result<(), JsValue> {
    {
        let state = app.borrow();
        state.surface.resize(CANVAS_WIDTH, CANVAS_HEIGHT);
        state
            .surface
            .draw_image(image, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT))?;
    }

    let href = window()?.location().href()?;
    if href.contains(AUTO_RUN_MARKER) {
        if let Some(input) = input_element(document) {
            input.set_value(AUTO_RUN_MARKER);
        }
        run_command(app, AUTO_RUN_MARKER);
    }
    Ok(())
}

fn run_from_input(document: &Document, app: &SharedApp) {
    if let Some(input) = input_element(document) {
        run_command(app, &input.value());
    }
}

/// Runs a command and schedules the first replay step, if any.
fn run_command(app: &SharedApp, raw: &str) {
    let scheduled = {
        let mut state = app.borrow_mut();
        let state = &mut *state;
        state
            .driver
            .run_command(&mut state.firmware, raw, &mut state.log)
    };
    if let Some(step) = scheduled {
        schedule::schedule_step(app, step);
    }
}

fn input_element(document: &Document) -> Option<HtmlInputElement> {
    document
        .get_element_by_id("input")
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}
