//! Timer chain for replay steps.
//!
//! Each [`Scheduled`] becomes one `setTimeout` with a one-shot closure that
//! performs the step and schedules its successor. The closure frees itself
//! after it fires. A step whose run was superseded is a no-op inside the
//! core, so a timer orphaned by a new command dies quietly.

use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::console;

use pinsim_core::replay::{RunId, Scheduled};

use crate::SharedApp;

/// Schedules one replay step; scheduling failures are logged to the console.
pub(crate) fn schedule_step(app: &SharedApp, step: Scheduled) {
    if let Err(err) = try_schedule(app, step) {
        console::error_1(&err);
    }
}

fn try_schedule(app: &SharedApp, step: Scheduled) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let callback = Closure::once_into_js(move || run_step(&app, step.run));
    let delay = i32::try_from(step.delay_ms).unwrap_or(i32::MAX);
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<Function>(),
        delay,
    )?;
    Ok(())
}

fn run_step(app: &SharedApp, run: RunId) {
    let outcome = {
        let mut state = app.borrow_mut();
        let state = &mut *state;
        state.driver.step(&mut state.surface, run)
    };
    match outcome {
        Ok(Some(next)) => schedule_step(app, next),
        Ok(None) => {}
        // Deliberately not caught by the step itself: the error ends the
        // timer chain here and the remaining queue stays undrained.
        Err(err) => console::error_1(&JsValue::from_str(&err.to_string())),
    }
}
