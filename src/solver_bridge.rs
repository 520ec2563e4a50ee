//! Owns the solver web worker. Spawns it, keeps its event closures
//! alive, and translates incoming messages into typed events for the
//! page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::warn;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::{MessageEvent, Worker};

use advent_runner_core::{SolveRequest, SolveResponse, StatusNotice};

pub const WORKER_SCRIPT_URL: &str = "./worker.js";

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    Status(StatusNotice),
    Response(SolveResponse),
}

struct WorkerHandlers {
    _onmessage: Closure<dyn Fn(MessageEvent)>,
    _onerror: Closure<dyn Fn(web_sys::Event)>,
}

pub struct SolverBridge {
    worker: Rc<RefCell<Option<Worker>>>,
    handlers: Rc<RefCell<Option<WorkerHandlers>>>,
}

impl SolverBridge {
    pub fn new() -> Self {
        Self {
            worker: Rc::new(RefCell::new(None)),
            handlers: Rc::new(RefCell::new(None)),
        }
    }

    pub fn spawn(&self, on_event: Rc<dyn Fn(WorkerEvent)>) -> Result<(), String> {
        if self.worker.borrow().is_some() {
            return Ok(());
        }
        let worker = Worker::new(WORKER_SCRIPT_URL)
            .map_err(|_| format!("could not start worker from {WORKER_SCRIPT_URL}"))?;

        let on_event_for_message = on_event.clone();
        let onmessage = Closure::<dyn Fn(MessageEvent)>::new(move |event: MessageEvent| {
            match classify_message(event.data()) {
                Some(worker_event) => on_event_for_message(worker_event),
                None => warn!("unrecognized worker message"),
            }
        });
        // A worker that fails to load means local execution is gone.
        let onerror = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
            warn!("solver worker failed");
            on_event(WorkerEvent::Status(StatusNotice {
                local_execution_available: false,
            }));
        });
        worker.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        worker.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        *self.handlers.borrow_mut() = Some(WorkerHandlers {
            _onmessage: onmessage,
            _onerror: onerror,
        });
        *self.worker.borrow_mut() = Some(worker);
        Ok(())
    }

    pub fn send(&self, request: &SolveRequest) -> Result<(), String> {
        let worker = self.worker.borrow();
        let worker = worker.as_ref().ok_or_else(|| "worker is not running".to_string())?;
        let value = serde_wasm_bindgen::to_value(request)
            .map_err(|err| format!("could not serialize request: {err}"))?;
        worker
            .post_message(&value)
            .map_err(|_| "could not post request to worker".to_string())
    }
}

/// The worker sends two message shapes; the status notice is the one
/// carrying `localExecutionAvailable`.
fn classify_message(data: JsValue) -> Option<WorkerEvent> {
    let marker = JsValue::from_str("localExecutionAvailable");
    if Reflect::has(&data, &marker).unwrap_or(false) {
        let notice: StatusNotice = serde_wasm_bindgen::from_value(data).ok()?;
        return Some(WorkerEvent::Status(notice));
    }
    let response: SolveResponse = serde_wasm_bindgen::from_value(data).ok()?;
    Some(WorkerEvent::Response(response))
}
