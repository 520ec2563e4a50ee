use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use advent_runner_core::{SolveRequest, FIRST_YEAR, LAST_DAY, LAST_YEAR};

use crate::capabilities::{self, Capabilities};
use crate::controls::{alert_class, input_url, ControlState, ExecutionMode, RunControls};
use crate::persisted::{self, SavedSelection};
use crate::solver_bridge::{SolverBridge, WorkerEvent};

const DEFAULT_YEAR: &str = "2024";
const DEFAULT_DAY: &str = "1";

/// One displayed solver outcome. `seq` makes consecutive identical
/// outputs distinct so the highlight effect retriggers.
#[derive(Clone, PartialEq)]
struct OutputNotice {
    text: String,
    is_error: bool,
    seq: u64,
}

/// Run-button state readable from long-lived worker closures. The
/// yew handle alone would capture a stale snapshot, so the live copy
/// is the source of truth and the handle only drives re-renders.
#[derive(Clone)]
struct ControlsStore {
    state: UseStateHandle<RunControls>,
    live: Rc<RefCell<RunControls>>,
}

impl ControlsStore {
    fn new(state: UseStateHandle<RunControls>, live: Rc<RefCell<RunControls>>) -> Self {
        Self { state, live }
    }

    fn update<F: FnOnce(&mut RunControls)>(&self, update: F) {
        let mut next = *self.live.borrow();
        update(&mut next);
        *self.live.borrow_mut() = next;
        self.state.set(next);
    }

    fn try_begin(&self, mode: ExecutionMode) -> bool {
        let mut next = *self.live.borrow();
        let began = next.try_begin(mode);
        if began {
            *self.live.borrow_mut() = next;
            self.state.set(next);
        }
        began
    }
}

#[derive(Clone)]
struct SelectionRefs {
    year: NodeRef,
    day: NodeRef,
    part: NodeRef,
}

impl SelectionRefs {
    fn read(&self) -> Option<SavedSelection> {
        let year = self.year.cast::<HtmlInputElement>()?.value();
        let day = self.day.cast::<HtmlInputElement>()?.value();
        let part = self.part.cast::<HtmlSelectElement>()?.value();
        Some(SavedSelection { year, day, part })
    }

    fn write(&self, selection: &SavedSelection) {
        if let Some(year) = self.year.cast::<HtmlInputElement>() {
            year.set_value(&selection.year);
        }
        if let Some(day) = self.day.cast::<HtmlInputElement>() {
            day.set_value(&selection.day);
        }
        if let Some(part) = self.part.cast::<HtmlSelectElement>() {
            part.set_value(&selection.part);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let controls = use_state(RunControls::new);
    let controls_live = use_mut_ref(RunControls::new);
    let store = ControlsStore::new(controls.clone(), controls_live);
    let controls_value = *controls;

    let output = use_state(|| None::<OutputNotice>);
    let output_seq = use_mut_ref(|| 0u64);
    let local_time_ms = use_state(|| None::<f64>);
    let api_time_ms = use_state(|| None::<f64>);
    let capabilities = use_state(Capabilities::default);
    let capabilities_value = *capabilities;
    let input_link = use_state(|| input_url(DEFAULT_YEAR, DEFAULT_DAY));
    let input_link_value = (*input_link).clone();
    let input_link_label = input_link_value
        .trim_start_matches("https://")
        .to_string();

    let bridge = use_mut_ref(SolverBridge::new);
    let form_ref = use_node_ref();
    let input_ref = use_node_ref();
    let output_ref = use_node_ref();
    let selection_refs = SelectionRefs {
        year: use_node_ref(),
        day: use_node_ref(),
        part: use_node_ref(),
    };

    {
        let store = store.clone();
        let output = output.clone();
        let output_seq = output_seq.clone();
        let local_time_ms = local_time_ms.clone();
        let api_time_ms = api_time_ms.clone();
        let capabilities = capabilities.clone();
        let input_link = input_link.clone();
        let bridge = bridge.clone();
        let selection_refs_boot = selection_refs.clone();
        use_effect_with((), move |_| {
            let restore = {
                let selection_refs = selection_refs_boot.clone();
                let input_link = input_link.clone();
                move || {
                    if let Some(selection) = persisted::load_selection() {
                        selection_refs.write(&selection);
                        input_link.set(input_url(&selection.year, &selection.day));
                    }
                }
            };
            restore();
            // Back/forward navigation restores the page from the
            // bfcache without re-running the mount effect.
            let pageshow = {
                let restore = restore.clone();
                web_sys::window().map(|window| {
                    EventListener::new(&window, "pageshow", move |_| {
                        restore();
                    })
                })
            };

            let on_event: Rc<dyn Fn(WorkerEvent)> = Rc::new(move |event| match event {
                WorkerEvent::Status(notice) => {
                    log!("local execution available:", notice.local_execution_available);
                    if !notice.local_execution_available {
                        store.update(|controls| controls.mark_local_unusable());
                    }
                }
                WorkerEvent::Response(response) => {
                    let mode = if response.use_local_execution {
                        ExecutionMode::Local
                    } else {
                        ExecutionMode::Api
                    };
                    store.update(|controls| controls.finish(mode));
                    match mode {
                        ExecutionMode::Local => local_time_ms.set(Some(response.execution_time_ms)),
                        ExecutionMode::Api => api_time_ms.set(Some(response.execution_time_ms)),
                    }
                    let seq = {
                        let mut seq = output_seq.borrow_mut();
                        *seq += 1;
                        *seq
                    };
                    output.set(Some(OutputNotice {
                        text: response.output,
                        is_error: response.is_error,
                        seq,
                    }));
                }
            });
            if let Err(err) = bridge.borrow().spawn(on_event) {
                log!("worker unavailable:", err);
            }

            spawn_local(async move {
                capabilities.set(capabilities::detect().await);
            });

            move || drop(pageshow)
        });
    }

    // Highlight and reveal each new outcome.
    {
        let output_ref = output_ref.clone();
        use_effect_with((*output).clone(), move |notice| {
            if notice.is_some() {
                if let Some(element) = output_ref.cast::<HtmlElement>() {
                    let class_list = element.class_list();
                    let _ = class_list.remove_1("blink");
                    // Reading a layout property restarts the CSS
                    // animation on the next add.
                    let _ = element.offset_width();
                    let _ = class_list.add_1("blink");
                    element.scroll_into_view();
                    let _ = element.focus();
                }
            }
        });
    }

    let execute = {
        let store = store.clone();
        let form_ref = form_ref.clone();
        let input_ref = input_ref.clone();
        let selection_refs = selection_refs.clone();
        let bridge = bridge.clone();
        let output = output.clone();
        let output_seq = output_seq.clone();
        let output_ref = output_ref.clone();
        Rc::new(move |mode: ExecutionMode| {
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if !form.report_validity() {
                return;
            }
            let Some(selection) = selection_refs.read() else {
                return;
            };
            let Some(input) = input_ref.cast::<HtmlTextAreaElement>() else {
                return;
            };
            if !store.try_begin(mode) {
                return;
            }
            if let Some(element) = output_ref.cast::<HtmlElement>() {
                let _ = element.class_list().remove_1("blink");
            }
            persisted::save_selection(&selection);
            let request = SolveRequest {
                year: selection.year,
                day: selection.day,
                part: selection.part,
                input: input.value(),
                use_local_execution: mode == ExecutionMode::Local,
            };
            if let Err(err) = bridge.borrow().send(&request) {
                store.update(|controls| controls.finish(mode));
                let seq = {
                    let mut seq = output_seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                output.set(Some(OutputNotice {
                    text: err,
                    is_error: true,
                    seq,
                }));
            }
        })
    };

    let on_run_api = {
        let execute = execute.clone();
        Callback::from(move |_: MouseEvent| execute(ExecutionMode::Api))
    };
    let on_run_local = {
        let execute = execute.clone();
        Callback::from(move |_: MouseEvent| execute(ExecutionMode::Local))
    };
    let on_submit = Callback::from(|event: SubmitEvent| event.prevent_default());

    let on_selection_change = {
        let selection_refs = selection_refs.clone();
        let input_link = input_link.clone();
        Callback::from(move |_: InputEvent| {
            if let Some(selection) = selection_refs.read() {
                input_link.set(input_url(&selection.year, &selection.day));
                persisted::save_selection(&selection);
            }
        })
    };

    let on_paste = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let input_ref = input_ref.clone();
            spawn_local(async move {
                match capabilities::read_clipboard_text().await {
                    Ok(text) => {
                        if let Some(input) = input_ref.cast::<HtmlTextAreaElement>() {
                            input.set_value(&text);
                        }
                    }
                    Err(err) => log!("clipboard read failed:", err),
                }
            });
        })
    };
    let on_open_file = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let input_ref = input_ref.clone();
            spawn_local(async move {
                match capabilities::pick_file_text().await {
                    Ok(Some(text)) => {
                        if let Some(input) = input_ref.cast::<HtmlTextAreaElement>() {
                            input.set_value(&text);
                        }
                    }
                    Ok(None) => {}
                    Err(err) => log!("file read failed:", err),
                }
            });
        })
    };

    let local_unusable = controls_value.state(ExecutionMode::Local) == ControlState::Unusable;
    let local_class = if local_unusable { "unusable" } else { "" };
    let local_title = if local_unusable {
        "Running in the browser is not available here"
    } else {
        ""
    };

    let output_view = match (*output).clone() {
        Some(notice) => html! {
            <div
                ref={output_ref.clone()}
                id="output"
                tabindex="-1"
                class={alert_class(notice.is_error)}
                key={notice.seq.to_string()}
            >
                { &notice.text }
            </div>
        },
        None => html! {},
    };

    let timing = |label: &str, value: Option<f64>| -> Html {
        match value {
            Some(ms) => html! { <span class="timing">{ format!("{label}: {ms:.0} ms") }</span> },
            None => html! {},
        }
    };

    html! {
        <main class="container">
            <h1>{ "Advent of Code solver" }</h1>
            <form ref={form_ref} onsubmit={on_submit}>
                <div class="selection">
                    <label for="year">{ "Year" }</label>
                    <input
                        ref={selection_refs.year.clone()}
                        id="year"
                        type="number"
                        min={FIRST_YEAR.to_string()}
                        max={LAST_YEAR.to_string()}
                        value={DEFAULT_YEAR}
                        required=true
                        oninput={on_selection_change.clone()}
                    />
                    <label for="day">{ "Day" }</label>
                    <input
                        ref={selection_refs.day.clone()}
                        id="day"
                        type="number"
                        min="1"
                        max={LAST_DAY.to_string()}
                        value={DEFAULT_DAY}
                        required=true
                        oninput={on_selection_change.clone()}
                    />
                    <label for="part">{ "Part" }</label>
                    <select
                        ref={selection_refs.part.clone()}
                        id="part"
                        oninput={on_selection_change}
                    >
                        <option value="1" selected={true}>{ "1" }</option>
                        <option value="2">{ "2" }</option>
                    </select>
                </div>
                <label for="input">
                    { "Puzzle input (" }
                    <a href={input_link_value} target="_blank" rel="noopener">
                        { input_link_label }
                    </a>
                    { ")" }
                </label>
                <div class="input-tools">
                    if capabilities_value.clipboard_read {
                        <button type="button" id="paste" onclick={on_paste}>
                            { "Paste" }
                        </button>
                    }
                    if capabilities_value.file_open_picker {
                        <button type="button" id="open-file" onclick={on_open_file}>
                            { "Open file" }
                        </button>
                    }
                </div>
                <textarea
                    ref={input_ref}
                    id="input"
                    rows="8"
                    required=true
                    placeholder="Paste the puzzle input here"
                />
                <div class="actions">
                    <button
                        type="button"
                        id="run-api"
                        onclick={on_run_api}
                        disabled={controls_value.is_disabled(ExecutionMode::Api)}
                    >
                        { "Run" }
                    </button>
                    { timing("API", *api_time_ms) }
                    <button
                        type="button"
                        id="run-local"
                        class={local_class}
                        title={local_title}
                        onclick={on_run_local}
                        disabled={controls_value.is_disabled(ExecutionMode::Local)}
                    >
                        { "Run in browser" }
                    </button>
                    { timing("browser", *local_time_ms) }
                </div>
            </form>
            { output_view }
        </main>
    }
}
