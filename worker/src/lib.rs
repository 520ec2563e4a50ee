//! Solver worker: receives solve requests from the page, runs them
//! either in-browser or against the solver API, and posts the results
//! back. Compiles to an empty crate off wasm32 so workspace-wide test
//! runs stay green.

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use advent_runner_core::{solve_raw, SolveRequest, SolveResponse, StatusNotice};
    use gloo::console::warn;
    use gloo::net::http::Request;
    use js_sys::Date;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{DedicatedWorkerGlobalScope, MessageEvent};

    const API_BASE: &str = "https://advent.fly.dev";

    fn scope() -> DedicatedWorkerGlobalScope {
        js_sys::global().unchecked_into::<DedicatedWorkerGlobalScope>()
    }

    fn post(message: &impl serde::Serialize) {
        let value = match serde_wasm_bindgen::to_value(message) {
            Ok(value) => value,
            Err(err) => {
                warn!("worker: failed to serialize message:", err.to_string());
                return;
            }
        };
        if let Err(err) = scope().post_message(&value) {
            warn!("worker: failed to post message:", err);
        }
    }

    /// Runs a tiny known solve to confirm the solver code path works
    /// in this browser before advertising local execution.
    fn local_execution_available() -> bool {
        solve_raw("2019", "6", "1", "COM)A").as_deref() == Ok("1")
    }

    fn solve_locally(request: &SolveRequest) {
        let started = Date::now();
        let outcome = solve_raw(&request.year, &request.day, &request.part, &request.input);
        let execution_time_ms = Date::now() - started;
        let response = match outcome {
            Ok(output) => SolveResponse {
                is_error: false,
                output,
                use_local_execution: true,
                execution_time_ms,
            },
            Err(output) => SolveResponse {
                is_error: true,
                output,
                use_local_execution: true,
                execution_time_ms,
            },
        };
        post(&response);
    }

    fn solve_over_api(request: SolveRequest) {
        spawn_local(async move {
            let url = format!(
                "{API_BASE}/solve/{}/{}/{}",
                request.year, request.day, request.part
            );
            let started = Date::now();
            let outcome = fetch_answer(&url, &request.input).await;
            let execution_time_ms = Date::now() - started;
            let response = match outcome {
                Ok(output) => SolveResponse {
                    is_error: false,
                    output,
                    use_local_execution: false,
                    execution_time_ms,
                },
                Err(output) => SolveResponse {
                    is_error: true,
                    output,
                    use_local_execution: false,
                    execution_time_ms,
                },
            };
            post(&response);
        });
    }

    async fn fetch_answer(url: &str, input: &str) -> Result<String, String> {
        let response = Request::post(url)
            .header("content-type", "text/plain")
            .body(input)
            .map_err(|err| format!("API request could not be built: {err}"))?
            .send()
            .await
            .map_err(|err| format!("API request failed: {err}"))?;
        let body = response
            .text()
            .await
            .map_err(|err| format!("API response could not be read: {err}"))?;
        if response.ok() {
            Ok(body)
        } else {
            Err(body)
        }
    }

    fn on_message(event: MessageEvent) {
        let request: SolveRequest = match serde_wasm_bindgen::from_value(event.data()) {
            Ok(request) => request,
            Err(err) => {
                warn!("worker: unrecognized message:", err.to_string());
                return;
            }
        };
        if request.use_local_execution {
            solve_locally(&request);
        } else {
            solve_over_api(request);
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        let handler = Closure::<dyn Fn(MessageEvent)>::new(on_message);
        scope().set_onmessage(Some(handler.as_ref().unchecked_ref()));
        // The worker lives for the lifetime of the page.
        handler.forget();

        post(&StatusNotice {
            local_execution_available: local_execution_available(),
        });
    }
}
