//! Message contract between the page and the solver worker. Field
//! names are camelCase on the wire so the JSON the worker posts reads
//! naturally from the page side.

use serde::{Deserialize, Serialize};

/// Page -> worker: run one puzzle. `use_local_execution` selects the
/// in-browser solver; otherwise the worker calls the solver API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub year: String,
    pub day: String,
    pub part: String,
    pub input: String,
    pub use_local_execution: bool,
}

/// Worker -> page: the outcome of one [`SolveRequest`]. Echoes the
/// execution mode back so the page credits the right run button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub is_error: bool,
    pub output: String,
    pub use_local_execution: bool,
    pub execution_time_ms: f64,
}

/// Worker -> page, sent once at startup. The page tells this apart
/// from a [`SolveResponse`] by the presence of the
/// `localExecutionAvailable` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotice {
    pub local_execution_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_on_the_wire() {
        let request = SolveRequest {
            year: "2019".to_string(),
            day: "6".to_string(),
            part: "1".to_string(),
            input: "COM)B".to_string(),
            use_local_execution: true,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"useLocalExecution\":true"), "got: {json}");

        let back: SolveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn response_carries_timing_and_mode() {
        let json = r#"{"isError":false,"output":"42","useLocalExecution":false,"executionTimeMs":12.5}"#;
        let response: SolveResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_error);
        assert_eq!(response.output, "42");
        assert!(!response.use_local_execution);
        assert_eq!(response.execution_time_ms, 12.5);
    }

    #[test]
    fn status_notice_exposes_its_marker_field() {
        let json = serde_json::to_string(&StatusNotice {
            local_execution_available: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"localExecutionAvailable":true}"#);
    }
}
