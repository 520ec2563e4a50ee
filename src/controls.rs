//! Per-mode run button state. Each execution mode runs at most one
//! solve at a time, independently of the other mode.

pub const INPUT_LINK_BASE: &str = "https://adventofcode.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    Local,
    Api,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    Busy,
    /// Local execution failed its startup check. Stays disabled for
    /// the rest of the page's lifetime, even if a stray local
    /// response arrives later.
    Unusable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunControls {
    local: ControlState,
    api: ControlState,
}

impl RunControls {
    pub fn new() -> Self {
        Self {
            local: ControlState::Enabled,
            api: ControlState::Enabled,
        }
    }

    pub fn state(&self, mode: ExecutionMode) -> ControlState {
        match mode {
            ExecutionMode::Local => self.local,
            ExecutionMode::Api => self.api,
        }
    }

    fn slot(&mut self, mode: ExecutionMode) -> &mut ControlState {
        match mode {
            ExecutionMode::Local => &mut self.local,
            ExecutionMode::Api => &mut self.api,
        }
    }

    /// Claims the mode for a run. Returns false while a run is
    /// already in flight or the mode is unusable.
    pub fn try_begin(&mut self, mode: ExecutionMode) -> bool {
        let slot = self.slot(mode);
        if *slot != ControlState::Enabled {
            return false;
        }
        *slot = ControlState::Busy;
        true
    }

    pub fn finish(&mut self, mode: ExecutionMode) {
        let slot = self.slot(mode);
        if *slot == ControlState::Busy {
            *slot = ControlState::Enabled;
        }
    }

    pub fn mark_local_unusable(&mut self) {
        self.local = ControlState::Unusable;
    }

    pub fn is_disabled(&self, mode: ExecutionMode) -> bool {
        self.state(mode) != ControlState::Enabled
    }
}

impl Default for RunControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Link to the puzzle input on the Advent of Code site for the
/// current selection.
pub fn input_url(year: &str, day: &str) -> String {
    format!("{INPUT_LINK_BASE}/{year}/day/{day}/input")
}

pub fn alert_class(is_error: bool) -> &'static str {
    if is_error {
        "alert alert-danger"
    } else {
        "alert alert-success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_refused_while_busy() {
        let mut controls = RunControls::new();
        assert!(controls.try_begin(ExecutionMode::Api));
        assert!(!controls.try_begin(ExecutionMode::Api));
        controls.finish(ExecutionMode::Api);
        assert!(controls.try_begin(ExecutionMode::Api));
    }

    #[test]
    fn modes_are_independent() {
        let mut controls = RunControls::new();
        assert!(controls.try_begin(ExecutionMode::Local));
        assert!(controls.try_begin(ExecutionMode::Api));
        controls.finish(ExecutionMode::Local);
        assert!(controls.is_disabled(ExecutionMode::Api));
        assert!(!controls.is_disabled(ExecutionMode::Local));
    }

    #[test]
    fn unusable_is_terminal() {
        let mut controls = RunControls::new();
        assert!(controls.try_begin(ExecutionMode::Local));
        controls.mark_local_unusable();
        // A late response from the doomed run must not revive it.
        controls.finish(ExecutionMode::Local);
        assert_eq!(controls.state(ExecutionMode::Local), ControlState::Unusable);
        assert!(!controls.try_begin(ExecutionMode::Local));
        assert!(controls.try_begin(ExecutionMode::Api));
    }

    #[test]
    fn input_link_format() {
        assert_eq!(
            input_url("2023", "9"),
            "https://adventofcode.com/2023/day/9/input"
        );
    }

    #[test]
    fn alert_class_by_outcome() {
        assert_eq!(alert_class(false), "alert alert-success");
        assert_eq!(alert_class(true), "alert alert-danger");
    }
}
