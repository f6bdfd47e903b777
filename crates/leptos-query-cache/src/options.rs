//! Refetch Options

/// Events that may cause a query to fetch again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefetchTrigger {
    /// The component using the query was mounted
    Mount,
    /// The browser window regained focus
    WindowFocus,
    /// The browser went back online
    Reconnect,
}

/// Per-query refetch policy. Every trigger is enabled by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub refetch_on_mount: bool,
    pub refetch_on_window_focus: bool,
    pub refetch_on_reconnect: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            refetch_on_mount: true,
            refetch_on_window_focus: true,
            refetch_on_reconnect: true,
        }
    }
}

impl QueryOptions {
    pub fn should_refetch(&self, trigger: RefetchTrigger) -> bool {
        match trigger {
            RefetchTrigger::Mount => self.refetch_on_mount,
            RefetchTrigger::WindowFocus => self.refetch_on_window_focus,
            RefetchTrigger::Reconnect => self.refetch_on_reconnect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_allow_every_trigger() {
        let options = QueryOptions::default();
        assert!(options.should_refetch(RefetchTrigger::Mount));
        assert!(options.should_refetch(RefetchTrigger::WindowFocus));
        assert!(options.should_refetch(RefetchTrigger::Reconnect));
    }

    #[test]
    fn test_disabled_triggers_are_skipped() {
        let options = QueryOptions {
            refetch_on_window_focus: false,
            refetch_on_reconnect: false,
            ..Default::default()
        };
        assert!(options.should_refetch(RefetchTrigger::Mount));
        assert!(!options.should_refetch(RefetchTrigger::WindowFocus));
        assert!(!options.should_refetch(RefetchTrigger::Reconnect));
    }
}
