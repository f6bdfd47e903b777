//! Query State
//!
//! What a component sees of a single query: data, error and fetch flag.

#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    /// Message of the last failed fetch, cleared by the next success
    pub error: Option<String>,
    pub is_fetching: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
        }
    }
}

impl<T> QueryState<T> {
    /// State seeded from whatever the cache already holds
    pub fn from_cached(data: Option<T>) -> Self {
        Self { data, ..Default::default() }
    }

    /// No data yet and nothing went wrong
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    pub fn begin_fetch(&mut self) {
        self.is_fetching = true;
    }

    pub fn receive(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
    }

    pub fn settle(&mut self) {
        self.is_fetching = false;
    }

    /// Record a failed fetch. Stale data is kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_fetching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_loading() {
        let state = QueryState::<u32>::default();
        assert!(state.is_loading());
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_seeded_state_is_not_loading() {
        assert!(!QueryState::from_cached(Some(1)).is_loading());
        assert!(QueryState::<u32>::from_cached(None).is_loading());
    }

    #[test]
    fn test_fail_keeps_stale_data() {
        let mut state = QueryState::from_cached(Some(3));
        state.begin_fetch();
        state.fail("boom");

        assert_eq!(state.data, Some(3));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_fetching);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_receive_clears_error() {
        let mut state = QueryState::default();
        state.fail("boom");
        state.receive(5);
        state.settle();

        assert_eq!(state, QueryState { data: Some(5), error: None, is_fetching: false });
    }
}
