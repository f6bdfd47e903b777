//! Mutations

use std::future::Future;

use leptos::prelude::*;

/// Await `request`, then hand the result to `on_success` before returning it.
///
/// `on_success` runs at most once and never on failure.
pub async fn run_mutation<T, E, Fut, S>(request: Fut, on_success: S) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    S: FnOnce(&T),
{
    let data = request.await?;
    on_success(&data);
    Ok(data)
}

/// Loading flag for an in-flight mutation
#[derive(Clone, Copy)]
pub struct MutationHandle {
    is_loading: RwSignal<bool>,
}

impl MutationHandle {
    pub fn is_loading(&self) -> Signal<bool> {
        self.is_loading.read_only().into()
    }

    /// Run `request` with the loading flag raised.
    pub async fn track<Fut: Future>(&self, request: Fut) -> Fut::Output {
        self.is_loading.set(true);
        let output = request.await;
        self.is_loading.try_set(false);
        output
    }
}

pub fn use_mutation() -> MutationHandle {
    MutationHandle {
        is_loading: RwSignal::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_on_success_sees_data_before_return() {
        let seen = RefCell::new(None);
        let result: Result<u32, String> = run_mutation(async { Ok(42) }, |data| {
            *seen.borrow_mut() = Some(*data);
        })
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(*seen.borrow(), Some(42));
    }

    #[tokio::test]
    async fn test_failure_skips_on_success() {
        let called = RefCell::new(false);
        let result: Result<u32, String> = run_mutation(async { Err("down".to_string()) }, |_| {
            *called.borrow_mut() = true;
        })
        .await;

        assert_eq!(result, Err("down".to_string()));
        assert!(!*called.borrow());
    }

    #[tokio::test]
    async fn test_track_raises_loading_while_pending() {
        let owner = Owner::new();
        let (handle, loading) = owner.with(|| {
            let handle = use_mutation();
            (handle, handle.is_loading())
        });
        assert!(!loading.get_untracked());

        let output = handle
            .track(async {
                assert!(loading.get_untracked());
                7
            })
            .await;

        assert_eq!(output, 7);
        assert!(!loading.get_untracked());
        owner.cleanup();
    }

    #[tokio::test]
    async fn test_track_lowers_loading_after_failure() {
        let owner = Owner::new();
        let (handle, loading) = owner.with(|| {
            let handle = use_mutation();
            (handle, handle.is_loading())
        });

        let result: Result<(), String> = handle.track(async { Err("down".to_string()) }).await;

        assert!(result.is_err());
        assert!(!loading.get_untracked());
        owner.cleanup();
    }
}
