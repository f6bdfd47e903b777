//! Todo Form Component
//!
//! Single text field plus a save button. The input is read when the form is
//! submitted and forwarded as-is; empty content is not filtered out.

use leptos::html;
use leptos::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};

/// A submitted form, as far as the todo form cares
pub trait FormSubmission {
    fn prevent_default(&self);
    /// Current value of the content field
    fn content(&self) -> String;
}

/// Stop the browser's own form navigation and pass the raw content on.
pub fn submit_form(submission: &impl FormSubmission, on_submit: impl FnOnce(String)) {
    submission.prevent_default();
    on_submit(submission.content());
}

struct DomSubmission<'a> {
    event: &'a SubmitEvent,
    input: Option<HtmlInputElement>,
}

impl FormSubmission for DomSubmission<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn content(&self) -> String {
        self.input.as_ref().map(HtmlInputElement::value).unwrap_or_default()
    }
}

/// The whole form is rebuilt whenever `loading` flips, which clears the input
/// once a save finishes.
#[component]
pub fn TodoForm(#[prop(into)] loading: Signal<bool>, on_submit: Callback<String>) -> impl IntoView {
    move || {
        let is_loading = loading.get();
        let input_ref = NodeRef::<html::Input>::new();

        let handle_submit = move |ev: SubmitEvent| {
            let submission = DomSubmission {
                event: &ev,
                input: input_ref.get_untracked(),
            };
            submit_form(&submission, |content| on_submit.run(content));
        };

        view! {
            <form class="todo-form" on:submit=handle_submit>
                <div class="todo-form-row">
                    <input
                        type="text"
                        id="content"
                        name="content"
                        autocomplete="off"
                        placeholder="Type here ..."
                        node_ref=input_ref
                    />
                    <button type="submit" class="save-btn" disabled=is_loading>
                        {if is_loading { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeSubmission {
        value: &'static str,
        prevented: Cell<bool>,
    }

    impl FormSubmission for FakeSubmission {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn content(&self) -> String {
            self.value.to_string()
        }
    }

    #[test]
    fn test_submit_forwards_raw_content() {
        let submission = FakeSubmission { value: "buy milk", prevented: Cell::new(false) };
        let mut received = Vec::new();

        submit_form(&submission, |content| received.push(content));

        assert!(submission.prevented.get());
        assert_eq!(received, vec!["buy milk".to_string()]);
    }

    #[test]
    fn test_empty_content_is_not_filtered() {
        let submission = FakeSubmission { value: "", prevented: Cell::new(false) };
        let mut received = None;

        submit_form(&submission, |content| received = Some(content));

        assert_eq!(received.as_deref(), Some(""));
    }
}
