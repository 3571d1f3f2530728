//! Chat landing page: example prompts above the question form.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, SendIcon};
use crate::ui::examples::ExampleList;

/// Id of the question textarea, shared with `static/examples.js`.
pub const QUESTION_INPUT_ID: &str = "question-input";

/// Chat page hosted in the layout's content region.
///
/// Selecting an example writes its value into the question box. The form
/// posts to the backend's chat endpoint, which is not served here.
#[component]
pub fn ChatPage(
    /// Backend endpoint the question form posts to.
    #[prop(into)]
    chat_url: String,
) -> impl IntoView {
    let question = RwSignal::new(String::new());
    let on_example_clicked = fill_question(question);

    view! {
        <div class="chat-page flex flex-col gap-8">
            <section class="flex flex-col items-center gap-6 pt-8">
                <h1 class="text-2xl md:text-3xl font-bold text-center">"Chat with your data"</h1>
                <h2 class="text-textMuted">"Ask anything or try an example"</h2>
                <ExampleList on_example_clicked=on_example_clicked />
            </section>

            <QuestionInput question=question chat_url=chat_url />
        </div>
    }
}

/// Example-selection callback that replaces the question with the chosen value.
fn fill_question(question: RwSignal<String>) -> Callback<String> {
    Callback::new(move |value: String| question.set(value))
}

/// Escape text placed inside `<textarea>`; SSR writes its children verbatim.
fn escape_textarea_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Question form bound to `question`.
#[component]
fn QuestionInput(
    question: RwSignal<String>,
    #[prop(into)]
    chat_url: String,
) -> impl IntoView {
    view! {
        <form
            class="flex gap-2 md:gap-3 p-3 md:p-5 bg-surfaceContainer rounded-2xl"
            hx-post=chat_url
            hx-ext="json-enc"
            hx-swap="none"
        >
            <textarea
                id=QUESTION_INPUT_ID
                name="question"
                placeholder="Type a new question..."
                class="flex-1 min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl bg-surface text-textPrimary \
                       placeholder:text-textMuted resize-none focus:outline-none focus:ring-2 focus:ring-primary"
                rows="2"
                required
                prop:value=move || question.get()
                on:input=move |ev| question.set(event_target_value(&ev))
            >
                {move || escape_textarea_text(&question.get())}
            </textarea>

            <Button
                variant=ButtonVariant::Primary
                size=ButtonSize::Icon
                button_type="submit"
                class="shrink-0 self-end"
            >
                <SendIcon class="h-5 w-5" />
            </Button>
        </form>
    }
}
