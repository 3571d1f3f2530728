use leptos::prelude::*;

use super::ExampleModel;
use crate::ui::components::LightbulbIcon;

/// A single clickable example prompt.
///
/// `data-example-value` carries the value for `static/examples.js`, which
/// fills the question box when the page runs without client-side Leptos.
#[component]
pub fn Example(
    /// Entry to render.
    example: ExampleModel,
    /// Invoked with `example.value` on click.
    on_clicked: Callback<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="example w-full flex items-start gap-3 text-left p-4 rounded-2xl bg-surfaceVariant \
                   hover:bg-surfaceContainer transition-colors"
            data-example-value={example.value}
            // `select` is the entire click behaviour; its tests cover the callback.
            on:click=move |_| example.select(on_clicked)
        >
            <LightbulbIcon class="mt-0.5 shrink-0 text-primary" />
            <span class="example__text text-sm">{example.text}</span>
        </button>
    }
}
