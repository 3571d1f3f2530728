use leptos::prelude::*;

use super::{EXAMPLES, Example};

/// Renders every entry of [`EXAMPLES`] as an [`Example`].
///
/// # Example
///
/// ```rust,ignore
/// let question = RwSignal::new(String::new());
/// view! {
///     <ExampleList on_example_clicked=Callback::new(move |v| question.set(v)) />
/// }
/// ```
#[component]
pub fn ExampleList(
    /// Invoked with the value of the clicked entry.
    on_example_clicked: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="examples-list grid gap-3 md:grid-cols-3">
            {EXAMPLES
                .iter()
                .map(|example| {
                    view! {
                        <li>
                            <Example example={*example} on_clicked=on_example_clicked />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        Owner::new().with(|| {
            let on_example_clicked = Callback::new(|_: String| {});
            view! { <ExampleList on_example_clicked=on_example_clicked /> }.to_html()
        })
    }

    #[test]
    fn renders_one_item_per_example() {
        let html = render();
        assert_eq!(html.matches("<li").count(), EXAMPLES.len());
        assert_eq!(html.matches("data-example-value=").count(), EXAMPLES.len());
    }

    #[test]
    fn each_item_carries_its_own_value_and_text() {
        let html = render();
        for example in EXAMPLES {
            let attr = format!(r#"data-example-value="{}""#, example.value);
            assert_eq!(html.matches(&attr).count(), 1, "missing {attr}");
            assert!(html.contains(example.text));
        }
    }

    #[test]
    fn items_keep_declaration_order() {
        let html = render();
        let positions: Vec<usize> = EXAMPLES
            .iter()
            .map(|e| html.find(e.value).expect("value rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
