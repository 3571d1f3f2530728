//! Example prompts a user can click to populate a question.
//!
//! The list is static: it is defined once here and never mutated. Consumers
//! receive the selected prompt through a `Callback<String>`, invoked with the
//! entry's `value`.

mod example;
mod list;

use leptos::prelude::*;

pub use example::Example;
pub use list::ExampleList;

/// A predefined suggestion shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleModel {
    /// Text displayed on the item.
    pub text: &'static str,
    /// Value handed to the selection callback.
    pub value: &'static str,
}

impl ExampleModel {
    /// Invoke `on_clicked` with this entry's value.
    pub fn select(&self, on_clicked: Callback<String>) {
        on_clicked.run(self.value.to_owned());
    }
}

/// Example prompts, in display order.
pub const EXAMPLES: &[ExampleModel] = &[
    ExampleModel {
        text: "メンバーの「所属」を更新する手順をお教えください。",
        value: "メンバーの「所属」を更新する手順をお教えください。",
    },
    ExampleModel {
        text: "プロジェクト管理者を変更する方法を教えてください。",
        value: "プロジェクト管理者を変更する方法を教えてください。",
    },
    ExampleModel {
        text: "利用者登録しているユーザをタスクにアサインする方法を教えてください。",
        value: "利用者登録しているユーザをタスクにアサインする方法を教えてください。",
    },
];
