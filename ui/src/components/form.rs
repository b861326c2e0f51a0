//! Classes and small pieces shared by the dashboard's forms.

use yew::prelude::*;

pub const LABEL_CLASS: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1";

pub const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border border-neutral-300 \
    dark:border-neutral-600 rounded-md shadow-sm bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500 \
    disabled:opacity-50 disabled:cursor-not-allowed";

pub const PRIMARY_BUTTON_CLASS: &str = "px-4 py-2 text-sm font-medium text-white \
    bg-neutral-900 hover:bg-neutral-800 \
    dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 \
    rounded-md disabled:opacity-50 disabled:cursor-not-allowed \
    transition-colors duration-200";

pub const SECONDARY_BUTTON_CLASS: &str = "px-4 py-2 text-sm font-medium \
    text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 \
    border border-neutral-300 dark:border-neutral-600 rounded-md \
    hover:bg-neutral-50 dark:hover:bg-neutral-600 \
    disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

#[derive(Properties, PartialEq)]
pub struct FormErrorProps {
    pub message: Option<String>,
}

/// Inline error above a form's fields. Renders nothing without a message.
#[function_component]
pub fn FormError(props: &FormErrorProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="mb-4 p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
            </div>
        },
        None => html! {},
    }
}

/// The value of the element that fired an input or change event.
pub fn input_value(e: &Event) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn select_value(e: &Event) -> String {
    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
    select.value()
}
