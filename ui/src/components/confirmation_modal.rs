use yew::prelude::*;

use super::Modal;

/// Asks before a destructive action.
#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Modal title (e.g., "Remove Employee")
    pub title: AttrValue,
    /// What will happen if the user confirms
    pub message: AttrValue,
    /// Confirm button text (e.g., "Remove")
    pub confirm_text: AttrValue,
    /// Called when user confirms the action
    pub on_confirm: Callback<()>,
    /// Called when user cancels or clicks backdrop
    pub on_close: Callback<()>,
    /// Whether the confirmed operation is in progress
    #[prop_or_default]
    pub is_loading: bool,
    /// Error message to display
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let on_confirm_click = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal
            title={props.title.clone()}
            on_close={props.on_close.clone()}
            close_on_backdrop={!props.is_loading}
        >
            <div class="space-y-4">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&props.message}
                </p>

                if let Some(error) = &props.error_message {
                    <div class="text-sm text-red-600 dark:text-red-400">
                        {error}
                    </div>
                }
            </div>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                           bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                           rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600
                           rounded-md disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {if props.is_loading { "Processing..." } else { &props.confirm_text }}
                </button>
            </div>
        </Modal>
    }
}
