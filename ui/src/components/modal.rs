use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Dialog over a dimmed backdrop. Clicking the backdrop closes it unless
/// `close_on_backdrop` is false, which forms use while a request is in
/// flight.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    /// Modal content (passed as children)
    pub children: Html,
    /// Called when user clicks backdrop or the close button
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                class={format!(
                    "bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                     w-full p-6 {}",
                    props.max_width
                )}
            >
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&props.title}
                    </h3>
                    <button
                        type="button"
                        onclick={on_close_click}
                        class="text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200"
                        title="Close"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
