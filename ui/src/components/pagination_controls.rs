use payloads::{
    Pagination,
    pagination::{
        PageItem, compact_window, ellipsis_window, in_range, is_visible,
        parse_jump, showing_range,
    },
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn button_class(disabled: bool) -> &'static str {
    if disabled {
        "px-3 py-1.5 border border-neutral-300 dark:border-neutral-600 \
         rounded-md text-sm font-medium text-neutral-400 \
         dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
         cursor-not-allowed"
    } else {
        "px-3 py-1.5 border border-neutral-300 dark:border-neutral-600 \
         rounded-md text-sm font-medium text-neutral-700 \
         dark:text-neutral-300 bg-white dark:bg-neutral-700 \
         hover:bg-neutral-50 dark:hover:bg-neutral-600 \
         transition-colors duration-200"
    }
}

fn page_class(current: bool) -> &'static str {
    if current {
        "px-3 py-1.5 rounded-md text-sm font-medium text-white \
         bg-neutral-900 dark:bg-neutral-100 dark:text-neutral-900"
    } else {
        "px-3 py-1.5 rounded-md text-sm font-medium text-neutral-700 \
         dark:text-neutral-300 hover:bg-neutral-100 \
         dark:hover:bg-neutral-700 transition-colors duration-200"
    }
}

/// Emit `page` if it exists. Out of range pages are ignored.
fn go_to(on_page_change: &Callback<u64>, page: u64, total_pages: u64) -> Callback<MouseEvent> {
    let on_page_change = on_page_change.clone();
    Callback::from(move |_: MouseEvent| {
        if in_range(page, total_pages) {
            on_page_change.emit(page);
        }
    })
}

fn showing_text(pagination: &Pagination) -> String {
    let (start, end) =
        showing_range(pagination.page, pagination.limit, pagination.total);
    format!("Showing {} to {} of {} results", start, end, pagination.total)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub pagination: Pagination,
    /// Called with the new 1-based page
    pub on_page_change: Callback<u64>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

/// Previous/next with a sliding window of up to five page numbers.
#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Pagination {
        page, total_pages, ..
    } = props.pagination;

    if !is_visible(total_pages) {
        return html! {};
    }

    let prev_disabled = page <= 1 || props.is_loading;
    let next_disabled = page >= total_pages || props.is_loading;

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {showing_text(&props.pagination)}
            </span>

            <div class="flex items-center gap-1">
                <button
                    onclick={go_to(&props.on_page_change, page.saturating_sub(1), total_pages)}
                    disabled={prev_disabled}
                    class={button_class(prev_disabled)}
                >
                    {"Previous"}
                </button>
                {for compact_window(page, total_pages).into_iter().map(|number| html! {
                    <button
                        key={number.to_string()}
                        onclick={go_to(&props.on_page_change, number, total_pages)}
                        disabled={props.is_loading}
                        class={page_class(number == page)}
                    >
                        {number}
                    </button>
                })}
                <button
                    onclick={go_to(&props.on_page_change, page + 1, total_pages)}
                    disabled={next_disabled}
                    class={button_class(next_disabled)}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

/// First, last and neighbouring pages with ellipses between, plus a box to
/// jump straight to a page.
#[function_component]
pub fn PageNavigator(props: &Props) -> Html {
    let Pagination {
        page, total_pages, ..
    } = props.pagination;
    let jump_ref = use_node_ref();
    let jump_error = use_state(|| false);

    let on_jump = {
        let jump_ref = jump_ref.clone();
        let jump_error = jump_error.clone();
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = jump_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match parse_jump(&input.value(), total_pages) {
                Some(target) => {
                    jump_error.set(false);
                    input.set_value("");
                    on_page_change.emit(target);
                }
                None => jump_error.set(true),
            }
        })
    };

    if !is_visible(total_pages) {
        return html! {};
    }

    let prev_disabled = page <= 1 || props.is_loading;
    let next_disabled = page >= total_pages || props.is_loading;

    html! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-3 mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {showing_text(&props.pagination)}
            </span>

            <div class="flex items-center gap-1">
                <button
                    onclick={go_to(&props.on_page_change, 1, total_pages)}
                    disabled={prev_disabled}
                    class={button_class(prev_disabled)}
                    title="First page"
                >
                    {"«"}
                </button>
                <button
                    onclick={go_to(&props.on_page_change, page.saturating_sub(1), total_pages)}
                    disabled={prev_disabled}
                    class={button_class(prev_disabled)}
                >
                    {"‹"}
                </button>
                {for ellipsis_window(page, total_pages).into_iter().enumerate().map(|(index, item)| match item {
                    PageItem::Page(number) => html! {
                        <button
                            key={format!("page-{number}")}
                            onclick={go_to(&props.on_page_change, number, total_pages)}
                            disabled={props.is_loading}
                            class={page_class(number == page)}
                        >
                            {number}
                        </button>
                    },
                    PageItem::Ellipsis => html! {
                        <span
                            key={format!("gap-{index}")}
                            class="px-2 text-sm text-neutral-500 dark:text-neutral-400"
                        >
                            {"…"}
                        </span>
                    },
                })}
                <button
                    onclick={go_to(&props.on_page_change, page + 1, total_pages)}
                    disabled={next_disabled}
                    class={button_class(next_disabled)}
                >
                    {"›"}
                </button>
                <button
                    onclick={go_to(&props.on_page_change, total_pages, total_pages)}
                    disabled={next_disabled}
                    class={button_class(next_disabled)}
                    title="Last page"
                >
                    {"»"}
                </button>
            </div>

            <form onsubmit={on_jump} class="flex items-center gap-2">
                <label class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Go to"}
                </label>
                <input
                    ref={jump_ref}
                    type="number"
                    min="1"
                    max={total_pages.to_string()}
                    class={classes!(
                        "w-16", "px-2", "py-1", "text-sm", "border", "rounded-md",
                        "bg-white", "dark:bg-neutral-700",
                        if *jump_error { "border-red-500" } else { "border-neutral-300 dark:border-neutral-600" }
                    )}
                />
                <button type="submit" class={button_class(props.is_loading)} disabled={props.is_loading}>
                    {"Go"}
                </button>
            </form>
        </div>
    }
}
