use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="p-4 rounded-lg bg-white dark:bg-neutral-800 shadow-sm border border-neutral-200 dark:border-neutral-700">
            <p class="text-sm text-neutral-500 dark:text-neutral-400">{&props.title}</p>
            <p class="mt-1 text-2xl font-semibold text-neutral-900 dark:text-neutral-100">
                {&props.value}
            </p>
            if let Some(description) = &props.description {
                <p class="mt-1 text-xs text-neutral-500 dark:text-neutral-400">{description}</p>
            }
        </div>
    }
}
