use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub active: bool,
    /// Text when active, "Active" unless given
    #[prop_or_else(|| AttrValue::from("Active"))]
    pub active_label: AttrValue,
    #[prop_or_else(|| AttrValue::from("Inactive"))]
    pub inactive_label: AttrValue,
}

#[function_component]
pub fn StatusBadge(props: &StatusBadgeProps) -> Html {
    let (class, label) = if props.active {
        (
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400",
            &props.active_label,
        )
    } else {
        (
            "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400",
            &props.inactive_label,
        )
    };

    html! {
        <span class={classes!(
            "inline-flex", "items-center", "px-2", "py-0.5", "rounded-full",
            "text-xs", "font-medium", class
        )}>
            {label}
        </span>
    }
}
