use payloads::requests::CreateCampaign;
use yew::prelude::*;

use crate::{
    components::{
        Modal,
        form::{
            FormError, INPUT_CLASS, LABEL_CLASS, PRIMARY_BUTTON_CLASS,
            SECONDARY_BUTTON_CLASS, input_value,
        },
    },
    get_api_client,
    hooks::{MutationMessages, use_mutation},
};

#[derive(Properties, PartialEq)]
pub struct AddCampaignModalProps {
    pub on_close: Callback<()>,
    pub on_created: Callback<()>,
}

#[function_component]
pub fn AddCampaignModal(props: &AddCampaignModalProps) -> Html {
    let name = use_state(String::new);

    let on_success = {
        let on_created = props.on_created.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_created.emit(());
            on_close.emit(());
        })
    };

    let create = use_mutation(
        |details: CreateCampaign| async move {
            get_api_client().create_campaign(&details).await
        },
        MutationMessages {
            success: "Campaign created successfully",
            failure: "Failed to create campaign",
            toast_errors: false,
        },
        on_success,
    );

    let on_submit = {
        let name = name.clone();
        let run = create.run.clone();
        let reject = create.reject.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match CreateCampaign::new(&name) {
                Ok(details) => run.emit(details),
                Err(error) => reject.emit(error.to_string()),
            }
        })
    };

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
    };

    let is_loading = create.is_loading;

    html! {
        <Modal
            title="Add Campaign"
            on_close={props.on_close.clone()}
            close_on_backdrop={!is_loading}
        >
            <form onsubmit={on_submit} class="space-y-4">
                <FormError message={create.error.clone()} />
                <div>
                    <label for="campaign-name" class={LABEL_CLASS}>{"Campaign Name"}</label>
                    <input
                        id="campaign-name"
                        type="text"
                        placeholder="Enter campaign name"
                        value={(*name).clone()}
                        oninput={on_input}
                        disabled={is_loading}
                        class={INPUT_CLASS}
                    />
                </div>
                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        disabled={is_loading}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {"Cancel"}
                    </button>
                    <button type="submit" disabled={is_loading} class={PRIMARY_BUTTON_CLASS}>
                        if is_loading {
                            {"Creating..."}
                        } else {
                            {"Create Campaign"}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
