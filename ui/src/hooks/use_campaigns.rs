use payloads::{
    debounce::SEARCH_DEBOUNCE_MS, filters::filter_campaigns,
    responses::Campaign, stats::CampaignStats,
};
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchHookReturn, use_debounced, use_fetch};
use crate::get_api_client;

#[hook]
pub fn use_campaigns() -> FetchHookReturn<Vec<Campaign>> {
    use_fetch((), || async move {
        get_api_client()
            .list_campaigns()
            .await
            .map_err(|e| e.message_or("Failed to fetch campaigns"))
    })
}

pub struct CampaignSearch {
    pub input: String,
    pub on_input: Callback<String>,
    /// The campaigns matching the debounced term.
    pub filtered: Rc<Vec<Campaign>>,
    pub is_searching: bool,
}

/// Client side search over already fetched campaigns.
#[hook]
pub fn use_campaign_search(campaigns: Vec<Campaign>) -> CampaignSearch {
    let input = use_state(String::new);
    let term = use_debounced((*input).clone(), SEARCH_DEBOUNCE_MS);

    let filtered = use_memo((campaigns, term.clone()), |(campaigns, term)| {
        filter_campaigns(campaigns, term)
    });

    let on_input = {
        let input = input.clone();
        Callback::from(move |value: String| input.set(value))
    };

    CampaignSearch {
        input: (*input).clone(),
        on_input,
        filtered,
        is_searching: !term.trim().is_empty(),
    }
}

#[hook]
pub fn use_campaign_stats(campaigns: Vec<Campaign>) -> Rc<CampaignStats> {
    use_memo(campaigns, |campaigns| CampaignStats::compute(campaigns))
}
