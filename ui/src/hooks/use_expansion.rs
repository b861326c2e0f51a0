use payloads::expansion::Expansion;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ExpansionState<K>(Expansion<K>);

pub enum ExpansionAction<K> {
    Toggle(K),
    CollapseAll,
    ExpandFirst(Vec<K>),
}

impl<K: PartialEq + Clone> Reducible for ExpansionState<K> {
    type Action = ExpansionAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut expansion = self.0.clone();
        match action {
            ExpansionAction::Toggle(key) => expansion.toggle(&key),
            ExpansionAction::CollapseAll => expansion.collapse_all(),
            ExpansionAction::ExpandFirst(keys) => expansion.expand_first(&keys),
        }
        Rc::new(Self(expansion))
    }
}

pub struct ExpansionHandle<K> {
    pub expanded: Option<K>,
    pub toggle: Callback<K>,
    pub collapse_all: Callback<()>,
    pub expand_first: Callback<Vec<K>>,
}

/// At most one item of a list expanded at a time.
#[hook]
pub fn use_expansion<K>() -> ExpansionHandle<K>
where
    K: PartialEq + Clone + 'static,
{
    let state = use_reducer(|| ExpansionState(Expansion::default()));

    let toggle = {
        let state = state.clone();
        Callback::from(move |key: K| state.dispatch(ExpansionAction::Toggle(key)))
    };
    let collapse_all = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ExpansionAction::CollapseAll))
    };
    let expand_first = {
        let state = state.clone();
        Callback::from(move |keys: Vec<K>| {
            state.dispatch(ExpansionAction::ExpandFirst(keys))
        })
    };

    ExpansionHandle {
        expanded: state.0.expanded().cloned(),
        toggle,
        collapse_all,
        expand_first,
    }
}
