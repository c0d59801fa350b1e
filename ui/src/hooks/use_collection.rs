use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::sync::{
    Change, CollectionAction, CollectionState, Keyed, RequestTracker,
};

pub struct CollectionHookReturn<T: Keyed> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    /// Clear the list, then fetch it again.
    pub reload: Callback<()>,
    /// Reconcile the list with a mutation that already succeeded.
    pub apply: Callback<Change<T>>,
}

/// Like [`use_fetch`](super::use_fetch) for lists of [`Keyed`] items,
/// with the list held in a reducer so mutations reconcile against the
/// latest state rather than the one captured at render time.
#[hook]
pub fn use_collection<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> CollectionHookReturn<T>
where
    T: Keyed + Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let state = use_reducer(CollectionState::<T>::default);
    let tracker = use_state(RequestTracker::default);

    let refetch = {
        let state = state.clone();
        let tracker = (*tracker).clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let state = state.clone();
            let tracker = tracker.clone();
            let fetch_fn = fetch_fn.clone();

            let token = tracker.issue();
            state.dispatch(CollectionAction::Loading);

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;
                if !tracker.is_current(token) {
                    tracing::debug!("dropping a superseded list response");
                    return;
                }

                match result {
                    Ok(items) => state.dispatch(CollectionAction::Loaded(items)),
                    Err(e) => {
                        tracing::error!("list fetch failed: {e}");
                        state.dispatch(CollectionAction::Failed(e));
                    }
                }
            });
        })
    };

    let reload = {
        let state = state.clone();
        let refetch = refetch.clone();
        Callback::from(move |_| {
            state.dispatch(CollectionAction::Reset);
            refetch.emit(());
        })
    };

    let apply = {
        let state = state.clone();
        Callback::from(move |change: Change<T>| {
            state.dispatch(CollectionAction::Apply(change));
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| refetch.emit(()));
    }

    {
        let tracker = (*tracker).clone();
        use_effect_with((), move |_| move || tracker.invalidate());
    }

    CollectionHookReturn {
        items: state.items.clone(),
        is_loading: state.is_loading,
        error: state.error.clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
        reload,
        apply,
    }
}
