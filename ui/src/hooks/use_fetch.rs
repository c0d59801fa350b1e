use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;
use crate::sync::RequestTracker;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    /// Store a value the caller got some other way, e.g. the response to a
    /// save. Any fetch still in flight is discarded.
    pub set: Callback<T>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: spinner
    /// - No data + error: the error
    /// - Has data: `render_fn(data, is_loading)`
    pub fn render<F>(&self, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        match self.data.as_ref() {
            Some(data) => render_fn(data, self.is_loading),
            None => match &self.error {
                Some(error) if !self.is_loading => html! {
                    <div class="p-4 rounded-md bg-red-50 border border-red-200">
                        <p class="text-sm text-red-700">{error}</p>
                    </div>
                },
                _ => html! { <crate::components::Spinner /> },
            },
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` change. Each fetch takes a token
/// from a [`RequestTracker`] so that a slow response to an older request
/// can never overwrite a newer one. On failure the data is cleared and the
/// error kept.
///
/// # Example
///
/// ```rust
/// #[hook]
/// pub fn use_profile(user_id: UserId) -> FetchHookReturn<UserProfile> {
///     use_fetch(user_id, move || async move {
///         get_api_client()
///             .get_profile(user_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| true);
    let tracker = use_state(RequestTracker::default);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let tracker = (*tracker).clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let tracker = tracker.clone();
            let fetch_fn = fetch_fn.clone();

            let token = tracker.issue();
            is_loading.set(true);
            error.set(None);

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;
                if !tracker.is_current(token) {
                    tracing::debug!("dropping a superseded response");
                    return;
                }

                match result {
                    Ok(result) => data.set(FetchState::Fetched(result)),
                    Err(e) => {
                        tracing::error!("fetch failed: {e}");
                        data.set(FetchState::NotFetched);
                        error.set(Some(e));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let set = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let tracker = (*tracker).clone();

        Callback::from(move |value: T| {
            tracker.invalidate();
            data.set(FetchState::Fetched(value));
            error.set(None);
            is_loading.set(false);
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| refetch.emit(()));
    }

    // Late responses must not touch an unmounted component
    {
        let tracker = (*tracker).clone();
        use_effect_with((), move |_| move || tracker.invalidate());
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
        set,
    }
}
