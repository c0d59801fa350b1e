use yew::prelude::*;

use super::ToastItem;
use crate::contexts::toast::ToastContext;

/// Stack of live toasts in the top right corner, oldest first.
#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        tracing::error!("ToastContainer rendered outside a ToastProvider");
        return html! {};
    };

    html! {
        <div aria-live="polite" class="fixed top-4 right-4 z-50 flex flex-col gap-3 max-w-sm w-full">
            {for context.ordered().into_iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            })}
        </div>
    }
}
