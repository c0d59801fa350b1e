use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::use_session;

/// `/` has no content of its own: signed in users land on their
/// categories. The router puts it behind `ProtectedRoute`, so everyone
/// else ends up on the login page.
#[function_component]
pub fn HomePage() -> Html {
    let session = use_session();
    match session.state().profile() {
        Some(profile) => html! {
            <Redirect<Route> to={Route::Categories { id: profile.id.to_string() }} />
        },
        None => html! {},
    }
}
