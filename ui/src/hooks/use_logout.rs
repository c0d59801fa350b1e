use crate::Route;
use crate::contexts::{use_session, use_toast};
use yew::prelude::*;

use super::use_push_route;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let session = use_session();
    let toast = use_toast();
    let push_route = use_push_route();

    Callback::from(move |_| {
        let session = session.clone();
        let toast = toast.clone();
        let push_route = push_route.clone();

        yew::platform::spawn_local(async move {
            let api_client = crate::get_api_client();
            if let Err(e) = api_client.logout().await {
                // The local session is dropped either way
                tracing::warn!("logout request failed: {e}");
            }

            session.signed_out();
            toast.success("로그아웃되었습니다.");
            push_route.emit(Route::Login);
        });
    })
}
