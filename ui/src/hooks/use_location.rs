use payloads::{
    UserId, requests::LocationUpdate, responses::LocationResponse,
};
use yew::prelude::*;

use super::use_fetch;
use crate::contexts::use_toast;
use crate::get_api_client;

pub struct LocationHookReturn {
    /// Zero coordinates and empty fields until a location has loaded.
    pub location: LocationResponse,
    pub is_loading: bool,
    pub is_saving: bool,
    pub save: Callback<LocationUpdate>,
}

/// A user's stored location and contact details. A failed load keeps the
/// empty default; it is not an error for a user to have no location yet.
#[hook]
pub fn use_location(user_id: &str) -> LocationHookReturn {
    let user_id = user_id.parse::<UserId>().ok();
    let toast = use_toast();
    let is_saving = use_state(|| false);

    let fetched = use_fetch(user_id, move || async move {
        let user_id = user_id.ok_or("잘못된 사용자입니다.")?;
        get_api_client()
            .get_user_location(user_id)
            .await
            .map_err(|e| e.to_string())
    });

    let save = {
        let set = fetched.set.clone();
        let is_saving = is_saving.clone();
        Callback::from(move |update: LocationUpdate| {
            let Some(user_id) = user_id else {
                return;
            };
            let set = set.clone();
            let toast = toast.clone();
            let is_saving = is_saving.clone();

            is_saving.set(true);
            yew::platform::spawn_local(async move {
                match get_api_client()
                    .update_user_location(user_id, &update)
                    .await
                {
                    Ok(saved) => {
                        set.emit(saved);
                        toast.success("위치 정보가 저장되었습니다.");
                    }
                    Err(e) => {
                        tracing::error!("saving location failed: {e}");
                        toast.error(format!("위치 저장에 실패했습니다: {e}"));
                    }
                }
                is_saving.set(false);
            });
        })
    };

    LocationHookReturn {
        location: fetched.data.as_ref().cloned().unwrap_or_default(),
        is_loading: fetched.is_loading,
        is_saving: *is_saving,
        save,
    }
}
