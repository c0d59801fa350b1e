use payloads::{UserId, requests::CategoryRequest, responses::Category};
use yew::prelude::*;

use super::use_collection;
use crate::get_api_client;
use crate::sync::Change;

/// Ask for a new category. `on_done` gets the created category or the error
/// message.
pub struct CreateCategory {
    pub title: String,
    pub on_done: Callback<Result<Category, String>>,
}

pub struct CategoriesHookReturn {
    pub categories: Vec<Category>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub create: Callback<CreateCategory>,
}

/// Categories owned by the user whose id is in the route. An id that does
/// not parse loads as an empty list with an error.
#[hook]
pub fn use_categories(user_id: &str) -> CategoriesHookReturn {
    let user_id = user_id.parse::<UserId>().ok();

    let collection = use_collection(user_id, move || async move {
        let user_id = user_id.ok_or("잘못된 사용자입니다.")?;
        get_api_client()
            .list_categories(user_id)
            .await
            .map_err(|e| e.to_string())
    });

    let create = {
        let apply = collection.apply.clone();
        Callback::from(move |request: CreateCategory| {
            let apply = apply.clone();
            yew::platform::spawn_local(async move {
                let result = match user_id {
                    Some(user_id) => get_api_client()
                        .create_category(
                            user_id,
                            &CategoryRequest {
                                category_title: request.title,
                            },
                        )
                        .await
                        .map_err(|e| e.to_string()),
                    None => Err("잘못된 사용자입니다.".to_string()),
                };

                match &result {
                    Ok(category) => {
                        apply.emit(Change::Created(category.clone()))
                    }
                    Err(e) => tracing::error!("creating category failed: {e}"),
                }
                request.on_done.emit(result);
            });
        })
    };

    CategoriesHookReturn {
        categories: collection.items,
        is_loading: collection.is_loading,
        error: collection.error,
        refetch: collection.refetch,
        create,
    }
}
