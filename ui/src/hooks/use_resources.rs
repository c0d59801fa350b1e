use payloads::{CategoryId, FileId, responses::FileResource};
use yew::prelude::*;

use super::use_collection;
use crate::get_api_client;
use crate::sync::confirmed_removal;
use crate::utils::confirm;

pub const DELETE_CONFIRMATION: &str =
    "정말로 이 자료를 삭제하시겠습니까?\n이 작업은 되돌릴 수 없습니다.";

/// Delete one resource after asking the user. `on_error` hears about a
/// failed delete; a declined confirmation is silent.
pub struct DeleteResource {
    pub id: FileId,
    pub on_error: Callback<String>,
}

pub struct ResourcesHookReturn {
    pub resources: Vec<FileResource>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    /// Call after an upload. The upload only answers with a URL, so the
    /// list is fetched again from scratch.
    pub on_upload_success: Callback<()>,
    pub delete: Callback<DeleteResource>,
}

#[hook]
pub fn use_resources(category_id: &str) -> ResourcesHookReturn {
    let category_id = category_id.parse::<CategoryId>().ok();

    let collection = use_collection(category_id, move || async move {
        let category_id = category_id.ok_or("잘못된 카테고리입니다.")?;
        get_api_client()
            .list_files(category_id)
            .await
            .map_err(|e| e.to_string())
    });

    let delete = {
        let apply = collection.apply.clone();
        Callback::from(move |request: DeleteResource| {
            let apply = apply.clone();
            yew::platform::spawn_local(async move {
                let outcome = confirmed_removal::<FileResource, _, _, _, _>(
                    request.id,
                    || confirm(DELETE_CONFIRMATION),
                    |id| async move {
                        get_api_client()
                            .delete_file(&id)
                            .await
                            .map_err(|e| e.to_string())
                    },
                )
                .await;

                match outcome {
                    Ok(Some(change)) => apply.emit(change),
                    Ok(None) => tracing::debug!("delete declined"),
                    Err(e) => {
                        tracing::error!("deleting resource failed: {e}");
                        request.on_error.emit(e);
                    }
                }
            });
        })
    };

    ResourcesHookReturn {
        resources: collection.items,
        is_loading: collection.is_loading,
        error: collection.error,
        refetch: collection.refetch,
        on_upload_success: collection.reload,
        delete,
    }
}
