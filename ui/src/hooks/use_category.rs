use payloads::{APIClient, CategoryId, UserId, responses::Category};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

pub const CATEGORY_NOT_FOUND: &str = "카테고리를 찾을 수 없습니다.";

/// A single category, looked up in its owner's list.
#[hook]
pub fn use_category(
    user_id: &str,
    category_id: &str,
) -> FetchHookReturn<Category> {
    let user_id = user_id.parse::<UserId>().ok();
    let category_id = category_id.parse::<CategoryId>().ok();

    use_fetch((user_id, category_id), move || async move {
        load_category(&get_api_client(), user_id, category_id).await
    })
}

/// Whatever goes wrong, whether a bad id, a failed request or a missing
/// category, the error is [`CATEGORY_NOT_FOUND`].
pub(crate) async fn load_category(
    client: &APIClient,
    user_id: Option<UserId>,
    category_id: Option<CategoryId>,
) -> Result<Category, String> {
    let (Some(user_id), Some(category_id)) = (user_id, category_id) else {
        return Err(CATEGORY_NOT_FOUND.to_string());
    };
    match client.find_category(user_id, category_id).await {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(CATEGORY_NOT_FOUND.to_string()),
        Err(e) => {
            tracing::error!("loading categories failed: {e}");
            Err(CATEGORY_NOT_FOUND.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn unreachable_client() -> APIClient {
        APIClient {
            address: "http://127.0.0.1:9".into(),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn unparsable_ids_never_reach_the_backend() {
        let client = unreachable_client();
        for (user_id, category_id) in [
            (None, Some(CategoryId(1))),
            (Some(UserId(5)), None),
            (None, None),
        ] {
            assert_eq!(
                block_on(load_category(&client, user_id, category_id)),
                Err(CATEGORY_NOT_FOUND.to_string())
            );
        }
    }

    #[test]
    fn route_segments_that_are_not_ids_do_not_parse() {
        assert!("abc".parse::<CategoryId>().is_err());
        assert!("".parse::<UserId>().is_err());
        assert_eq!("99".parse::<CategoryId>(), Ok(CategoryId(99)));
    }
}
