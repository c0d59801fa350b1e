use payloads::{
    CategoryId, requests::IntroduceRequest, responses::Introduce,
};
use yew::prelude::*;

use super::use_fetch;
use crate::contexts::use_toast;
use crate::get_api_client;

pub const EMPTY_INTRODUCE: &str = "빈 게시글";

/// Starting text when the owner opens the editor on a category without an
/// intro yet.
pub const INTRODUCE_TEMPLATE: &str = "## 프로젝트 개요
여기에 프로젝트에 대한 설명을 작성해주세요.

## 주요 기능
- 기능 1
- 기능 2
- 기능 3

## 사용 기술
- 기술 스택을 작성해주세요.

## 프로젝트 목표
- 목표를 작성해주세요.";

/// Save new intro content. `on_saved` runs once the backend accepted it.
pub struct SaveIntroduce {
    pub content: String,
    pub on_saved: Callback<()>,
}

pub struct IntroduceHookReturn {
    pub intro: IntroduceRequest,
    /// Whether the backend has a post for this category. Decides between
    /// create and update on save.
    pub exists: bool,
    pub is_loading: bool,
    pub is_saving: bool,
    pub save: Callback<SaveIntroduce>,
}

/// The stored intro, or a placeholder titled after the category. A failed
/// load shows the placeholder too.
fn introduce_or_default(
    fetched: Option<&Introduce>,
    category_id: Option<CategoryId>,
    category_title: &str,
) -> (IntroduceRequest, bool) {
    if let Some(stored) = fetched.cloned().and_then(Introduce::stored) {
        return (stored, true);
    }
    let title = match (category_title.is_empty(), category_id) {
        (false, _) => category_title.to_string(),
        (true, Some(id)) => format!("카테고리 {id}"),
        (true, None) => "카테고리".to_string(),
    };
    let placeholder = IntroduceRequest {
        title,
        content: EMPTY_INTRODUCE.to_string(),
    };
    (placeholder, false)
}

/// A category's intro post.
#[hook]
pub fn use_introduce(
    category_id: &str,
    category_title: &str,
) -> IntroduceHookReturn {
    let category_id = category_id.parse::<CategoryId>().ok();
    let toast = use_toast();
    let is_saving = use_state(|| false);

    let fetched = use_fetch(category_id, move || async move {
        let category_id = category_id.ok_or("잘못된 카테고리입니다.")?;
        get_api_client()
            .get_introduce(category_id)
            .await
            .map_err(|e| {
                tracing::warn!("loading intro failed: {e}");
                e.to_string()
            })
    });

    let (intro, exists) =
        introduce_or_default(fetched.data.as_ref(), category_id, category_title);

    let save = {
        let set = fetched.set.clone();
        let is_saving = is_saving.clone();
        let title = intro.title.clone();
        Callback::from(move |SaveIntroduce { content, on_saved }| {
            let Some(category_id) = category_id else {
                return;
            };
            let set = set.clone();
            let toast = toast.clone();
            let is_saving = is_saving.clone();
            let details = IntroduceRequest {
                title: title.clone(),
                content,
            };

            is_saving.set(true);
            yew::platform::spawn_local(async move {
                let client = get_api_client();
                let result = if exists {
                    client.update_introduce(category_id, &details).await
                } else {
                    client.create_introduce(category_id, &details).await
                };
                match result {
                    Ok(message) => {
                        tracing::debug!("intro saved: {message}");
                        set.emit(Introduce {
                            title: Some(details.title),
                            content: Some(details.content),
                        });
                        toast.success("소개글이 저장되었습니다.");
                        on_saved.emit(());
                    }
                    Err(e) => {
                        tracing::error!("saving intro failed: {e}");
                        toast.error(format!("소개글 저장에 실패했습니다: {e}"));
                    }
                }
                is_saving.set(false);
            });
        })
    };

    IntroduceHookReturn {
        intro,
        exists,
        is_loading: fetched.is_loading,
        is_saving: *is_saving,
        save,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_intro_exists() {
        let fetched = Introduce {
            title: Some("소개".into()),
            content: Some("## 개요".into()),
        };
        let (intro, exists) =
            introduce_or_default(Some(&fetched), Some(CategoryId(1)), "프로젝트");
        assert!(exists);
        assert_eq!(intro.title, "소개");
        assert_eq!(intro.content, "## 개요");
    }

    #[test]
    fn missing_intro_is_a_placeholder_named_after_the_category() {
        let empty = Introduce::default();
        let (intro, exists) =
            introduce_or_default(Some(&empty), Some(CategoryId(1)), "프로젝트");
        assert!(!exists);
        assert_eq!(intro.title, "프로젝트");
        assert_eq!(intro.content, EMPTY_INTRODUCE);

        // Failed load, category title not known yet
        let (intro, exists) = introduce_or_default(None, Some(CategoryId(7)), "");
        assert!(!exists);
        assert_eq!(intro.title, "카테고리 7");
    }

    #[test]
    fn template_has_the_standard_sections() {
        for heading in ["## 프로젝트 개요", "## 주요 기능", "## 사용 기술", "## 프로젝트 목표"] {
            assert!(INTRODUCE_TEMPLATE.contains(heading), "{heading}");
        }
    }
}
