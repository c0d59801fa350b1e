use payloads::{CategoryId, FileId, UserId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{FileUpload, MarkdownEditor, MarkdownText, ResourceList};
use crate::contexts::{use_session, use_toast};
use crate::hooks::{
    DeleteResource, INTRODUCE_TEMPLATE, SaveIntroduce, use_category,
    use_introduce, use_push_route, use_resources, use_title,
};
use crate::utils::confirm;

const ALLOWED_UPLOAD_TYPES: [&str; 4] = ["image", "pdf", "text", "zip"];

const CATEGORY_DELETE_CONFIRMATION: &str =
    "이 카테고리와 안의 모든 자료가 삭제됩니다. 계속하시겠습니까?";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_id: AttrValue,
    pub category_id: AttrValue,
}

#[function_component]
pub fn CategoryPage(props: &Props) -> Html {
    let session = use_session();
    let toast = use_toast();
    let push_route = use_push_route();
    let category = use_category(&props.user_id, &props.category_id);
    let resources = use_resources(&props.category_id);
    let category_title = category
        .data
        .as_ref()
        .map(|c| c.category_title.clone())
        .unwrap_or_default();
    let introduce = use_introduce(&props.category_id, &category_title);
    let is_deleting = use_state(|| false);
    let draft = use_state(|| None::<String>);

    {
        let draft = draft.clone();
        use_effect_with(props.category_id.clone(), move |_| draft.set(None));
    }

    use_title(if category_title.is_empty() {
        "카테고리"
    } else {
        category_title.as_str()
    });

    let can_edit = session.state().owns(props.user_id.parse::<UserId>().ok());
    let category_id = props.category_id.parse::<CategoryId>().ok();

    let on_delete_resource = {
        let delete = resources.delete.clone();
        let toast = toast.clone();
        Callback::from(move |id: FileId| {
            let toast = toast.clone();
            delete.emit(DeleteResource {
                id,
                on_error: Callback::from(move |e: String| {
                    toast.error(format!("자료 삭제에 실패했습니다: {e}"))
                }),
            });
        })
    };

    let on_delete_category = {
        let toast = toast.clone();
        let push_route = push_route.clone();
        let is_deleting = is_deleting.clone();
        let user_id = props.user_id.to_string();

        Callback::from(move |_: MouseEvent| {
            let Some(category_id) = category_id else {
                return;
            };
            if !confirm(CATEGORY_DELETE_CONFIRMATION) {
                return;
            }

            let toast = toast.clone();
            let push_route = push_route.clone();
            let is_deleting = is_deleting.clone();
            let user_id = user_id.clone();

            is_deleting.set(true);
            yew::platform::spawn_local(async move {
                match crate::get_api_client().delete_category(category_id).await {
                    Ok(message) => {
                        tracing::debug!("category deleted: {message}");
                        toast.success("카테고리가 삭제되었습니다.");
                        push_route.emit(Route::Categories { id: user_id });
                    }
                    Err(e) => {
                        tracing::error!("deleting category failed: {e}");
                        toast.error(format!("카테고리 삭제에 실패했습니다: {e}"));
                        is_deleting.set(false);
                    }
                }
            });
        })
    };

    let start_editing = {
        let draft = draft.clone();
        let content = introduce
            .exists
            .then(|| introduce.intro.content.clone())
            .unwrap_or_else(|| INTRODUCE_TEMPLATE.to_string());
        Callback::from(move |_: MouseEvent| draft.set(Some(content.clone())))
    };

    let cancel_editing = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(None))
    };

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |text: String| draft.set(Some(text)))
    };

    let on_save_intro = {
        let draft = draft.clone();
        let save = introduce.save.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(content) = (*draft).clone() else {
                return;
            };
            let draft = draft.clone();
            save.emit(SaveIntroduce {
                content,
                on_saved: Callback::from(move |()| draft.set(None)),
            });
        })
    };

    let header = category.render(|category, _| {
        html! {
            <div>
                <h1 class="text-3xl font-bold">{&category.category_title}</h1>
                if !can_edit {
                    <p class="text-sm text-orange-500 mt-1">{"읽기 전용 모드"}</p>
                }
            </div>
        }
    });

    let resource_section = if resources.is_loading && resources.resources.is_empty() {
        html! { <crate::components::Spinner label="자료를 불러오는 중..." /> }
    } else if let Some(error) = &resources.error {
        html! {
            <div class="p-4 rounded-md bg-red-50 border border-red-200">
                <p class="text-sm text-red-700">{error}</p>
            </div>
        }
    } else {
        html! {
            <ResourceList
                resources={resources.resources.clone()}
                {can_edit}
                on_delete={on_delete_resource}
            />
        }
    };

    html! {
        <div class="bg-white p-8 sm:p-12 rounded-lg shadow-sm space-y-8">
            <div class="flex justify-between items-start gap-4">
                {header}
                <div class="flex gap-2">
                    <Link<Route>
                        to={Route::Categories { id: props.user_id.to_string() }}
                        classes="px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors"
                    >
                        {"목록으로"}
                    </Link<Route>>
                    if can_edit && category.data.is_fetched() {
                        <button
                            onclick={on_delete_category}
                            disabled={*is_deleting}
                            class="px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 transition-colors disabled:opacity-50"
                        >
                            {if *is_deleting { "삭제 중..." } else { "카테고리 삭제" }}
                        </button>
                    }
                </div>
            </div>

            if category.data.is_fetched() {
                <section class="space-y-3">
                    <div class="flex justify-between items-center">
                        <h2 class="text-xl font-semibold">{"프로젝트 소개"}</h2>
                        if can_edit && draft.is_none() && !introduce.is_loading {
                            <button
                                onclick={start_editing}
                                class="text-sm text-blue-600 hover:underline"
                            >
                                {"편집"}
                            </button>
                        }
                    </div>
                    if let (true, Some(text)) = (can_edit, (*draft).clone()) {
                        <MarkdownEditor
                            text={AttrValue::from(text)}
                            on_change={on_draft_change}
                            disabled={introduce.is_saving}
                            placeholder="'/'를 입력해 서식을 추가하세요"
                        />
                        <div class="flex gap-2 justify-end">
                            <button
                                onclick={cancel_editing}
                                disabled={introduce.is_saving}
                                class="px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors disabled:opacity-50"
                            >
                                {"취소"}
                            </button>
                            <button
                                onclick={on_save_intro}
                                disabled={introduce.is_saving}
                                class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors disabled:opacity-50"
                            >
                                {if introduce.is_saving { "저장 중..." } else { "저장" }}
                            </button>
                        </div>
                    } else if introduce.is_loading {
                        <crate::components::Spinner label="소개글을 불러오는 중..." />
                    } else {
                        <h3 class="text-lg font-medium text-gray-800">{&introduce.intro.title}</h3>
                        <MarkdownText text={AttrValue::from(introduce.intro.content.clone())} />
                    }
                </section>

                if let (true, Some(category_id)) = (can_edit, category_id) {
                    <section class="space-y-3">
                        <h2 class="text-xl font-semibold">{"자료 업로드"}</h2>
                        <FileUpload
                            {category_id}
                            on_success={resources.on_upload_success.clone()}
                            allowed_types={ALLOWED_UPLOAD_TYPES.to_vec()}
                        />
                    </section>
                }

                <section class="space-y-3">
                    <h2 class="text-xl font-semibold">{"자료"}</h2>
                    {resource_section}
                </section>
            }
        </div>
    }
}
