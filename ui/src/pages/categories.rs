use payloads::{UserId, requests::validate_category_title};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::Spinner;
use crate::contexts::{use_session, use_toast};
use crate::hooks::{CreateCategory, use_categories, use_title};
use crate::utils::format::format_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Owner's user id, as it appears in the route.
    pub user_id: AttrValue,
}

#[function_component]
pub fn CategoriesPage(props: &Props) -> Html {
    use_title("카테고리");
    let session = use_session();
    let toast = use_toast();
    let categories = use_categories(&props.user_id);
    let title_input = use_state(String::new);
    let is_creating = use_state(|| false);

    let owner = props.user_id.parse::<UserId>().ok();
    let can_edit = session.state().owns(owner);

    let on_title_input = {
        let title_input = title_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title_input.set(input.value());
        })
    };

    let on_create = {
        let create = categories.create.clone();
        let title_input = title_input.clone();
        let is_creating = is_creating.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let title = match validate_category_title(&title_input) {
                Ok(title) => title,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };

            is_creating.set(true);
            let toast = toast.clone();
            let title_input = title_input.clone();
            let is_creating = is_creating.clone();
            create.emit(CreateCategory {
                title,
                on_done: Callback::from(move |result: Result<_, String>| {
                    is_creating.set(false);
                    match result {
                        Ok(_) => {
                            title_input.set(String::new());
                            toast.success("카테고리가 생성되었습니다.");
                        }
                        Err(e) => {
                            toast.error(format!("카테고리 생성에 실패했습니다: {e}"))
                        }
                    }
                }),
            });
        })
    };

    let list = if categories.is_loading && categories.categories.is_empty() {
        html! { <Spinner /> }
    } else if let Some(error) = &categories.error {
        html! {
            <div class="p-4 rounded-md bg-red-50 border border-red-200">
                <p class="text-sm text-red-700">{error}</p>
            </div>
        }
    } else if categories.categories.is_empty() {
        html! {
            <p class="text-center py-12 text-gray-500">{"아직 카테고리가 없습니다."}</p>
        }
    } else {
        html! {
            <ul class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {for categories.categories.iter().map(|category| html! {
                    <li key={category.id.to_string()}>
                        <Link<Route>
                            to={Route::Category {
                                id: props.user_id.to_string(),
                                category_id: category.id.to_string(),
                            }}
                            classes="block p-6 bg-white rounded-lg shadow-sm border border-gray-200 hover:border-blue-400 hover:shadow transition"
                        >
                            <h3 class="text-lg font-semibold text-gray-900">
                                {&category.category_title}
                            </h3>
                            if category.created_at.is_some() {
                                <p class="mt-2 text-xs text-gray-500">
                                    {format_date(category.created_at.as_deref())}
                                </p>
                            }
                        </Link<Route>>
                    </li>
                })}
            </ul>
        }
    };

    html! {
        <div class="bg-white p-8 sm:p-12 rounded-lg shadow-sm space-y-8">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-3xl font-bold">{"카테고리"}</h1>
                    <p class="text-sm text-gray-500 mt-2">
                        {format!("소유자: User {}", props.user_id)}
                    </p>
                    if !can_edit {
                        <p class="text-sm text-orange-500">{"읽기 전용 모드"}</p>
                    }
                </div>
                <Link<Route>
                    to={Route::Location { id: props.user_id.to_string() }}
                    classes="px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors"
                >
                    {"위치 보기"}
                </Link<Route>>
            </div>

            if can_edit {
                <form onsubmit={on_create} class="flex gap-2">
                    <input
                        type="text"
                        value={(*title_input).clone()}
                        oninput={on_title_input}
                        disabled={*is_creating}
                        placeholder="새 카테고리 이름"
                        class="flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <button
                        type="submit"
                        disabled={*is_creating}
                        class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors disabled:opacity-50"
                    >
                        {if *is_creating { "생성 중..." } else { "추가" }}
                    </button>
                </form>
            }

            {list}
        </div>
    }
}
