use payloads::requests::LoginCredentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::use_session;
use crate::hooks::{use_push_route, use_title};
use crate::utils::is_dev_mode;

use super::signup::INPUT_CLASS;

#[function_component]
pub fn LoginPage() -> Html {
    use_title("로그인");
    let session = use_session();
    let push_route = use_push_route();

    let login_id_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Already signed in users go straight to their categories
    {
        let push_route = push_route.clone();
        let signed_in = session.state().profile().map(|p| p.id);
        use_effect_with(signed_in, move |signed_in| {
            if let Some(id) = signed_in {
                push_route.emit(Route::Categories { id: id.to_string() });
            }
        });
    }

    let on_submit = {
        let login_id_ref = login_id_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let login_id = value(&login_id_ref).trim().to_string();
            let password = value(&password_ref);

            if login_id.is_empty() || password.is_empty() {
                error_message
                    .set(Some("아이디와 비밀번호를 입력해주세요.".into()));
                return;
            }

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let session = session.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = crate::get_api_client();
                let credentials = LoginCredentials { login_id, password };
                let result = match api_client.login(&credentials).await {
                    Ok(()) => api_client.current_user().await.map_err(|e| {
                        tracing::error!("profile after login failed: {e}");
                        "로그인 후 사용자 정보를 불러오지 못했습니다.".to_string()
                    }),
                    Err(e) => {
                        tracing::warn!("login failed: {e}");
                        Err("아이디 또는 비밀번호가 올바르지 않습니다.".to_string())
                    }
                };

                match result {
                    // The session effect above navigates away
                    Ok(profile) => session.signed_in(profile),
                    Err(message) => {
                        session.signed_out();
                        error_message.set(Some(message));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-blue-50/70 px-4">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">{"로그인"}</h1>
                    <p class="text-gray-600">{"포트폴리오를 관리하려면 로그인하세요."}</p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    if let Some(error) = &*error_message {
                        <div class="p-4 rounded-md bg-red-50 border border-red-200">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }

                    <div>
                        <label for="login-id" class="block text-sm font-medium text-gray-700 mb-2">
                            {"아이디"}
                        </label>
                        <input
                            ref={login_id_ref}
                            type="text"
                            id="login-id"
                            autocomplete="username"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="아이디를 입력하세요"
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-2">
                            {"비밀번호"}
                        </label>
                        <input
                            ref={password_ref}
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="비밀번호를 입력하세요"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full py-2 px-4 rounded-md bg-blue-500 text-white font-medium hover:bg-blue-600 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {if *is_loading { "로그인 중..." } else { "로그인" }}
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-gray-600">
                    {"계정이 없으신가요? "}
                    <Link<Route> to={Route::Signup} classes="text-blue-600 hover:underline font-medium">
                        {"회원가입"}
                    </Link<Route>>
                </p>

                if is_dev_mode() {
                    <p class="mt-4 text-center text-xs text-gray-400">
                        {format!("API: {}", crate::utils::api_base_url())}
                    </p>
                }
            </div>
        </div>
    }
}
