use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFound() -> Html {
    use_title("페이지를 찾을 수 없습니다");

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-gray-300">{"404"}</h1>
                <h2 class="text-2xl font-semibold text-gray-900">
                    {"프로젝트를 찾을 수 없습니다"}
                </h2>
                <p class="text-gray-600">
                    {"요청하신 프로젝트가 존재하지 않거나 삭제되었습니다."}
                </p>
                <Link<Route>
                    to={Route::Home}
                    classes="inline-block px-6 py-3 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors"
                >
                    {"홈으로 돌아가기"}
                </Link<Route>>
            </div>
        </div>
    }
}
