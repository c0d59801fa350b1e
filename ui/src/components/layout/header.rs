use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::use_session;
use crate::hooks::use_logout;

#[function_component]
pub fn Header() -> Html {
    let session = use_session();
    let on_logout = use_logout();

    let nav = match session.state().profile() {
        Some(profile) => {
            let id = profile.id.to_string();
            html! {
                <>
                    <Link<Route>
                        to={Route::Categories { id: id.clone() }}
                        classes="text-sm text-gray-600 hover:text-blue-600"
                    >
                        {"카테고리"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Location { id }}
                        classes="text-sm text-gray-600 hover:text-blue-600"
                    >
                        {"위치"}
                    </Link<Route>>
                    <span class="text-sm text-gray-500">{&profile.nickname}</span>
                    <button
                        onclick={on_logout}
                        class="text-sm px-3 py-1.5 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50"
                    >
                        {"로그아웃"}
                    </button>
                </>
            }
        }
        None => html! {
            <Link<Route>
                to={Route::Login}
                classes="text-sm px-3 py-1.5 rounded-md bg-blue-500 text-white hover:bg-blue-600"
            >
                {"로그인"}
            </Link<Route>>
        },
    };

    html! {
        <header class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900">
                        {"Folio"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-4">
                        {nav}
                    </nav>
                </div>
            </div>
        </header>
    }
}
