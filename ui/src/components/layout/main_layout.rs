use yew::prelude::*;

use super::Header;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Header, page content and a footer for the signed in pages.
#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-blue-50/70 text-gray-900">
            <Header />
            <main class="flex-1 w-full max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {props.children.clone()}
            </main>
            <footer class="py-6 text-center text-xs text-gray-400">
                {"Folio"}
            </footer>
        </div>
    }
}
