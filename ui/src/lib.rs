use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod kakao;
pub mod logs;
mod pages;
pub mod sync;
pub mod utils;

use components::{MainLayout, ProtectedRoute, ToastContainer};
use contexts::{SessionProvider, ToastProvider};
use pages::{
    CategoriesPage, CategoryPage, HomePage, LocationPage, LoginPage, NotFound,
    SignupPage,
};

// Global API client, pointed at the configured backend
pub fn get_api_client() -> APIClient {
    APIClient {
        address: utils::api_base_url().trim_end_matches('/').to_string(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <ToastContainer />
                    <Switch<Route> render={switch} />
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/login")]
    Login,
    #[at("/auth/signup")]
    Signup,
    #[at("/main/home/:id")]
    Categories { id: String },
    #[at("/main/home/:id/category/:category_id")]
    Category { id: String, category_id: String },
    #[at("/main/home/:id/location")]
    Location { id: String },
    /// Short link shared for a whole portfolio.
    #[at("/pof-1/:id")]
    PortfolioShortLink { id: String },
    /// Short link shared for one category.
    #[at("/pof-2/:id/:category_id")]
    CategoryShortLink { id: String, category_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route whose page a short link shows. The address bar keeps the
    /// short link.
    pub fn canonical(self) -> Route {
        match self {
            Route::PortfolioShortLink { id } => Route::Categories { id },
            Route::CategoryShortLink { id, category_id } => {
                Route::Category { id, category_id }
            }
            route => route,
        }
    }

    /// Only `/` needs a signed in user; portfolio pages are public and
    /// gate their edit controls on ownership instead.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Home)
    }
}

fn with_layout(page: Html) -> Html {
    html! {
        <MainLayout>
            {page}
        </MainLayout>
    }
}

fn switch(route: Route) -> Html {
    let route = route.canonical();
    let requires_session = route.requires_session();
    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Categories { id } => with_layout(html! {
            <CategoriesPage user_id={id} />
        }),
        Route::Category { id, category_id } => with_layout(html! {
            <CategoryPage user_id={id} {category_id} />
        }),
        Route::Location { id } => with_layout(html! {
            <LocationPage user_id={id} />
        }),
        // canonical() never returns a short link
        Route::PortfolioShortLink { .. }
        | Route::CategoryShortLink { .. }
        | Route::NotFound => html! { <NotFound /> },
    };

    if requires_session {
        html! { <ProtectedRoute>{page}</ProtectedRoute> }
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_backend_links() {
        assert_eq!(Route::Login.to_path(), "/auth/login");
        assert_eq!(
            Route::Category {
                id: "5".into(),
                category_id: "9".into()
            }
            .to_path(),
            "/main/home/5/category/9"
        );
        assert_eq!(
            Route::Location { id: "5".into() }.to_path(),
            "/main/home/5/location"
        );
    }

    #[test]
    fn paths_are_recognized() {
        assert_eq!(
            Route::recognize("/main/home/5"),
            Some(Route::Categories { id: "5".into() })
        );
        assert_eq!(
            Route::recognize("/main/home/5/category/9"),
            Some(Route::Category {
                id: "5".into(),
                category_id: "9".into()
            })
        );
        assert_eq!(
            Route::recognize("/pof-2/5/9"),
            Some(Route::CategoryShortLink {
                id: "5".into(),
                category_id: "9".into()
            })
        );
    }

    #[test]
    fn short_links_show_the_canonical_pages() {
        assert_eq!(
            Route::PortfolioShortLink { id: "5".into() }.canonical(),
            Route::Categories { id: "5".into() }
        );
        assert_eq!(
            Route::CategoryShortLink {
                id: "5".into(),
                category_id: "9".into()
            }
            .canonical(),
            Route::Category {
                id: "5".into(),
                category_id: "9".into()
            }
        );
        assert_eq!(Route::Signup.canonical(), Route::Signup);
    }

    #[test]
    fn only_home_requires_a_session() {
        assert!(Route::Home.requires_session());
        for public in [
            Route::Login,
            Route::Signup,
            Route::Categories { id: "5".into() },
            Route::Category {
                id: "5".into(),
                category_id: "9".into(),
            },
            Route::Location { id: "5".into() },
            Route::NotFound,
        ] {
            assert!(!public.requires_session(), "{public:?}");
        }
        assert!(
            !Route::CategoryShortLink {
                id: "5".into(),
                category_id: "9".into()
            }
            .canonical()
            .requires_session()
        );
    }
}
