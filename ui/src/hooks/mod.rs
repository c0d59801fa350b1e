pub mod use_categories;
pub mod use_category;
pub mod use_collection;
pub mod use_fetch;
pub mod use_introduce;
pub mod use_location;
pub mod use_logout;
pub mod use_push_route;
pub mod use_resources;
pub mod use_title;

pub use use_categories::{CreateCategory, use_categories};
pub use use_category::use_category;
pub use use_collection::{CollectionHookReturn, use_collection};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_introduce::{INTRODUCE_TEMPLATE, SaveIntroduce, use_introduce};
pub use use_location::use_location;
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_resources::{DeleteResource, use_resources};
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, and possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::NotFetched => None,
            FetchState::Fetched(data) => Some(data),
        }
    }
}
