pub mod categories;
pub mod category;
pub mod home;
pub mod location;
pub mod login;
pub mod not_found;
pub mod signup;

pub use categories::CategoriesPage;
pub use category::CategoryPage;
pub use home::HomePage;
pub use location::LocationPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use signup::SignupPage;
