pub mod file_upload;
pub mod layout;
pub mod location_picker;
pub mod markdown_editor;
pub mod markdown_text;
pub mod protected_route;
pub mod resource_list;
pub mod slash_menu;
pub mod spinner;
pub mod toast;

pub use file_upload::FileUpload;
pub use layout::MainLayout;
pub use location_picker::LocationPicker;
pub use markdown_editor::MarkdownEditor;
pub use markdown_text::MarkdownText;
pub use protected_route::ProtectedRoute;
pub use resource_list::ResourceList;
pub use slash_menu::SlashMenu;
pub use spinner::Spinner;
pub use toast::ToastContainer;
