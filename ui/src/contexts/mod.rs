pub mod session;
pub mod toast;

pub use session::{SessionHandle, SessionProvider, SessionState, use_session};
pub use toast::{ToastProvider, use_toast};
