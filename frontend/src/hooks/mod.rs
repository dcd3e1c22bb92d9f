pub mod auth;
pub mod guard;
pub mod toast;

pub use auth::{use_auth, AuthProvider};
pub use guard::EffectGuard;
pub use toast::{use_toast, Toast, ToastProvider};
