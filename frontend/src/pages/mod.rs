pub mod dashboard;
pub mod forgot_password;
pub mod not_found;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;

use yew::prelude::*;

/// Binds an input to a `use_state` handle
pub(crate) fn setter(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}
