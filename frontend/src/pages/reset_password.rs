use shared::api::{ResetPasswordForm, ResetPasswordQuery, ResetPasswordRequest};
use shared::validation::{require_reset_token, validate_form};
use shared::{FormErrors, ValidationError};
use yew::prelude::*;
use yew_router::prelude::*;

use super::setter;
use crate::components::form::{Button, Input};
use crate::hooks::{use_toast, Toast};
use crate::router::Route;
use crate::services::api::ApiService;

#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let toast = use_toast();
    let navigator = use_navigator();
    let location = use_location();

    let password = use_state(String::new);
    let password_confirmation = use_state(String::new);
    let errors = use_state(FormErrors::new);
    let loading = use_state(|| false);

    let token = location
        .and_then(|location| location.query::<ResetPasswordQuery>().ok())
        .and_then(|query| query.token);

    let onsubmit = {
        let password = password.clone();
        let password_confirmation = password_confirmation.clone();
        let errors = errors.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = ResetPasswordForm {
                password: (*password).clone(),
                password_confirmation: (*password_confirmation).clone(),
            };
            if let Err(ValidationError::Fields(field_errors)) = validate_form(&form) {
                errors.set(field_errors);
                return;
            }
            errors.set(FormErrors::new());

            let token = match require_reset_token(token.as_deref()) {
                Ok(token) => token,
                Err(e) => {
                    tracing::warn!("{}", e);
                    toast.add(Toast::error(
                        "Password reset failed",
                        "This recovery link is not valid, request a new one",
                    ));
                    return;
                }
            };
            loading.set(true);

            let request = ResetPasswordRequest::new(form, token);
            let toast = toast.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::default().reset_password(&request).await {
                    Ok(()) => {
                        toast.add(Toast::success(
                            "Password changed",
                            "Sign in with your new password",
                        ));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::SignIn);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Password reset failed: {}", e);
                        toast.add(Toast::error(
                            "Password reset failed",
                            "Could not change your password, try again",
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-content">
                <h1 class="logo">{ "GoBarber" }</h1>
                <form onsubmit={onsubmit}>
                    <h2>{ "Change password" }</h2>
                    <Input
                        name="password"
                        input_type="password"
                        placeholder="New password"
                        value={(*password).clone()}
                        on_change={setter(&password)}
                        error={errors.get("password").map(str::to_string)}
                    />
                    <Input
                        name="password_confirmation"
                        input_type="password"
                        placeholder="Confirm password"
                        value={(*password_confirmation).clone()}
                        on_change={setter(&password_confirmation)}
                        error={errors.get("password_confirmation").map(str::to_string)}
                    />
                    <Button loading={*loading}>{ "Change password" }</Button>
                </form>
            </div>
            <div class="auth-background"></div>
        </div>
    }
}
