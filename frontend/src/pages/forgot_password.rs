use shared::api::ForgotPasswordRequest;
use shared::validation::validate_form;
use shared::{FormErrors, ValidationError};
use yew::prelude::*;
use yew_router::prelude::*;

use super::setter;
use crate::components::form::{Button, Input};
use crate::hooks::{use_toast, Toast};
use crate::router::Route;
use crate::services::api::ApiService;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let toast = use_toast();

    let email = use_state(String::new);
    let errors = use_state(FormErrors::new);
    let loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let errors = errors.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = ForgotPasswordRequest {
                email: (*email).trim().to_string(),
            };
            if let Err(ValidationError::Fields(field_errors)) = validate_form(&request) {
                errors.set(field_errors);
                return;
            }
            errors.set(FormErrors::new());
            loading.set(true);

            let toast = toast.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::default().forgot_password(&request).await {
                    Ok(()) => toast.add(Toast::success(
                        "Password recovery email sent",
                        "Check your inbox for the steps to reset your password",
                    )),
                    Err(e) => {
                        tracing::error!("Password recovery failed: {}", e);
                        toast.add(Toast::error(
                            "Password recovery failed",
                            "Could not recover your password, try again later",
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
                    <h2>{ "Recover password" }</h2>
                    <Input
                        name="email"
                        placeholder="E-mail"
                        value={(*email).clone()}
                        on_change={setter(&email)}
                        error={errors.get("email").map(str::to_string)}
                    />
                    <Button loading={*loading}>{ "Recover" }</Button>
                </form>
                <Link<Route> to={Route::SignIn} classes="auth-link">{ "Back to sign in" }</Link<Route>>
            </div>
            <div class="auth-background"></div>
        </div>
    }
}
