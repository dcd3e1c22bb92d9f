use shared::api::SignInRequest;
use shared::validation::validate_form;
use shared::{FormErrors, ValidationError};
use yew::prelude::*;
use yew_router::prelude::*;

use super::setter;
use crate::components::form::{Button, Input};
use crate::hooks::{use_auth, use_toast, Toast};
use crate::router::Route;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(FormErrors::new);
    let loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = SignInRequest {
                email: (*email).trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(ValidationError::Fields(field_errors)) = validate_form(&request) {
                errors.set(field_errors);
                return;
            }
            errors.set(FormErrors::new());
            loading.set(true);

            let auth = auth.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth.sign_in(request).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Sign in failed: {}", e);
                        toast.add(Toast::error(
                            "Authentication failed",
                            "Could not sign in, check your credentials",
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
                    <h2>{ "Sign in" }</h2>
                    <Input
                        name="email"
                        placeholder="E-mail"
                        value={(*email).clone()}
                        on_change={setter(&email)}
                        error={errors.get("email").map(str::to_string)}
                    />
                    <Input
                        name="password"
                        input_type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        on_change={setter(&password)}
                        error={errors.get("password").map(str::to_string)}
                    />
                    <Button loading={*loading}>{ "Sign in" }</Button>
                    <Link<Route> to={Route::ForgotPassword}>{ "Forgot my password" }</Link<Route>>
                </form>
                <Link<Route> to={Route::SignUp} classes="auth-link">{ "Create account" }</Link<Route>>
            </div>
            <div class="auth-background"></div>
        </div>
    }
}
