use shared::api::SignUpRequest;
use shared::validation::validate_form;
use shared::{FormErrors, ValidationError};
use yew::prelude::*;
use yew_router::prelude::*;

use super::setter;
use crate::components::form::{Button, Input};
use crate::hooks::{use_toast, Toast};
use crate::router::Route;
use crate::services::api::ApiService;

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let toast = use_toast();
    let navigator = use_navigator();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(FormErrors::new);
    let loading = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = SignUpRequest {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(ValidationError::Fields(field_errors)) = validate_form(&request) {
                errors.set(field_errors);
                return;
            }
            errors.set(FormErrors::new());
            loading.set(true);

            let toast = toast.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::default().sign_up(&request).await {
                    Ok(user) => {
                        tracing::info!("Created account {}", user.id);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::SignIn);
                        }
                        toast.add(Toast::success(
                            "Account created",
                            "You can now sign in to GoBarber",
                        ));
                    }
                    Err(e) => {
                        tracing::error!("Sign up failed: {}", e);
                        toast.add(Toast::error(
                            "Sign up failed",
                            "Could not create your account, try again",
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-background"></div>
            <div class="auth-content">
                <h1 class="logo">{ "GoBarber" }</h1>
                <form onsubmit={onsubmit}>
                    <h2>{ "Create your account" }</h2>
                    <Input
                        name="name"
                        placeholder="Name"
                        value={(*name).clone()}
                        on_change={setter(&name)}
                        error={errors.get("name").map(str::to_string)}
                    />
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
                    <Button loading={*loading}>{ "Sign up" }</Button>
                </form>
                <Link<Route> to={Route::SignIn} classes="auth-link">{ "Back to sign in" }</Link<Route>>
            </div>
        </div>
    }
}
