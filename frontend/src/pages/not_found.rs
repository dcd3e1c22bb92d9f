use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let auth = use_auth();
    let (target, label) = if auth.is_signed_in() {
        (Route::Dashboard, "Back to my schedule")
    } else {
        (Route::SignIn, "Go to sign in")
    };

    html! {
        <div class="auth-page">
            <div class="auth-content empty-state">
                <h1 class="logo">{ "GoBarber" }</h1>
                <h2>{ "Page not found" }</h2>
                <Link<Route> to={target} classes="auth-link">{ label }</Link<Route>>
            </div>
        </div>
    }
}
