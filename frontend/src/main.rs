mod components;
mod config;
mod error;
mod hooks;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::config::config;
use crate::hooks::{AuthProvider, ToastProvider};
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <div id="app">
                        <yew_router::Switch<Route> render={switch} />
                    </div>
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    let config = config();
    tracing::info!(
        api = %config.api_base_url,
        locale = %config.locale,
        "Starting GoBarber web client"
    );

    yew::Renderer::<App>::new().render();
}
