use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::pages::{
    dashboard::Dashboard, forgot_password::ForgotPassword, not_found::NotFound,
    reset_password::ResetPassword, sign_in::SignIn, sign_up::SignUp,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may see a route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Only with a session
    Private,
    /// Only without a session
    Guest,
    Public,
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Route::Dashboard => Access::Private,
            Route::SignIn | Route::SignUp => Access::Guest,
            Route::ForgotPassword | Route::ResetPassword | Route::NotFound => Access::Public,
        }
    }

    /// Where to send the user instead, if they may not see this route.
    pub fn redirect(&self, signed_in: bool) -> Option<Route> {
        match (self.access(), signed_in) {
            (Access::Private, false) => Some(Route::SignIn),
            (Access::Guest, true) => Some(Route::Dashboard),
            _ => None,
        }
    }
}

pub fn switch(route: Route) -> Html {
    html! { <Guard route={route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    route: Route,
}

#[function_component(Guard)]
fn guard(props: &GuardProps) -> Html {
    let auth = use_auth();

    if let Some(target) = props.route.redirect(auth.is_signed_in()) {
        tracing::debug!("Redirecting {:?} to {:?}", props.route, target);
        return html! { <Redirect<Route> to={target} /> };
    }

    match props.route {
        Route::SignIn => html! { <SignIn /> },
        Route::SignUp => html! { <SignUp /> },
        Route::ForgotPassword => html! { <ForgotPassword /> },
        Route::ResetPassword => html! { <ResetPassword /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_route_requires_session() {
        assert_eq!(Route::Dashboard.redirect(false), Some(Route::SignIn));
        assert_eq!(Route::Dashboard.redirect(true), None);
    }

    #[test]
    fn test_guest_routes_skip_to_dashboard() {
        assert_eq!(Route::SignIn.redirect(true), Some(Route::Dashboard));
        assert_eq!(Route::SignUp.redirect(true), Some(Route::Dashboard));
        assert_eq!(Route::SignUp.redirect(false), None);
    }

    #[test]
    fn test_password_recovery_is_public() {
        for signed_in in [true, false] {
            assert_eq!(Route::ForgotPassword.redirect(signed_in), None);
            assert_eq!(Route::ResetPassword.redirect(signed_in), None);
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::SignIn.to_path(), "/");
        assert_eq!(Route::ResetPassword.to_path(), "/reset-password");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    }
}
