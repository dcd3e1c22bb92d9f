//! Signed-in session shared through a Yew context.

use std::rc::Rc;

use shared::api::SignInRequest;
use shared::{Session, User};
use yew::prelude::*;

use crate::error::ApiResult;
use crate::services::api::ApiService;
use crate::services::storage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

pub enum AuthAction {
    SignedIn(Session),
    SignedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn(session) => Rc::new(AuthState {
                session: Some(session),
            }),
            AuthAction::SignedOut => Rc::new(AuthState::default()),
        }
    }
}

/// What pages get from `use_auth`
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    state: UseReducerHandle<AuthState>,
}

impl AuthContext {
    pub fn user(&self) -> Option<User> {
        self.state.session.as_ref().map(|s| s.user.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.session.is_some()
    }

    /// API client carrying the session token when there is one.
    pub fn api(&self) -> ApiService {
        match &self.state.session {
            Some(session) => ApiService::default().with_token(session.token.clone()),
            None => ApiService::default(),
        }
    }

    pub async fn sign_in(&self, credentials: SignInRequest) -> ApiResult<()> {
        let session = ApiService::default().sign_in(&credentials).await?;
        tracing::info!("Signed in as {}", session.user.email);
        storage::save_session(&session);
        self.state.dispatch(AuthAction::SignedIn(session));
        Ok(())
    }

    pub fn sign_out(&self) {
        tracing::info!("Signing out");
        storage::clear_session();
        self.state.dispatch(AuthAction::SignedOut);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(|| AuthState {
        session: storage::load_session(),
    });
    let context = AuthContext { state };

    html! {
        <ContextProvider<AuthContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth called outside of AuthProvider")
}
