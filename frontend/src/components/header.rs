use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: User,
    pub on_sign_out: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_sign_out = props.on_sign_out.clone();
    let sign_out = Callback::from(move |_| on_sign_out.emit(()));

    html! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">{ "GoBarber" }</h1>
                <div class="profile">
                    <Avatar url={props.user.avatar_url.clone()} name={props.user.name.clone()} />
                    <div>
                        <span>{ "Welcome," }</span>
                        <strong>{ &props.user.name }</strong>
                    </div>
                </div>
                <button type="button" class="sign-out" title="Sign out" onclick={sign_out}>
                    { "⏻" }
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub url: Option<String>,
    pub name: String,
}

/// Picture of a user, or their initial when they have none
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    match &props.url {
        Some(url) => html! { <img class="avatar" src={url.clone()} alt={props.name.clone()} /> },
        None => {
            let initial = props.name.chars().next().unwrap_or('?').to_uppercase().to_string();
            html! { <div class="avatar avatar-placeholder" title={props.name.clone()}>{ initial }</div> }
        }
    }
}
