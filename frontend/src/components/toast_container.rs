use gloo::timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::hooks::toast::{Toast, TOAST_DURATION_MS};

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<Uuid>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={props.toast.kind.css_class()}>
            <div class="toast-body">
                <strong>{ &props.toast.title }</strong>
                if let Some(description) = &props.toast.description {
                    <p>{ description }</p>
                }
            </div>
            <button type="button" class="toast-close" onclick={close}>{ "×" }</button>
        </div>
    }
}
