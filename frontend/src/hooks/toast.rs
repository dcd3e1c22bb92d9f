//! User-facing notifications shared through a Yew context.

use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

use crate::components::toast_container::ToastContainer;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, Some(description.into()))
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, Some(description.into()))
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, Some(description.into()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastState { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    state: UseReducerHandle<ToastState>,
}

impl ToastContext {
    pub fn add(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => tracing::warn!("Toast: {}", toast.title),
            _ => tracing::info!("Toast: {}", toast.title),
        }
        self.state.dispatch(ToastAction::Add(toast));
    }

    pub fn remove(&self, id: Uuid) {
        self.state.dispatch(ToastAction::Remove(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let context = ToastContext {
        state: state.clone(),
    };

    let on_dismiss = {
        let context = context.clone();
        Callback::from(move |id: Uuid| context.remove(id))
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { props.children.clone() }
            <ToastContainer toasts={state.toasts.clone()} on_dismiss={on_dismiss} />
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("use_toast called outside of ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let first = Toast::success("Saved", "All good");
        let second = Toast::error("Failed", "Try again");
        let first_id = first.id;

        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Add(first))
            .reduce(ToastAction::Add(second.clone()));
        assert_eq!(state.toasts.len(), 2);

        let state = state.reduce(ToastAction::Remove(first_id));
        assert_eq!(state.toasts, vec![second]);
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Toast::success("a", "b").kind, ToastKind::Success);
        assert_eq!(Toast::error("a", "b").kind, ToastKind::Error);

        let info = Toast::info("Signed out", "See you next time");
        assert_eq!(info.kind, ToastKind::Info);
        assert_eq!(info.kind.css_class(), "toast toast-info");
        assert_eq!(info.description.as_deref(), Some("See you next time"));
    }

    #[test]
    fn test_removing_unknown_toast_is_noop() {
        let toast = Toast::info("Signed out", "See you next time");
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Add(toast))
            .reduce(ToastAction::Remove(Uuid::new_v4()));
        assert_eq!(state.toasts.len(), 1);
    }
}
