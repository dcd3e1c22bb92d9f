//! Inputs and buttons used by the account pages.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub name: AttrValue,
    pub placeholder: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let on_change = props.on_change.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });

    let class = if props.error.is_some() {
        "input-field input-error"
    } else {
        "input-field"
    };

    html! {
        <div class={class}>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={oninput}
            />
            if let Some(error) = &props.error {
                <span class="field-error" title={error.clone()}>{ error }</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Submit button that shows a loading text while a request is in flight
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button type="submit" class="btn btn-primary" disabled={props.loading}>
            if props.loading {
                { "Loading..." }
            } else {
                { props.children.clone() }
            }
        </button>
    }
}
