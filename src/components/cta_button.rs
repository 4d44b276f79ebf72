use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub large: bool,
    /// Left unset on this page; sign-up wiring lives outside this crate.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <button
            class={classes!("cta-button", props.large.then_some("cta-button--large"))}
            onclick={props.onclick.clone()}
        >
            <span class="cta-button__label">{ props.label.clone() }</span>
            <div class="cta-button__glow"></div>
        </button>
    }
}
