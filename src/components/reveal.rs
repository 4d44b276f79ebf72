use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_frame_clock;
use crate::motion::Reveal;
use crate::viewport::{IntersectionWatcher, ViewportObserver};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub reveal: Reveal,
    #[prop_or_default]
    pub class: Classes,
    /// Play as soon as the block mounts instead of waiting to be scrolled into view.
    #[prop_or_default]
    pub on_mount: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that plays its reveal once, the first time it is seen.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let triggered = use_state(|| false);
    let settled = use_state(|| false);
    // The clock keeps its last value once stopped, so a settled block stays at rest.
    let elapsed = use_frame_clock(*triggered && !*settled);

    {
        let settled = settled.clone();
        let done = *triggered && props.reveal.is_settled(elapsed);
        use_effect_with_deps(
            move |done| {
                if *done {
                    settled.set(true);
                }
                || ()
            },
            done,
        );
    }

    {
        let node_ref = node_ref.clone();
        let triggered = triggered.clone();
        let on_mount = props.on_mount;
        use_effect_with_deps(
            move |_| {
                let mut subscription = None;
                match node_ref.cast::<Element>() {
                    Some(element) if !on_mount => {
                        let show = triggered.setter();
                        match IntersectionWatcher::default()
                            .observe_once(&element, Box::new(move || show.set(true)))
                        {
                            Ok(active) => subscription = Some(active),
                            Err(err) => {
                                log::warn!("reveal plays without viewport trigger: {}", err);
                                triggered.set(true);
                            }
                        }
                    }
                    _ => triggered.set(true),
                }
                move || drop(subscription)
            },
            (),
        );
    }

    let pose = props.reveal.pose_at((*triggered).then_some(elapsed));

    html! {
        <div ref={node_ref} class={props.class.clone()} style={pose.to_style()}>
            { for props.children.iter() }
        </div>
    }
}
