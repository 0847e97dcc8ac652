use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::style::Reveal;

#[derive(Properties, PartialEq)]
pub struct RevealOnViewProps {
    pub reveal: Reveal,
    #[prop_or_default]
    pub class: Classes,
    /// Any visible pixel counts unless overridden.
    #[prop_or(0.01)]
    pub threshold: f64,
    #[prop_or_default]
    pub once: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that plays `reveal` whenever it scrolls into view.
#[function_component(RevealOnView)]
pub fn reveal_on_view(props: &RevealOnViewProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.threshold, props.once);

    html! {
        <div ref={node} class={props.class.clone()} style={props.reveal.style(visible, 0)}>
            { for props.children.iter() }
        </div>
    }
}
