use crate::model::{IconFragment, IconLayout, IconSize};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IconsProps {
    pub layout: IconLayout,
}

#[function_component(IconsComp)]
pub fn icons_comp(props: &IconsProps) -> Html {
    let layout = &props.layout;

    html! {
        <div class="icons" empty={layout.empty.then_some("")}>
            {for layout.fragments.iter().map(|fragment| match fragment {
                IconFragment::Icon { icon, size } => {
                    let class = classes!((*size == IconSize::Small).then_some("small"));
                    html! { <ha-icon {class} icon={icon.clone()}></ha-icon> }
                }
                IconFragment::Overflow(more) => html! { <span>{format!("+{more}")}</span> },
                IconFragment::Break => html! { <br /> },
            })}
        </div>
    }
}
