use yew::prelude::*;

/// Animated equalizer shown next to a playing group.
#[function_component(PlayingBarsComp)]
pub fn playing_bars_comp() -> Html {
    html! {
        <div class="bars" slot="meta">
            <div></div>
            <div></div>
            <div></div>
        </div>
    }
}
