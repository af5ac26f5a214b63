use log::warn;
use yew::prelude::*;

use super::game_view::GameView;

const BODY_STYLE: [(&str, &str); 4] = [
    ("margin", "0"),
    ("overflow", "hidden"),
    ("background", "#fafafa"),
    ("font-family", "Inter, system-ui, Arial"),
];

fn style_body() {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        warn!("no <body> to style");
        return;
    };
    let style = body.style();
    for (prop, value) in BODY_STYLE {
        if style.set_property(prop, value).is_err() {
            warn!("could not set body {}", prop);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    use_effect_with((), |_| {
        style_body();
        || ()
    });

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh;">
            <GameView />
        </div>
    }
}
