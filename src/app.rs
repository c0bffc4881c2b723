use dioxus::prelude::*;

use crate::component::EasterEggs;
use crate::config::EggConfig;

const EASTER_EGGS_CSS: Asset = asset!("/assets/easter_eggs.css");

#[component]
pub fn App() -> Element {
    use_context_provider(EggConfig::load);

    rsx! {
        document::Title { "Easter eggs" }
        document::Link { rel: "stylesheet", href: EASTER_EGGS_CSS }
        main { class: "page",
            h1 { "Nothing to see here" }
            p { "Just a quiet page. Nothing happens if you poke at it. Probably." }
        }
        EasterEggs {}
    }
}
