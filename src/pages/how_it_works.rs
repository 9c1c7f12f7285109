//! How It Works Page
//!
//! Static steps and platform rules, rendered from markdown.

use leptos::prelude::*;

use crate::components::Link;
use crate::markdown::parse_markdown;
use crate::routes::Route;

const STEPS_MD: &str = include_str!("../../content/how_it_works.md");
const RULES_MD: &str = include_str!("../../content/platform_rules.md");

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <div class="container narrow how-it-works">
            <h1 class="center">"Как это работает"</h1>
            <p class="center muted">"Простая процедура, которая защищает обе стороны."</p>

            <div class="markdown steps-list" inner_html=parse_markdown(STEPS_MD)></div>

            <div class="card rules">
                <h2>"Правила платформы"</h2>
                <div class="markdown" inner_html=parse_markdown(RULES_MD)></div>
            </div>

            <div class="center">
                <Link to=Route::catalog() class="btn btn-primary btn-lg">"Перейти в каталог →"</Link>
            </div>
        </div>
    }
}
