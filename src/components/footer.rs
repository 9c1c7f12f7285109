//! Footer Component

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <div class="logo">
                        <span class="logo-mark small">"R"</span>
                        <span class="logo-text">"RentIt"</span>
                    </div>
                    <p class="muted">"P2P аренда вещей. Делитесь тем, что есть, берите то, что нужно."</p>
                </div>
                <div>
                    <h4>"Платформа"</h4>
                    <Link to=Route::catalog()>"Каталог"</Link>
                    <Link to=Route::Create>"Сдать вещь"</Link>
                    <Link to=Route::HowItWorks>"Как это работает"</Link>
                </div>
                <div>
                    <h4>"Поддержка"</h4>
                    <span class="muted">"Помощь"</span>
                    <span class="muted">"Оферта"</span>
                    <span class="muted">"Политика конфиденциальности"</span>
                </div>
                <div>
                    <h4>"Контакты"</h4>
                    <span class="muted">"support@rentit.ru"</span>
                    <span class="muted">"Telegram: @rentit"</span>
                </div>
            </div>
            <div class="container footer-note">
                "© 2026 RentIt. Платформа не несёт ответственности за состояние вещей."
            </div>
        </footer>
    }
}
