//! Auth Page
//!
//! Sign-in and sign-up on one form, toggled by mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentit_core::domain::{AuthForm, AuthMode};

use crate::commands;
use crate::components::Link;
use crate::context::use_app_context;
use crate::routes::Route;
use crate::store::{store_notify, store_set_session, use_app_store};

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let form = RwSignal::new(AuthForm::default());
    let (loading, set_loading) = signal(false);
    let is_login = move || form.with(|f| f.mode == AuthMode::SignIn);

    let toggle_mode = move |_: web_sys::MouseEvent| {
        form.update(|f| {
            f.mode = match f.mode {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            }
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let submitted = form.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            let outcome = commands::submit_auth(&submitted).await;
            set_loading.set(false);
            store_notify(&store, outcome.notice);
            if let Some(session) = outcome.session {
                store_set_session(&store, Some(session));
                ctx.navigate(Route::Home);
            }
        });
    };

    view! {
        <div class="container auth">
            <Link to=Route::Home class="btn btn-ghost btn-sm back-link">"← На главную"</Link>

            <div class="card auth-card">
                <h1>{move || if is_login() { "Вход" } else { "Регистрация" }}</h1>
                <p class="muted small">
                    {move || if is_login() {
                        "Войдите, чтобы арендовать или сдавать вещи"
                    } else {
                        "Создайте аккаунт, чтобы начать"
                    }}
                </p>

                <form class="form" on:submit=on_submit>
                    <Show when=move || !is_login()>
                        <div class="field">
                            <label for="name">"Имя"</label>
                            <input
                                id="name"
                                placeholder="Ваше имя"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="field">
                        <label for="password">"Пароль"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Минимум 6 символов"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-primary btn-lg btn-block" disabled=move || loading.get()>
                        {move || match (loading.get(), is_login()) {
                            (true, _) => "Загрузка...",
                            (false, true) => "Войти",
                            (false, false) => "Зарегистрироваться",
                        }}
                    </button>
                </form>

                <div class="auth-switch muted small">
                    {move || if is_login() { "Нет аккаунта? " } else { "Уже есть аккаунт? " }}
                    <button class="link-button" on:click=toggle_mode>
                        {move || if is_login() { "Зарегистрируйтесь" } else { "Войдите" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
