use gloo_events::EventListener;
use yew::prelude::*;

use crate::auth;
use crate::components::Layout;
use crate::pages::{BudgetPage, DashboardPage, LoginPage, TransactionsPage};
use crate::route::{current_route, push_route, replace_route, AppRoute};
use crate::storage::{self, Theme};

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(current_route);
    let theme = use_state(storage::load_theme);

    {
        let route = route.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "popstate", move |_| route.set(current_route()))
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Unauthenticated visitors are bounced to the login screen.
    {
        let current = *route;
        let handle = route.clone();
        use_effect_with_deps(
            move |current: &AppRoute| {
                let allowed = current.guard(auth::is_authed());
                if allowed != *current {
                    log::debug!("redirecting {} to {}", current.path(), allowed.path());
                    replace_route(allowed);
                    handle.set(allowed);
                }
                || ()
            },
            current,
        );
    }

    use_effect_with_deps(
        |theme: &Theme| {
            storage::apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: AppRoute| {
            if next != *route {
                push_route(next);
                route.set(next);
            }
        })
    };
    let on_login = {
        let route = route.clone();
        Callback::from(move |_: ()| {
            push_route(AppRoute::Dashboard);
            route.set(AppRoute::Dashboard);
        })
    };
    let on_logout = {
        let route = route.clone();
        Callback::from(move |_: ()| {
            auth::logout();
            push_route(AppRoute::Login);
            route.set(AppRoute::Login);
        })
    };
    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            storage::save_theme(next);
            theme.set(next);
        })
    };

    let active = route.guard(auth::is_authed());
    let content = match active {
        AppRoute::Login => return html! { <LoginPage on_login={on_login} /> },
        AppRoute::Dashboard => html! { <DashboardPage /> },
        AppRoute::Transactions => html! { <TransactionsPage /> },
        AppRoute::Budget => html! { <BudgetPage /> },
    };

    html! {
        <Layout
            route={active}
            theme={*theme}
            on_navigate={on_navigate}
            on_toggle_theme={on_toggle_theme}
            on_logout={on_logout}
        >
            { content }
        </Layout>
    }
}
