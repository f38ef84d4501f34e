use yew::prelude::*;

use super::icons::{
    icon_chevron_down, icon_close, icon_log_out, icon_menu, icon_moon, icon_sun, icon_user,
    route_icon,
};
use crate::route::AppRoute;
use crate::storage::Theme;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub route: AppRoute,
    pub theme: Theme,
    pub on_navigate: Callback<AppRoute>,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(!*sidebar_open))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(false))
    };
    let on_select = {
        let sidebar_open = sidebar_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |route: AppRoute| {
            sidebar_open.set(false);
            on_navigate.emit(route);
        })
    };

    let drawer_class = if *sidebar_open {
        "fixed inset-y-0 left-0 z-40 w-64 transform translate-x-0 transition-transform md:static md:translate-x-0"
    } else {
        "fixed inset-y-0 left-0 z-40 w-64 transform -translate-x-full transition-transform md:static md:translate-x-0"
    };

    html! {
        <div class="flex h-screen bg-gray-50 dark:bg-gray-900">
            if *sidebar_open {
                <div class="fixed inset-0 z-30 bg-black/50 md:hidden" onclick={close_sidebar}></div>
            }
            <aside class={drawer_class}>
                <Sidebar route={props.route} on_select={on_select} on_close={toggle_sidebar.clone()} />
            </aside>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header
                    title={props.route.title()}
                    theme={props.theme}
                    on_menu={toggle_sidebar}
                    on_toggle_theme={props.on_toggle_theme.clone()}
                    on_logout={props.on_logout.clone()}
                />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
                <footer class="border-t border-gray-200 dark:border-gray-700 px-6 py-3 text-center text-xs text-gray-500 dark:text-gray-400">
                    {"© 2025 FinanceApp. All rights reserved."}
                </footer>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    route: AppRoute,
    on_select: Callback<AppRoute>,
    on_close: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <div class="h-full bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 p-4 flex flex-col">
            <div class="flex items-center justify-between px-2 mb-8">
                <span class="text-blue-600 dark:text-blue-400 text-2xl font-black tracking-tight">{"FinanceApp"}</span>
                <button type="button" class="md:hidden p-2 rounded-lg text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-700" aria-label="Close menu" onclick={props.on_close.clone()}>
                    { icon_close() }
                </button>
            </div>

            <nav class="flex-1 space-y-2">
                { for AppRoute::NAV.iter().map(|route| {
                    let is_active = *route == props.route;
                    let class_name = if is_active {
                        "flex items-center gap-3 px-4 py-3 rounded-lg transition-all text-sm font-medium bg-blue-50 text-blue-700 dark:bg-blue-900/40 dark:text-blue-300 w-full"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-lg transition-all text-sm font-medium text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 w-full"
                    };
                    let on_select = props.on_select.clone();
                    let route = *route;

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(route))}>
                            <span class="shrink-0">{ route_icon(route) }</span>
                            <span class="truncate whitespace-nowrap text-left">{ route.title() }</span>
                        </button>
                    }
                }) }
            </nav>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    title: &'static str,
    theme: Theme,
    on_menu: Callback<MouseEvent>,
    on_toggle_theme: Callback<()>,
    on_logout: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let show_profile = use_state(|| false);
    let toggle_profile = {
        let show_profile = show_profile.clone();
        Callback::from(move |_| show_profile.set(!*show_profile))
    };
    let on_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };
    let on_sign_out = {
        let show_profile = show_profile.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            show_profile.set(false);
            on_logout.emit(());
        })
    };
    let theme_label = match props.theme {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    };

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700 h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-3">
                <button type="button" class="md:hidden p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700" aria-label="Open menu" onclick={props.on_menu.clone()}>
                    { icon_menu() }
                </button>
                <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{ props.title }</h1>
            </div>
            <div class="relative flex items-center gap-4">
                <button type="button" class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors" aria-label={theme_label} onclick={on_theme}>
                    { match props.theme { Theme::Dark => icon_sun(), Theme::Light => icon_moon() } }
                </button>
                <button type="button" class="flex items-center gap-2 p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700" aria-label="Profile" onclick={toggle_profile}>
                    { icon_user() }
                    { icon_chevron_down() }
                </button>
                if *show_profile {
                    <div class="absolute right-0 top-12 w-48 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-lg overflow-hidden z-50">
                        <button type="button" class="flex items-center gap-2 w-full px-4 py-3 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700" onclick={on_sign_out}>
                            { icon_log_out() }
                            <span>{"Sign out"}</span>
                        </button>
                    </div>
                }
            </div>
        </header>
    }
}
