use desktop_runtime::{use_window_store, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Splits an `open` query value (`finder,terminal`) into window keys, in order.
///
/// Blank segments are skipped and repeated keys keep their first position.
pub fn parse_open_query(raw: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in raw.split(',').map(str::trim).filter(|key| !key.is_empty()) {
        if !keys.iter().any(|seen| seen == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Nishesh's Portfolio" />
        <Meta name="description" content="A macOS-style portfolio desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DeepLinks />
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Opens every window named by `?open=` once the store exists.
#[component]
fn DeepLinks() -> impl IntoView {
    let store = use_window_store();
    let query = use_query_map();
    let keys = query.with_untracked(|map| {
        map.get("open")
            .map(|raw| parse_open_query(raw))
            .unwrap_or_default()
    });

    for key in keys {
        match store.open_window_by_key(&key, None) {
            Ok(window_id) => logging::log!("deep link opened `{window_id}`"),
            Err(err) => logging::warn!("ignoring deep link: {err}"),
        }
    }
}
