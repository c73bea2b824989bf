use leptos::{ev::MouseEvent, html};
use system_ui::DockButton;

use super::{
    hover::{distance_to_center, dock_magnification, set_style, Magnification},
    *,
};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let store = use_window_store();
    let items = store.registry.with_value(|registry| registry.dock_entries());
    let slots: Vec<NodeRef<html::Div>> = items.iter().map(|_| create_node_ref()).collect();
    let icons = store_value(slots.clone());

    let on_move = move |ev: MouseEvent| {
        let pointer_x = f64::from(ev.client_x());
        icons.with_value(|icons| {
            for icon in icons.iter().filter_map(|node_ref| node_ref.get_untracked()) {
                let magnified = dock_magnification(distance_to_center(&icon, pointer_x));
                set_style(&icon, "transform", &magnified.transform());
            }
        });
    };
    let on_leave = move |_: MouseEvent| {
        icons.with_value(|icons| {
            for icon in icons.iter().filter_map(|node_ref| node_ref.get_untracked()) {
                set_style(&icon, "transform", &Magnification::REST.transform());
            }
        });
    };

    view! {
        <section id="dock">
            <div class="dock-container" on:mousemove=on_move on:mouseleave=on_leave>
                {items
                    .into_iter()
                    .zip(slots)
                    .map(|(item, node_ref)| {
                        let window_id = item.id;
                        let active = Signal::derive(move || {
                            store.state.with(|state| state.window(window_id).is_open)
                        });
                        view! {
                            <div
                                node_ref=node_ref
                                class="relative flex justify-center"
                                style:transition="transform 0.2s ease-out"
                                data-window-id=window_id.key()
                            >
                                <DockButton
                                    label=item.label
                                    icon=item.icon
                                    disabled=!item.can_open
                                    active=active
                                    on_click=Callback::new(move |_| store.toggle_app(window_id))
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
