use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::adapter::stacking_value;

/// A presentation component bound to one window id.
///
/// Rendering it wraps the content in a [`ManagedWindow`], which owns visibility, stacking, the
/// entry transition and drag. The content reads its payload from the store itself.
pub struct WindowedComponent<F> {
    window_id: WindowId,
    content: F,
}

impl<F> WindowedComponent<F> {
    /// Window the content is bound to.
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }
}

/// Binds `content` to `window_id`.
pub fn make_window_adapter<F, V>(content: F, window_id: WindowId) -> WindowedComponent<F>
where
    F: FnOnce() -> V + 'static,
    V: IntoView,
{
    WindowedComponent { window_id, content }
}

impl<F, V> IntoView for WindowedComponent<F>
where
    F: FnOnce() -> V + 'static,
    V: IntoView,
{
    fn into_view(self) -> View {
        let content = self.content;
        view! {
            <ManagedWindow window_id=self.window_id>
                {content()}
            </ManagedWindow>
        }
        .into_view()
    }
}

#[component]
/// Window container whose visibility, stacking and drag follow the store descriptor.
pub fn ManagedWindow(window_id: WindowId, children: Children) -> impl IntoView {
    let store = use_window_store();
    let window = store.window(window_id);
    let title = store
        .registry
        .with_value(|registry| registry.title(window_id).to_string());
    let node_ref = create_node_ref::<html::Section>();
    let adapter = Rc::new(RefCell::new(store.host().window_adapter(window_id)));

    {
        let adapter = adapter.clone();
        node_ref.on_load(move |section| {
            let element: &web_sys::HtmlElement = &section;
            let on_press: Rc<dyn Fn()> = Rc::new(move || store.focus_window(window_id));
            adapter
                .borrow_mut()
                .mount(element.clone(), on_press, &store.get_window(window_id));
        });
    }

    {
        let adapter = adapter.clone();
        create_effect(move |_| {
            let descriptor = window.get();
            adapter.borrow_mut().sync(&descriptor);
        });
    }

    on_cleanup(move || adapter.borrow_mut().unmount());

    view! {
        <section
            id=window_id.key()
            node_ref=node_ref
            class="window-container"
            role="dialog"
            aria-label=title
            data-window-id=window_id.key()
            style:position="absolute"
            style:display="none"
            style:z-index=move || window.with(|descriptor| stacking_value(descriptor.z_index))
        >
            {children()}
        </section>
    }
}
