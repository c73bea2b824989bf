use std::{cell::RefCell, rc::Rc};

use leptos::{ev::MouseEvent, html};
use platform_host::{DragHandle, DragProvider};

use super::{
    hover::{
        display_char, distance_to_center, font_variation, letter_weight, set_style, FontWeights,
        SUBTITLE_WEIGHTS, TITLE_WEIGHTS,
    },
    *,
};
use crate::{content, model::WindowPayload};

#[component]
pub(super) fn Home() -> impl IntoView {
    view! {
        <Welcome />
        <HomeFolders />
    }
}

#[component]
fn Welcome() -> impl IntoView {
    view! {
        <section id="welcome" class="min-h-screen flex flex-col justify-center p-10">
            <p>
                <HoverText
                    text="Hey Guys, I'm Nishesh! Welcome to my"
                    class="text-3xl font-georama"
                    weights=SUBTITLE_WEIGHTS
                />
            </p>
            <h1 class="mt-7">
                <HoverText text="Portfolio" class="text-9xl italic font-georama" weights=TITLE_WEIGHTS />
            </h1>
            <div class="small-screen">
                <p>"This Portfolio is designed for desktop/tab screens only."</p>
            </div>
        </section>
    }
}

/// Renders `text` one span per letter; letters near the pointer grow heavier.
#[component]
fn HoverText(text: &'static str, class: &'static str, weights: FontWeights) -> impl IntoView {
    let letters: Vec<(char, NodeRef<html::Span>)> =
        text.chars().map(|c| (c, create_node_ref())).collect();
    let spans = store_value(letters.iter().map(|(_, node_ref)| *node_ref).collect::<Vec<_>>());

    let on_move = move |ev: MouseEvent| {
        let pointer_x = f64::from(ev.client_x());
        spans.with_value(|spans| {
            for span in spans.iter().filter_map(|node_ref| node_ref.get_untracked()) {
                let weight = letter_weight(weights, distance_to_center(&span, pointer_x));
                set_style(&span, "font-variation-settings", &font_variation(weight));
            }
        });
    };
    let on_leave = move |_: MouseEvent| {
        spans.with_value(|spans| {
            for span in spans.iter().filter_map(|node_ref| node_ref.get_untracked()) {
                set_style(&span, "font-variation-settings", &font_variation(weights.base));
            }
        });
    };

    view! {
        <span class="inline-block" on:mousemove=on_move on:mouseleave=on_leave>
            {letters
                .into_iter()
                .map(|(c, node_ref)| {
                    view! {
                        <span
                            node_ref=node_ref
                            class=class
                            style:display="inline-block"
                            style:transition="font-variation-settings 0.25s ease-out"
                            style:font-variation-settings=font_variation(weights.base)
                        >
                            {display_char(c).to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

/// Drag registration for one desktop folder. Dropping it detaches the gesture.
#[derive(Default)]
struct FolderDrag {
    handle: Option<Box<dyn DragHandle>>,
}

impl FolderDrag {
    fn attach<P: DragProvider + ?Sized>(&mut self, provider: &P, element: &P::Element) {
        self.release();
        match provider.create_draggable(element, Rc::new(|| {})) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => logging::warn!("failed to make desktop folder draggable: {err}"),
        }
    }

    fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl Drop for FolderDrag {
    fn drop(&mut self) {
        self.release();
    }
}

#[component]
fn HomeFolders() -> impl IntoView {
    let store = use_window_store();

    view! {
        <section id="home">
            <ul>
                {content::projects()
                    .into_iter()
                    .map(|project| {
                        let class = match project.window_position.as_deref() {
                            Some(position) => format!("group folder {position}"),
                            None => "group folder".to_string(),
                        };
                        let icon = project
                            .icon
                            .clone()
                            .unwrap_or_else(|| "/images/folder.png".to_string());
                        let name = project.name.clone();
                        let payload = WindowPayload::Folder(project);

                        let node_ref = create_node_ref::<html::Li>();
                        let drag = Rc::new(RefCell::new(FolderDrag::default()));
                        {
                            let drag = drag.clone();
                            node_ref.on_load(move |li| {
                                let element: &web_sys::HtmlElement = &li;
                                drag.borrow_mut().attach(&*store.host().drag_provider(), element);
                            });
                        }
                        on_cleanup(move || drag.borrow_mut().release());

                        view! {
                            <li
                                node_ref=node_ref
                                class=class
                                on:click=move |_| {
                                    store.open_window(WindowId::Finder, Some(payload.clone()))
                                }
                            >
                                <img src=icon alt=name.clone() class="w-16 h-16 object-contain" />
                                <p class="mt-1">{name}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
