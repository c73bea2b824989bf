use super::*;
use crate::content::{gallery_payload, GALLERY, PHOTOS_LINKS};

#[component]
/// Photo gallery. Images open in the image viewer; the mail control opens the contact window.
pub fn PhotosWindow() -> impl IntoView {
    let store = use_window_store();

    view! {
        <WindowHeader>
            <WindowControls on_close=close_handler(store, WindowId::Photos) />
            <div class="w-full flex justify-end items-center gap-3 text-gray-500">
                <button
                    type="button"
                    class="icon"
                    aria-label="Contact"
                    on:click=move |_| store.open_window(WindowId::Contact, None)
                >
                    "✉"
                </button>
            </div>
        </WindowHeader>
        <div class="flex w-full">
            <div class="sidebar">
                <h3>"Galleries"</h3>
                <ul>
                    {PHOTOS_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <img src=link.icon alt=link.title />
                                    <p>{link.title}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="gallery">
                <ul>
                    {GALLERY
                        .iter()
                        .map(|image| {
                            view! {
                                <li on:click=move |_| {
                                    store.open_window(WindowId::ImgFile, Some(gallery_payload(image)))
                                }>
                                    <img src=image.img alt="Gallery" />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
