use super::*;
use crate::model::ImagePayload;

fn image_payload(data: Option<WindowPayload>) -> Option<ImagePayload> {
    match data {
        Some(WindowPayload::Image(payload)) => Some(payload),
        _ => None,
    }
}

#[component]
/// Image file viewer. Shows an empty body with a close control until opened with an image payload.
pub fn ImageWindow() -> impl IntoView {
    let store = use_window_store();
    let window = store.window(WindowId::ImgFile);
    let payload = create_memo(move |_| image_payload(window.with(|w| w.data.clone())));

    move || {
        let Some(ImagePayload { name, image_url }) = payload.get() else {
            return view! { <EmptyWindow window_id=WindowId::ImgFile /> }.into_view();
        };
        let title = header_title(&store.registry(), WindowId::ImgFile, Some(name.as_str()));

        view! {
            <div class="flex flex-col h-full bg-white">
                <WindowHeader>
                    <WindowControls on_close=close_handler(store, WindowId::ImgFile) />
                    <WindowTitle>{title}</WindowTitle>
                </WindowHeader>
                <div class="flex-1 overflow-auto flex items-center justify-center p-4">
                    {(!image_url.is_empty()).then(move || {
                        view! {
                            <img
                                src=image_url
                                alt=name
                                class="max-w-full max-h-full object-contain"
                            />
                        }
                    })}
                </div>
            </div>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::TextPayload;

    #[test]
    fn only_image_payloads_are_rendered() {
        let image = ImagePayload {
            name: "trip.png".to_string(),
            image_url: "/images/trip.png".to_string(),
        };
        assert_eq!(
            image_payload(Some(WindowPayload::Image(image.clone()))),
            Some(image)
        );
        assert_eq!(image_payload(None), None);
        assert_eq!(
            image_payload(Some(WindowPayload::Text(TextPayload {
                name: "notes".to_string(),
                image: None,
                subtitle: None,
                description: Vec::new(),
            }))),
            None
        );
    }
}
