use super::*;
use crate::model::TextPayload;

fn text_payload(data: Option<WindowPayload>) -> Option<TextPayload> {
    match data {
        Some(WindowPayload::Text(payload)) => Some(payload),
        _ => None,
    }
}

#[component]
/// Text file viewer. Shows an empty body with a close control until opened with a text payload.
pub fn TextWindow() -> impl IntoView {
    let store = use_window_store();
    let window = store.window(WindowId::TxtFile);
    let payload = create_memo(move |_| text_payload(window.with(|w| w.data.clone())));

    move || {
        let Some(TextPayload {
            name,
            image,
            subtitle,
            description,
        }) = payload.get()
        else {
            return view! { <EmptyWindow window_id=WindowId::TxtFile /> }.into_view();
        };
        let title = header_title(&store.registry(), WindowId::TxtFile, Some(name.as_str()));

        view! {
            <div class="flex flex-col h-full bg-white">
                <WindowHeader>
                    <WindowControls on_close=close_handler(store, WindowId::TxtFile) />
                    <WindowTitle>{title}</WindowTitle>
                </WindowHeader>
                <div class="flex-1 overflow-auto p-4">
                    {image.map(|src| {
                        view! {
                            <img
                                src=src
                                alt=name
                                class="w-full max-h-96 object-cover rounded mb-4"
                            />
                        }
                    })}
                    {subtitle.map(|subtitle| {
                        view! { <h3 class="text-lg font-semibold mb-4">{subtitle}</h3> }
                    })}
                    <div class="prose prose-sm max-w-none">
                        {description
                            .into_iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="mb-4 text-sm text-gray-700 leading-relaxed">
                                        {paragraph}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
        .into_view()
    }
}
