use super::*;
use crate::{
    content,
    model::{FinderEntry, FinderEntryKind, FolderPayload},
};

#[derive(Debug, Clone, PartialEq)]
enum EntryAction {
    Open(WindowId, WindowPayload),
    External(String),
}

fn entry_action(entry: &FinderEntry) -> EntryAction {
    match &entry.kind {
        FinderEntryKind::Folder(folder) => {
            EntryAction::Open(WindowId::Finder, WindowPayload::Folder(folder.clone()))
        }
        FinderEntryKind::TextFile(text) => {
            EntryAction::Open(WindowId::TxtFile, WindowPayload::Text(text.clone()))
        }
        FinderEntryKind::ImageFile(image) => {
            EntryAction::Open(WindowId::ImgFile, WindowPayload::Image(image.clone()))
        }
        FinderEntryKind::Link { href } => EntryAction::External(href.clone()),
    }
}

/// Folder to list: the payload when it is a folder, otherwise the work location.
fn active_folder(data: Option<&WindowPayload>) -> FolderPayload {
    match data {
        Some(WindowPayload::Folder(folder)) => folder.clone(),
        _ => content::work_location(),
    }
}

fn run_entry_action(store: WindowStore, action: EntryAction) {
    match action {
        EntryAction::Open(window_id, payload) => store.open_window(window_id, Some(payload)),
        EntryAction::External(href) => {
            if let Err(err) = window().open_with_url_and_target(&href, "_blank") {
                logging::warn!("failed to open {href}: {err:?}");
            }
        }
    }
}

#[component]
fn SidebarList(
    title: &'static str,
    folders: Vec<FolderPayload>,
    active_id: Memo<u32>,
) -> impl IntoView {
    let store = use_window_store();

    view! {
        <div>
            <h3>{title}</h3>
            <ul>
                {folders
                    .into_iter()
                    .map(|folder| {
                        let id = folder.id;
                        let name = folder.name.clone();
                        let icon = folder
                            .icon
                            .clone()
                            .unwrap_or_else(|| "/images/folder.png".to_string());
                        let payload = WindowPayload::Folder(folder);
                        view! {
                            <li
                                class:active=move || active_id.get() == id
                                on:click=move |_| {
                                    store.open_window(WindowId::Finder, Some(payload.clone()))
                                }
                            >
                                <img src=icon class="w-4" alt=name.clone() />
                                <p class="text-sm font-medium truncate">{name}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
/// Folder browser. Opened without a folder payload it lists the work location.
pub fn FinderWindow() -> impl IntoView {
    let store = use_window_store();
    let window = store.window(WindowId::Finder);
    let folder = create_memo(move |_| window.with(|w| active_folder(w.data.as_ref())));
    let active_id = create_memo(move |_| folder.with(|folder| folder.id));

    view! {
        <WindowHeader>
            <WindowControls on_close=close_handler(store, WindowId::Finder) />
            <WindowTitle>{move || folder.with(|folder| folder.name.clone())}</WindowTitle>
        </WindowHeader>
        <div class="bg-white flex h-full">
            <div class="sidebar">
                <SidebarList title="Favorites" folders=content::locations() active_id=active_id />
                <SidebarList title="Work" folders=content::projects() active_id=active_id />
            </div>
            <ul class="content">
                {move || {
                    folder
                        .get()
                        .children
                        .into_iter()
                        .map(|entry| {
                            let class = match entry.position.as_deref() {
                                Some(position) => format!("group {position}"),
                                None => "group".to_string(),
                            };
                            let action = entry_action(&entry);
                            view! {
                                <li
                                    class=class
                                    on:click=move |_| run_entry_action(store, action.clone())
                                >
                                    <img src=entry.icon alt=entry.name.clone() />
                                    <p>{entry.name}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
