use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of window identifiers known to the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    Finder,
    Resume,
    Safari,
    Photos,
    Contact,
    Terminal,
    #[serde(rename = "txtfile")]
    TxtFile,
    #[serde(rename = "imgfile")]
    ImgFile,
    Trash,
}

impl WindowId {
    pub const COUNT: usize = 9;

    pub const ALL: [WindowId; Self::COUNT] = [
        Self::Finder,
        Self::Resume,
        Self::Safari,
        Self::Photos,
        Self::Contact,
        Self::Terminal,
        Self::TxtFile,
        Self::ImgFile,
        Self::Trash,
    ];

    /// Stable string key used in DOM ids, deep links, and the window manifest.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Resume => "resume",
            Self::Safari => "safari",
            Self::Photos => "photos",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::TxtFile => "txtfile",
            Self::ImgFile => "imgfile",
            Self::Trash => "trash",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Position of this id in [`WindowId::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Finder => 0,
            Self::Resume => 1,
            Self::Safari => 2,
            Self::Photos => 3,
            Self::Contact => 4,
            Self::Terminal => 5,
            Self::TxtFile => 6,
            Self::ImgFile => 7,
            Self::Trash => 8,
        }
    }

    /// Payload shape this window accepts.
    pub const fn payload_kind(self) -> PayloadKind {
        match self {
            Self::Finder => PayloadKind::Folder,
            Self::TxtFile => PayloadKind::Text,
            Self::ImgFile => PayloadKind::Image,
            Self::Resume
            | Self::Safari
            | Self::Photos
            | Self::Contact
            | Self::Terminal
            | Self::Trash => PayloadKind::None,
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    Folder,
    Text,
    Image,
    /// The window renders registry-driven content and ignores payloads.
    None,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Folder => "folder",
            Self::Text => "text",
            Self::Image => "image",
            Self::None => "none",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPayload {
    pub name: String,
    pub image: Option<String>,
    pub subtitle: Option<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinderEntryKind {
    Folder(FolderPayload),
    TextFile(TextPayload),
    ImageFile(ImagePayload),
    Link { href: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderEntry {
    pub id: u32,
    pub name: String,
    pub icon: String,
    /// Layout class positioning the entry inside the finder grid.
    pub position: Option<String>,
    pub kind: FinderEntryKind,
}

/// Folder shown by the finder window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPayload {
    pub id: u32,
    pub name: String,
    pub icon: Option<String>,
    /// Layout class placing the folder icon on the desktop.
    pub window_position: Option<String>,
    pub children: Vec<FinderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPayload {
    Folder(FolderPayload),
    Text(TextPayload),
    Image(ImagePayload),
}

impl WindowPayload {
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Folder(_) => PayloadKind::Folder,
            Self::Text(_) => PayloadKind::Text,
            Self::Image(_) => PayloadKind::Image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub is_open: bool,
    pub z_index: u32,
    /// Last payload the window was opened with. Survives close.
    pub data: Option<WindowPayload>,
}

impl WindowDescriptor {
    pub const fn closed(id: WindowId) -> Self {
        Self {
            id,
            is_open: false,
            z_index: 0,
            data: None,
        }
    }

    pub const fn phase(&self) -> WindowPhase {
        if self.is_open {
            WindowPhase::Open
        } else {
            WindowPhase::Closed
        }
    }
}

/// Two-state lifecycle of a window. Focus is a same-state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowPhase {
    #[default]
    Closed,
    Open,
}

/// Store state: one descriptor per [`WindowId`] plus the shared stacking counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    windows: [WindowDescriptor; WindowId::COUNT],
    z_counter: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: WindowId::ALL.map(WindowDescriptor::closed),
            z_counter: 0,
        }
    }
}

impl DesktopState {
    pub fn window(&self, id: WindowId) -> &WindowDescriptor {
        &self.windows[id.index()]
    }

    pub(crate) fn window_mut(&mut self, id: WindowId) -> &mut WindowDescriptor {
        &mut self.windows[id.index()]
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.windows.iter()
    }

    /// Highest stacking value handed out so far.
    pub const fn z_counter(&self) -> u32 {
        self.z_counter
    }

    pub(crate) fn set_z_counter(&mut self, value: u32) {
        self.z_counter = value;
    }

    pub fn open_window_ids(&self) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_open)
            .map(|w| w.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_ids_index_into_all_in_order() {
        for (index, id) in WindowId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(WindowId::from_key(id.key()), Some(id));
        }
        assert_eq!(WindowId::from_key("calculator"), None);
    }

    #[test]
    fn default_state_has_every_window_closed_at_zero() {
        let state = DesktopState::default();
        assert_eq!(state.windows().count(), WindowId::COUNT);
        for id in WindowId::ALL {
            assert_eq!(state.window(id), &WindowDescriptor::closed(id));
        }
        assert_eq!(state.z_counter(), 0);
        assert!(state.open_window_ids().is_empty());
    }

    #[test]
    fn window_ids_serialize_as_manifest_keys() {
        for id in WindowId::ALL {
            assert_eq!(
                serde_json::to_string(&id).expect("serialize"),
                format!("\"{}\"", id.key())
            );
        }
    }

    #[test]
    fn payload_kinds_follow_window_kind() {
        assert_eq!(WindowId::Finder.payload_kind(), PayloadKind::Folder);
        assert_eq!(WindowId::TxtFile.payload_kind(), PayloadKind::Text);
        assert_eq!(WindowId::ImgFile.payload_kind(), PayloadKind::Image);
        assert_eq!(WindowId::Terminal.payload_kind(), PayloadKind::None);
        let image = WindowPayload::Image(ImagePayload {
            name: "Gallery image".to_string(),
            image_url: "/images/gal1.png".to_string(),
        });
        assert_eq!(image.kind(), PayloadKind::Image);
    }
}
