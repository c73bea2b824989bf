//! Static portfolio content rendered by the desktop windows.

use crate::model::{
    FinderEntry, FinderEntryKind, FolderPayload, ImagePayload, TextPayload, WindowPayload,
};

/// Brand text shown in the nav bar.
pub const BRAND: &str = "Nishesh's Portfolio";
/// Shell prompt shown by the terminal window.
pub const TERMINAL_PROMPT: &str = "@nisheshchaudhary%";
/// Resume document embedded by the resume window.
pub const RESUME_PDF: &str = "files/resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        date: "Sep 2, 2025",
        title: "TypeScript Explained: What It Is, Why It Matters, and How to Master It",
        description: "A practical tour of the type system, the compiler options that matter, and \
                      the habits that keep large codebases honest.",
        image: "/images/blog1.png",
        link: "https://jsmastery.com/blog/typescript-explained",
    },
    BlogPost {
        id: 2,
        date: "Aug 28, 2025",
        title: "The Ultimate Guide to Mastering Three.js for 3D Development",
        description: "Scenes, cameras and lights from first principles, then the performance \
                      tricks that keep a 3D page smooth.",
        image: "/images/blog2.png",
        link: "https://jsmastery.com/blog/threejs-guide",
    },
    BlogPost {
        id: 3,
        date: "Aug 15, 2025",
        title: "The Ultimate Guide to Mastering GSAP Animations",
        description: "Timelines, easing and scroll triggers, with the patterns that keep \
                      animation code maintainable.",
        image: "/images/blog3.png",
        link: "https://jsmastery.com/blog/gsap-guide",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        category: "Frontend",
        items: &["React.js", "Next.js", "TypeScript"],
    },
    TechCategory {
        category: "Mobile",
        items: &["React Native", "Expo"],
    },
    TechCategory {
        category: "Styling",
        items: &["Tailwind CSS", "Sass", "CSS"],
    },
    TechCategory {
        category: "Backend",
        items: &["Node.js", "Express", "NestJS", "Hono"],
    },
    TechCategory {
        category: "Database",
        items: &["MongoDB", "PostgreSQL"],
    },
    TechCategory {
        category: "Dev Tools",
        items: &["Git", "GitHub", "Docker"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub img: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        img: "/images/gal1.png",
    },
    GalleryImage {
        id: 2,
        img: "/images/gal2.png",
    },
    GalleryImage {
        id: 3,
        img: "/images/gal3.png",
    },
    GalleryImage {
        id: 4,
        img: "/images/gal4.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLink {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
}

pub const PHOTOS_LINKS: &[SidebarLink] = &[
    SidebarLink {
        id: 1,
        icon: "/icons/gicon1.svg",
        title: "Library",
    },
    SidebarLink {
        id: 2,
        icon: "/icons/gicon2.svg",
        title: "Memories",
    },
    SidebarLink {
        id: 3,
        icon: "/icons/file.svg",
        title: "Places",
    },
    SidebarLink {
        id: 4,
        icon: "/icons/gicon4.svg",
        title: "People",
    },
    SidebarLink {
        id: 5,
        icon: "/icons/gicon5.svg",
        title: "Favorites",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavIcon {
    pub id: u32,
    pub img: &'static str,
}

pub const NAV_ICONS: &[NavIcon] = &[
    NavIcon {
        id: 1,
        img: "/icons/wifi.svg",
    },
    NavIcon {
        id: 2,
        img: "/icons/search.svg",
    },
    NavIcon {
        id: 3,
        img: "/icons/user.svg",
    },
    NavIcon {
        id: 4,
        img: "/icons/mode.svg",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub id: u32,
    pub text: &'static str,
    pub icon: &'static str,
    pub bg: &'static str,
    pub link: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        id: 1,
        text: "Github",
        icon: "/icons/github.svg",
        bg: "#f4656b",
        link: "https://github.com/nisheshchaudhary",
    },
    Social {
        id: 2,
        text: "Platform",
        icon: "/icons/atom.svg",
        bg: "#4bcb63",
        link: "https://jsmastery.com",
    },
    Social {
        id: 3,
        text: "Twitter/X",
        icon: "/icons/twitter.svg",
        bg: "#ff866b",
        link: "https://x.com/nisheshchaudhary",
    },
    Social {
        id: 4,
        text: "LinkedIn",
        icon: "/icons/linkedin.svg",
        bg: "#05b6f6",
        link: "https://www.linkedin.com/in/nisheshchaudhary",
    },
];

/// Contact address shown by the contact window.
pub const CONTACT_EMAIL: &str = "hello@nisheshchaudhary.dev";

struct ProjectSeed {
    id: u32,
    name: &'static str,
    window_position: &'static str,
    summary: &'static [&'static str],
    preview: &'static str,
    link: &'static str,
}

const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        id: 5,
        name: "Nike Ecommerce Website Application",
        window_position: "top-10 left-5",
        summary: &[
            "A storefront for browsing and buying sneakers with filtering and a persistent cart.",
            "Built with Next.js and Tailwind, with server-rendered product pages.",
        ],
        preview: "/images/project-1.png",
        link: "https://youtu.be/fZdTYswuZjU",
    },
    ProjectSeed {
        id: 6,
        name: "AI Resume Analyzer",
        window_position: "top-52 right-80",
        summary: &[
            "Scores a resume against a job description and suggests concrete rewrites.",
            "Uses React Router, Puter storage and an LLM-backed feedback pipeline.",
        ],
        preview: "/images/project-2.png",
        link: "https://youtu.be/iYOz165wGkQ",
    },
    ProjectSeed {
        id: 7,
        name: "Food Delivery App",
        window_position: "top-10 left-80",
        summary: &[
            "A mobile ordering app with menus, cart, checkout and live order status.",
            "Built with React Native, Expo and Appwrite.",
        ],
        preview: "/images/project-3.png",
        link: "https://youtu.be/LKrX390fJMw",
    },
];

fn project_folder(seed: &ProjectSeed) -> FolderPayload {
    let base = seed.id * 10;
    FolderPayload {
        id: seed.id,
        name: seed.name.to_string(),
        icon: Some("/images/folder.png".to_string()),
        window_position: Some(seed.window_position.to_string()),
        children: vec![
            FinderEntry {
                id: base + 1,
                name: format!("{}.txt", seed.name),
                icon: "/images/txt.png".to_string(),
                position: Some("top-5 left-10".to_string()),
                kind: FinderEntryKind::TextFile(TextPayload {
                    name: seed.name.to_string(),
                    image: None,
                    subtitle: None,
                    description: seed.summary.iter().map(|line| line.to_string()).collect(),
                }),
            },
            FinderEntry {
                id: base + 2,
                name: format!("{}.com", seed.name.to_lowercase().replace(' ', "-")),
                icon: "/images/safari.png".to_string(),
                position: Some("top-10 right-20".to_string()),
                kind: FinderEntryKind::Link {
                    href: seed.link.to_string(),
                },
            },
            FinderEntry {
                id: base + 3,
                name: format!("{}.png", seed.name.to_lowercase().replace(' ', "-")),
                icon: "/images/image.png".to_string(),
                position: Some("top-52 right-80".to_string()),
                kind: FinderEntryKind::ImageFile(ImagePayload {
                    name: seed.name.to_string(),
                    image_url: seed.preview.to_string(),
                }),
            },
        ],
    }
}

/// Project folders shown on the desktop and inside the work location.
pub fn projects() -> Vec<FolderPayload> {
    PROJECTS.iter().map(project_folder).collect()
}

/// The "Work" location listing every project folder.
pub fn work_location() -> FolderPayload {
    FolderPayload {
        id: 1,
        name: "Work".to_string(),
        icon: Some("/icons/work.svg".to_string()),
        window_position: None,
        children: projects()
            .into_iter()
            .map(|folder| FinderEntry {
                id: folder.id,
                name: folder.name.clone(),
                icon: folder
                    .icon
                    .clone()
                    .unwrap_or_else(|| "/images/folder.png".to_string()),
                position: folder.window_position.clone(),
                kind: FinderEntryKind::Folder(folder),
            })
            .collect(),
    }
}

/// The "About me" location.
pub fn about_location() -> FolderPayload {
    FolderPayload {
        id: 2,
        name: "About me".to_string(),
        icon: Some("/icons/info.svg".to_string()),
        window_position: None,
        children: vec![
            FinderEntry {
                id: 21,
                name: "me.png".to_string(),
                icon: "/images/image.png".to_string(),
                position: Some("top-10 left-5".to_string()),
                kind: FinderEntryKind::ImageFile(ImagePayload {
                    name: "me.png".to_string(),
                    image_url: "/images/nishesh.png".to_string(),
                }),
            },
            FinderEntry {
                id: 22,
                name: "about-me.txt".to_string(),
                icon: "/images/txt.png".to_string(),
                position: Some("top-60 left-5".to_string()),
                kind: FinderEntryKind::TextFile(TextPayload {
                    name: "about-me.txt".to_string(),
                    image: Some("/images/nishesh.png".to_string()),
                    subtitle: Some("Meet the developer behind the code".to_string()),
                    description: vec![
                        "Hey! I'm Nishesh, a web developer who enjoys building sleek, \
                         interactive websites that actually work well."
                            .to_string(),
                        "I specialize in JavaScript, React and Next.js, and I like making \
                         things feel smooth, fast and a little bit delightful."
                            .to_string(),
                    ],
                }),
            },
        ],
    }
}

/// The "Trash" location with archived assets.
pub fn trash_location() -> FolderPayload {
    FolderPayload {
        id: 4,
        name: "Trash".to_string(),
        icon: Some("/icons/trash.svg".to_string()),
        window_position: None,
        children: vec![FinderEntry {
            id: 41,
            name: "trash1.png".to_string(),
            icon: "/images/image.png".to_string(),
            position: Some("top-10 left-10".to_string()),
            kind: FinderEntryKind::ImageFile(ImagePayload {
                name: "trash1.png".to_string(),
                image_url: "/images/trash-1.png".to_string(),
            }),
        }],
    }
}

/// Finder sidebar locations in display order.
pub fn locations() -> Vec<FolderPayload> {
    vec![work_location(), about_location(), trash_location()]
}

/// Payload the image viewer opens with for a gallery image.
pub fn gallery_payload(image: &GalleryImage) -> WindowPayload {
    WindowPayload::Image(ImagePayload {
        name: "Gallery image".to_string(),
        image_url: image.img.to_string(),
    })
}
