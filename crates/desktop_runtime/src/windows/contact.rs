use super::*;
use crate::content::{CONTACT_EMAIL, SOCIALS};

#[component]
/// Contact card with social links.
pub fn ContactWindow() -> impl IntoView {
    let store = use_window_store();

    view! {
        <WindowHeader>
            <WindowControls on_close=close_handler(store, WindowId::Contact) />
            <WindowTitle>"Contact Me"</WindowTitle>
        </WindowHeader>
        <div class="p-5 space-y-5">
            <img src="/images/nishesh.png" alt="Nishesh" class="w-20 rounded-full" />
            <h3>"Let's Connect"</h3>
            <p>"Got an idea? A bug to squash? Or just wanna talk tech? I'm in."</p>
            <p>{CONTACT_EMAIL}</p>
            <ul>
                {SOCIALS
                    .iter()
                    .map(|social| {
                        view! {
                            <li style:background-color=social.bg>
                                <a
                                    href=social.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title=social.text
                                >
                                    <img src=social.icon alt=social.text class="size-5" />
                                    <p>{social.text}</p>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
