use super::*;
use crate::content::{TECH_STACK, TERMINAL_PROMPT};

fn stack_summary(loaded: usize) -> String {
    format!("{loaded} of {loaded} stacks loaded. (50%)")
}

#[component]
/// Tech stack listing styled as a shell session.
pub fn TerminalWindow() -> impl IntoView {
    let store = use_window_store();

    view! {
        <WindowHeader>
            <WindowControls on_close=close_handler(store, WindowId::Terminal) />
            <WindowTitle>"Tech Stack"</WindowTitle>
        </WindowHeader>
        <div class="techstack">
            <p>
                <span class="font-bold">{TERMINAL_PROMPT} " "</span>
                "show tech stack"
            </p>
            <div class="label">
                <p class="w-32">"Category"</p>
                <p>"Technologies"</p>
            </div>
            <ul class="content">
                {TECH_STACK
                    .iter()
                    .map(|stack| {
                        view! {
                            <li class="flex items-center">
                                <span class="check" aria-hidden="true">"✓"</span>
                                <h3 class="font-semibold mr-2">{stack.category} ":"</h3>
                                <p>{stack.items.join(", ")}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="footnote">
                <p class="flex items-center gap-1">"✓ " {stack_summary(TECH_STACK.len())}</p>
                <p class="flex items-center gap-1">"⚑ End of tech stack."</p>
            </div>
        </div>
    }
}
