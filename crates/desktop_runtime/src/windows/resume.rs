use super::*;
use crate::content::RESUME_PDF;

#[component]
/// Embedded resume with a download link.
pub fn ResumeWindow() -> impl IntoView {
    let store = use_window_store();

    view! {
        <div class="flex flex-col h-full bg-white">
            <WindowHeader>
                <WindowControls on_close=close_handler(store, WindowId::Resume) />
                <WindowTitle>"Resume.pdf"</WindowTitle>
                <a href=RESUME_PDF download="" class="cursor-pointer" title="Download resume">
                    "Download"
                </a>
            </WindowHeader>
            <div class="flex-1 overflow-auto">
                <object data=RESUME_PDF type="application/pdf" class="w-full h-full">
                    <p>
                        "The resume could not be displayed. "
                        <a href=RESUME_PDF download="">"Download it instead."</a>
                    </p>
                </object>
            </div>
        </div>
    }
}
