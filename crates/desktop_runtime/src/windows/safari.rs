use super::*;
use crate::content::BLOG_POSTS;

#[component]
/// Blog reader.
pub fn SafariWindow() -> impl IntoView {
    let store = use_window_store();

    view! {
        <div class="flex flex-col h-full bg-white text-black">
            <WindowHeader layout_class="flex items-center p-3 border-b">
                <WindowControls on_close=close_handler(store, WindowId::Safari) />
                <div class="flex-1 flex items-center justify-center gap-3">
                    <div class="search flex items-center bg-gray-100 rounded-md px-2 py-1 w-full max-w-md">
                        <input
                            type="text"
                            placeholder="Search or enter website name"
                            class="flex-1 bg-transparent outline-none text-sm"
                        />
                    </div>
                </div>
            </WindowHeader>
            <div class="blog overflow-y-auto p-8">
                <h2 class="text-2xl font-bold mb-6">"My Developer Blog"</h2>
                <div class="space-y-12">
                    {BLOG_POSTS
                        .iter()
                        .map(|post| {
                            view! {
                                <article class="grid grid-cols-1 md:grid-cols-3 gap-6 items-center border-b pb-8">
                                    <div class="col-span-1">
                                        <img
                                            src=post.image
                                            alt=post.title
                                            class="rounded-lg object-cover w-full h-48"
                                        />
                                    </div>
                                    <div class="content col-span-2">
                                        <p class="text-sm text-gray-500">{post.date}</p>
                                        <h3 class="text-xl font-semibold my-2">{post.title}</h3>
                                        <p class="text-gray-600 mb-4">{post.description}</p>
                                        <a
                                            href=post.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-2 text-blue-600 hover:underline"
                                        >
                                            "Check out the full post →"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
