use crate::api::ApiClient;
use crate::state::photo_cache::PhotoCache;
use leptos::*;

/// Thumbnail for one attendance photo. The storage path is resolved to a data
/// URI lazily, through the shared [`PhotoCache`], so a path that appears on
/// several pages is converted once. Clicking the thumbnail opens a full-size
/// overlay; clicking the backdrop closes it.
#[component]
pub fn PhotoCell(path: Option<String>) -> impl IntoView {
    let Some(path) = path else {
        return view! { <span class="text-gray-400">"-"</span> }.into_view();
    };

    let api = use_context::<ApiClient>().unwrap_or_default();
    let cache = use_context::<PhotoCache>().unwrap_or_default();
    let (expanded, set_expanded) = create_signal(false);

    let photo_resource = create_resource(
        move || path.clone(),
        move |path| {
            let api = api.clone();
            let cache = cache.clone();
            async move { cache.resolve(&api, &path).await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <span class="text-gray-400">"..."</span> }>
            {move || {
                photo_resource.get().map(|result| match result {
                    Ok(uri) => {
                        let overlay_uri = uri.clone();
                        view! {
                            <img
                                src=uri
                                alt="attendance photo"
                                class="h-10 w-10 rounded object-cover cursor-pointer"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_expanded.set(true);
                                }
                            />
                            <PhotoOverlay
                                uri=overlay_uri
                                expanded=expanded
                                set_expanded=set_expanded
                            />
                        }
                        .into_view()
                    }
                    Err(_) => view! { <span class="text-gray-400">"unavailable"</span> }.into_view(),
                })
            }}
        </Suspense>
    }
    .into_view()
}

/// Full-size view of a resolved photo. The cell sits inside a table row, so
/// every dismissal path stops the click from bubbling into row handlers.
#[component]
fn PhotoOverlay(
    uri: String,
    expanded: ReadSignal<bool>,
    set_expanded: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || expanded.get() fallback=|| ()>
            <div
                class="fixed inset-0 bg-black/60 flex items-center justify-center z-50"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_expanded.set(false);
                }
            >
                <button
                    class="absolute top-4 right-4 text-white text-2xl"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_expanded.set(false);
                    }
                >
                    "\u{00d7}"
                </button>
                <img
                    src=uri.clone()
                    alt="attendance photo"
                    class="max-h-[80vh] max-w-[80vw] rounded shadow-lg"
                    on:click=|ev| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn missing_path_renders_a_dash() {
        let html = render_to_string(|| view! { <PhotoCell path=None /> });
        assert!(html.contains("-"));
    }

    #[test]
    fn overlay_renders_backdrop_close_control_and_image_when_expanded() {
        let html = render_to_string(|| {
            let (expanded, set_expanded) = create_signal(true);
            view! {
                <PhotoOverlay
                    uri="data:image/png;base64,aGVsbG8=".to_string()
                    expanded=expanded
                    set_expanded=set_expanded
                />
            }
        });
        assert!(html.contains("fixed inset-0"));
        assert!(html.contains("data:image/png;base64,aGVsbG8="));
        assert!(html.contains("\u{00d7}"));
    }

    #[test]
    fn overlay_is_absent_until_expanded() {
        let html = render_to_string(|| {
            let (expanded, set_expanded) = create_signal(false);
            view! {
                <PhotoOverlay
                    uri="data:image/png;base64,aGVsbG8=".to_string()
                    expanded=expanded
                    set_expanded=set_expanded
                />
            }
        });
        assert!(!html.contains("fixed inset-0"));
    }
}
