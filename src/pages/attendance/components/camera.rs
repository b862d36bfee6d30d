use leptos::*;

/// Live webcam preview plus the hidden canvas frames are captured onto. The
/// stream is acquired when the view mounts and released on cleanup so the
/// camera indicator turns off when the user leaves the page.
#[component]
pub fn CameraFeed(
    video_ref: NodeRef<html::Video>,
    canvas_ref: NodeRef<html::Canvas>,
) -> impl IntoView {
    let camera_error = create_rw_signal(None::<String>);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::utils::camera::{open_camera_stream, stop_stream};
        use std::cell::RefCell;
        use std::rc::Rc;

        let stream_handle = Rc::new(RefCell::new(None::<web_sys::MediaStream>));

        let handle = stream_handle.clone();
        create_effect(move |_| {
            let Some(video) = video_ref.get() else {
                return;
            };
            let handle = handle.clone();
            spawn_local(async move {
                match open_camera_stream().await {
                    Ok(stream) => {
                        video.set_src_object(Some(&stream));
                        *handle.borrow_mut() = Some(stream);
                    }
                    Err(err) => camera_error.set(Some(err.to_string())),
                }
            });
        });

        let handle = stream_handle.clone();
        on_cleanup(move || {
            if let Some(stream) = handle.borrow_mut().take() {
                stop_stream(&stream);
            }
        });
    }

    view! {
        <div class="flex flex-col items-center gap-2">
            <video
                node_ref=video_ref
                autoplay=true
                playsinline=true
                muted=true
                class="w-full max-w-md rounded-lg bg-black aspect-video"
            ></video>
            <canvas node_ref=canvas_ref class="hidden"></canvas>
            {move || {
                camera_error
                    .get()
                    .map(|message| {
                        view! { <p class="text-sm text-status-error-text">{message}</p> }
                    })
            }}
        </div>
    }
}
