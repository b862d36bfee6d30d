use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Camera is not available")]
    CameraUnavailable,
    #[error("Video stream is not ready yet")]
    StreamNotReady,
    #[error("Failed to encode the captured frame")]
    EncodeFailed,
    #[error("Captured image is not a valid data URI")]
    BadDataUri,
}

/// Exclusively acquires the webcam. The stream must be released with
/// [`stop_stream`] when the owning view is torn down.
pub async fn open_camera_stream() -> Result<MediaStream, CaptureError> {
    let navigator = web_sys::window()
        .ok_or(CaptureError::CameraUnavailable)?
        .navigator();
    let devices = navigator
        .media_devices()
        .map_err(|_| CaptureError::CameraUnavailable)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::from_bool(true));

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| CaptureError::CameraUnavailable)?;
    let stream = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| CaptureError::CameraUnavailable)?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| CaptureError::CameraUnavailable)
}

pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Draws the current video frame onto the offscreen canvas and returns it as
/// a PNG data URI.
pub fn capture_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
) -> Result<String, CaptureError> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return Err(CaptureError::StreamNotReady);
    }
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(|_| CaptureError::EncodeFailed)?
        .ok_or(CaptureError::EncodeFailed)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CaptureError::EncodeFailed)?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|_| CaptureError::EncodeFailed)?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| CaptureError::EncodeFailed)
}

/// Decodes the payload of a base64 data URI into raw bytes for upload.
pub fn data_uri_bytes(data_uri: &str) -> Result<Vec<u8>, CaptureError> {
    let (_, payload) = data_uri
        .split_once(";base64,")
        .ok_or(CaptureError::BadDataUri)?;
    STANDARD
        .decode(payload)
        .map_err(|_| CaptureError::BadDataUri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_bytes_decodes_png_payload() {
        let bytes = data_uri_bytes("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn data_uri_bytes_rejects_non_data_uri() {
        assert!(data_uri_bytes("uploads/checkin-1.png").is_err());
        assert!(data_uri_bytes("data:image/png;base64,!!!").is_err());
    }
}
