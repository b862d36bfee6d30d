use crate::utils::time::{format_clock_date, format_clock_time};
use chrono::Local;
use leptos::*;

/// Wall clock that ticks once a second while the view is mounted.
#[component]
pub fn LiveClock() -> impl IntoView {
    let (now, set_now) = create_signal(Local::now());

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;
        let interval = Interval::new(1_000, move || set_now.set(Local::now()));
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;

    view! {
        <div class="text-center">
            <p class="text-sm text-gray-600">{move || format_clock_date(&now.get())}</p>
            <p class="text-4xl font-mono font-semibold text-gray-900">
                {move || format_clock_time(&now.get())}
            </p>
        </div>
    }
}
