use super::photo_cell::PhotoCell;
use crate::api::AttendanceRecord;
use crate::pages::admin::utils::{page_count, page_slice};
use leptos::*;

fn format_hours(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".into())
}

fn format_time(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".into())
}

#[component]
pub fn ReportTable(records: Vec<AttendanceRecord>, page: RwSignal<usize>) -> impl IntoView {
    if records.is_empty() {
        return view! {
            <p class="text-center text-gray-500 py-8">"No attendance records found"</p>
        }
        .into_view();
    }

    let total_pages = page_count(records.len());
    let records = store_value(records);
    let rows = move || {
        records.with_value(|records| page_slice(records, page.get()).to_vec())
    };

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Date"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Name"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Department"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Check-in"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Photo"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Check-out"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Photo"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Hours"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Overtime"</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <tr>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-900">
                                            {record.date.format("%Y-%m-%d").to_string()}
                                        </td>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-900">{record.name}</td>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-500">{record.department}</td>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-500">
                                            {format_time(&record.check_in_time)}
                                        </td>
                                        <td class="px-4 py-3 whitespace-nowrap">
                                            <PhotoCell path=record.check_in_photo />
                                        </td>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-500">
                                            {format_time(&record.check_out_time)}
                                        </td>
                                        <td class="px-4 py-3 whitespace-nowrap">
                                            <PhotoCell path=record.check_out_photo />
                                        </td>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-500">
                                            {format_hours(record.hours_worked)}
                                        </td>
                                        <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-500">
                                            {format_hours(record.overtime)}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
        <div class="flex items-center justify-between px-4 py-3">
            <button
                class="px-3 py-1 border rounded text-sm disabled:opacity-50"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="text-sm text-gray-600">
                {move || format!("Page {} of {}", page.get(), total_pages)}
            </span>
            <button
                class="px-3 py-1 border rounded text-sm disabled:opacity-50"
                disabled=move || page.get() >= total_pages
                on:click=move |_| {
                    page.update(|p| {
                        if *p < total_pages {
                            *p += 1;
                        }
                    })
                }
            >
                "Next"
            </button>
        </div>
    }
    .into_view()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn record(id: i64, name: &str) -> AttendanceRecord {
        AttendanceRecord {
            id,
            name: name.into(),
            department: "ops".into(),
            date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            check_in_time: Some("09:00:00".into()),
            check_in_photo: None,
            check_out_time: None,
            check_out_photo: None,
            hours_worked: Some(8.0),
            overtime: None,
        }
    }

    #[test]
    fn empty_report_shows_placeholder() {
        let html = render_to_string(|| {
            let page = create_rw_signal(1usize);
            view! { <ReportTable records=Vec::new() page=page /> }
        });
        assert!(html.contains("No attendance records found"));
    }

    #[test]
    fn table_shows_only_the_current_page() {
        let records: Vec<_> = (0..12).map(|i| record(i, &format!("user{i}"))).collect();
        let html = render_to_string(move || {
            let page = create_rw_signal(1usize);
            view! { <ReportTable records=records.clone() page=page /> }
        });
        assert!(html.contains("user0"));
        assert!(html.contains("user9"));
        assert!(!html.contains("user10"));
        assert!(html.contains("Page 1 of 2"));
    }

    #[test]
    fn second_page_shows_the_remainder() {
        let records: Vec<_> = (0..12).map(|i| record(i, &format!("user{i}"))).collect();
        let html = render_to_string(move || {
            let page = create_rw_signal(2usize);
            view! { <ReportTable records=records.clone() page=page /> }
        });
        assert!(html.contains("user10"));
        assert!(html.contains("user11"));
        assert!(!html.contains("user9"));
    }
}
