use std::time::Duration;

use super::*;
use crate::content::{BRAND, NAV_ICONS};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    /// 0 = Sunday.
    weekday: u32,
    /// 0 = January.
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// `ddd MMM D h:mm A`, e.g. `Thu Jan 1 12:00 AM`.
fn format_clock(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
    let month = MONTHS[(snapshot.month % 12) as usize];
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!(
        "{weekday} {month} {} {hour}:{:02} {suffix}",
        snapshot.day, snapshot.minute
    )
}

#[component]
pub(super) fn NavBar() -> impl IntoView {
    let store = use_window_store();
    let links = store.registry.with_value(|registry| registry.nav_links());
    let clock = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(30),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <nav class="desktop-navbar">
            <div>
                <img src="/images/logo.svg" alt="logo" />
                <p class="font-bold">{BRAND}</p>
                <ul>
                    {links
                        .into_iter()
                        .map(|link| {
                            let window_id = link.id;
                            view! {
                                <li
                                    class="cursor-pointer select-none"
                                    data-window-id=window_id.key()
                                    on:click=move |_| {
                                        logging::log!("opening window from nav: {window_id}");
                                        store.open_window(window_id, None);
                                    }
                                >
                                    <p>{link.label}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div>
                <ul>
                    {NAV_ICONS
                        .iter()
                        .map(|icon| {
                            view! {
                                <li>
                                    <img
                                        src=icon.img
                                        class="icon-hover"
                                        alt=format!("icon-{}", icon.id)
                                    />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <time>{move || format_clock(clock.get())}</time>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot(weekday: u32, month: u32, day: u32, hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            weekday,
            month,
            day,
            hour,
            minute,
        }
    }

    #[test]
    fn clock_uses_twelve_hour_time_without_hour_padding() {
        assert_eq!(format_clock(snapshot(1, 8, 2, 9, 5)), "Mon Sep 2 9:05 AM");
        assert_eq!(format_clock(snapshot(5, 11, 25, 18, 30)), "Fri Dec 25 6:30 PM");
    }

    #[test]
    fn clock_maps_midnight_and_noon_to_twelve() {
        assert_eq!(format_clock(snapshot(0, 0, 1, 0, 0)), "Sun Jan 1 12:00 AM");
        assert_eq!(format_clock(snapshot(3, 5, 14, 12, 1)), "Wed Jun 14 12:01 PM");
    }
}
