//! Month calendar where only bookable days are clickable.

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::booking::calendar::{is_bookable, CalendarMonth, WEEKDAYS};

fn day_class(date: NaiveDate, today: NaiveDate, selected: Option<NaiveDate>) -> &'static str {
    if selected == Some(date) {
        "calendar-day"
    } else if date == today {
        "calendar-day today outline"
    } else {
        "calendar-day outline secondary"
    }
}

#[component]
pub fn Calendar(
    selected: Option<NaiveDate>,
    today: NaiveDate,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let mut month = use_signal(|| CalendarMonth::containing(today));
    let shown = month();
    let days: Vec<(NaiveDate, &'static str, bool)> = shown
        .days()
        .map(|date| (date, day_class(date, today, selected), is_bookable(date, today)))
        .collect();

    rsx! {
        article { class: "calendar",
            header { class: "calendar-header",
                button {
                    class: "outline secondary",
                    aria_label: "Previous month",
                    onclick: move |_| month.set(shown.previous()),
                    "‹"
                }
                strong { "{shown.title()}" }
                button {
                    class: "outline secondary",
                    aria_label: "Next month",
                    onclick: move |_| month.set(shown.next()),
                    "›"
                }
            }
            div { class: "calendar-grid",
                for name in WEEKDAYS {
                    div { class: "calendar-weekday", "{name}" }
                }
                for blank in 0..shown.leading_blanks() {
                    div { key: "blank-{blank}" }
                }
                for (date, class, bookable) in days {
                    button {
                        key: "{date}",
                        class,
                        disabled: !bookable,
                        onclick: move |_| on_select.call(date),
                        "{date.day()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_day_is_filled() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let tomorrow = today.succ_opt().unwrap();
        assert_eq!(day_class(tomorrow, today, Some(tomorrow)), "calendar-day");
        assert!(day_class(today, today, Some(tomorrow)).contains("today"));
        assert!(day_class(tomorrow, today, None).contains("secondary"));
    }
}
