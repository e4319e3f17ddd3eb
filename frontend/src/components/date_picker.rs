use shared::{dates, CalendarDayType, CalendarFocusDate, CalendarService};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Selected date in YYYY-MM-DD format, or None for "today".
    pub selected_date: Option<String>,
    /// Callback when a date is confirmed.
    pub on_date_change: Callback<Option<String>>,
    /// Whether the date picker is disabled.
    pub disabled: bool,
}

/// Dropdown calendar date picker.
///
/// The displayed month/year and the in-dialog selection are independent of
/// the form's date until confirmed: Confirm applies the selection, Cancel
/// discards it. The day grid is regenerated from scratch on every navigation.
#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let calendar = CalendarService::new();
    let show_calendar = use_state(|| false);

    let actual_date = props
        .selected_date
        .clone()
        .unwrap_or_else(dates::current_date_string);
    let display_text = if dates::is_today(&actual_date) {
        "Today".to_string()
    } else {
        dates::format_date_for_display(&actual_date)
    };

    // In-dialog selection, applied to the form only on confirm.
    let pending_date = use_state(|| actual_date.clone());
    let focus = use_state(CalendarFocusDate::default);

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        let pending_date = pending_date.clone();
        let focus = focus.clone();
        let actual_date = actual_date.clone();
        Callback::from(move |_: MouseEvent| {
            if !*show_calendar {
                // Opening: seed the dialog from the form's current selection.
                pending_date.set(actual_date.clone());
                if let Some((year, month, _)) = dates::parse_date_string(&actual_date) {
                    focus.set(CalendarFocusDate { month, year });
                }
            }
            show_calendar.set(!*show_calendar);
        })
    };

    let prev_month = {
        let calendar = calendar.clone();
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            let (month, year) = calendar.previous_month(focus.month, focus.year);
            focus.set(CalendarFocusDate { month, year });
        })
    };

    let next_month = {
        let calendar = calendar.clone();
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            let (month, year) = calendar.next_month(focus.month, focus.year);
            focus.set(CalendarFocusDate { month, year });
        })
    };

    let on_day_select = {
        let pending_date = pending_date.clone();
        Callback::from(move |date: String| {
            pending_date.set(date);
        })
    };

    let on_today = {
        let pending_date = pending_date.clone();
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            pending_date.set(dates::current_date_string());
            focus.set(CalendarFocusDate::default());
        })
    };

    let on_cancel = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(false);
        })
    };

    let on_confirm = {
        let on_date_change = props.on_date_change.clone();
        let pending_date = pending_date.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            let date = (*pending_date).clone();
            // "Today" stays dynamic on the form side.
            let selection = if dates::is_today(&date) { None } else { Some(date) };
            on_date_change.emit(selection);
            show_calendar.set(false);
        })
    };

    let month_grid = calendar.generate_calendar_month(focus.month, focus.year);

    html! {
        <div class="date-picker">
            <div class="date-picker-input">
                <button
                    type="button"
                    class="date-display-button"
                    onclick={toggle_calendar}
                    disabled={props.disabled}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if *show_calendar && !props.disabled {
                    html! {
                        <div class="calendar-dropdown">
                            <div class="calendar-header">
                                <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                                <span class="month-year">
                                    {format!("{} {}", calendar.month_name(focus.month), focus.year)}
                                </span>
                                <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                            </div>

                            <div class="calendar-grid">
                                <div class="weekday-header">
                                    <span>{"Sun"}</span>
                                    <span>{"Mon"}</span>
                                    <span>{"Tue"}</span>
                                    <span>{"Wed"}</span>
                                    <span>{"Thu"}</span>
                                    <span>{"Fri"}</span>
                                    <span>{"Sat"}</span>
                                </div>

                                <div class="calendar-days">
                                    {for month_grid.days.iter().map(|day| {
                                        match day.day_type {
                                            CalendarDayType::PaddingBefore => html! {
                                                <span class="calendar-day padding"></span>
                                            },
                                            CalendarDayType::MonthDay => {
                                                let is_selected = day.date == *pending_date;
                                                let is_today_day = dates::is_today(&day.date);
                                                let on_day_select = on_day_select.clone();
                                                let date = day.date.clone();
                                                html! {
                                                    <button
                                                        type="button"
                                                        class={classes!(
                                                            "calendar-day",
                                                            is_selected.then_some("selected"),
                                                            is_today_day.then_some("today")
                                                        )}
                                                        onclick={Callback::from(move |_: MouseEvent| {
                                                            on_day_select.emit(date.clone());
                                                        })}
                                                    >
                                                        {day.day}
                                                    </button>
                                                }
                                            }
                                        }
                                    })}
                                </div>
                            </div>

                            <div class="calendar-footer">
                                <button type="button" class="cancel-button" onclick={on_cancel}>
                                    {"Cancel"}
                                </button>
                                <button type="button" class="today-button" onclick={on_today}>
                                    {"Today"}
                                </button>
                                <button type="button" class="confirm-button" onclick={on_confirm}>
                                    {"Confirm"}
                                </button>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
