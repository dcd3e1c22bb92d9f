use chrono::{Datelike, NaiveDate};
use shared::calendar::{can_show, disabled_days, is_working_day, month_grid};
use shared::{format_month_title, DayAvailability, DisplayLocale, YearMonth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub month: YearMonth,
    /// Earliest month the user can navigate to
    pub from: YearMonth,
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub availability: Vec<DayAvailability>,
    pub locale: DisplayLocale,
    pub on_select: Callback<NaiveDate>,
    pub on_month_change: Callback<YearMonth>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let month = props.month;

    let previous = month.shift(-1).filter(|m| can_show(*m, props.from));
    let next = month.shift(1);
    let unavailable = disabled_days(month, &props.availability);

    let go_to = |target: Option<YearMonth>| {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(target) = target {
                on_month_change.emit(target);
            }
        })
    };

    let day_cell = |day: Option<NaiveDate>| -> Html {
        let Some(day) = day else {
            return html! { <td class="day day-outside"></td> };
        };

        let selectable = is_working_day(day) && !unavailable.contains(&day);
        let mut classes = classes!("day");
        if !selectable {
            classes.push("day-disabled");
        }
        if day == props.selected {
            classes.push("day-selected");
        }
        if day == props.today {
            classes.push("day-today");
        }

        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if selectable {
                on_select.emit(day);
            }
        });

        html! { <td class={classes} onclick={onclick}>{ day.day() }</td> }
    };

    html! {
        <div class="calendar">
            <div class="calendar-nav">
                <button type="button" disabled={previous.is_none()} onclick={go_to(previous)}>{ "‹" }</button>
                <span class="calendar-title">{ format_month_title(month, props.locale) }</span>
                <button type="button" disabled={next.is_none()} onclick={go_to(next)}>{ "›" }</button>
            </div>
            <table>
                <thead>
                    <tr>
                        { for props.locale.weekday_initials().iter().map(|initial| html! { <th>{ *initial }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for month_grid(month).into_iter().map(|week| html! {
                        <tr>{ for week.into_iter().map(&day_cell) }</tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
