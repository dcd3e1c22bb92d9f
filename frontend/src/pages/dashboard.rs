use chrono::{Local, NaiveDate};
use shared::calendar::is_selectable;
use shared::{
    format_selected_date_label, next_appointment, partition, Appointment, DayAvailability,
    YearMonth,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::appointment_item::NextAppointment;
use crate::components::calendar::Calendar;
use crate::components::header::Header;
use crate::components::schedule_section::ScheduleSection;
use crate::config::config;
use crate::error::ApiError;
use crate::hooks::auth::AuthContext;
use crate::hooks::toast::ToastContext;
use crate::hooks::{use_auth, use_toast, EffectGuard, Toast};
use crate::router::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let locale = config().locale;

    let today = Local::now().date_naive();
    let selected_date = use_state(|| today);
    let current_month = use_state(|| YearMonth::of(today));
    let appointments = use_state(Vec::<Appointment>::new);
    let availability = use_state(Vec::<DayAvailability>::new);
    let loading = use_state(|| true);

    let provider_id = auth.user().map(|user| user.id);

    // Availability of the displayed month
    {
        let auth = auth.clone();
        let toast = toast.clone();
        let availability = availability.clone();

        use_effect_with((*current_month, provider_id), move |(month, provider_id)| {
            let guard = EffectGuard::new();
            if let Some(provider_id) = *provider_id {
                let month = *month;
                let task = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = auth.api().month_availability(provider_id, month).await;
                    if task.is_cancelled() {
                        tracing::debug!("Dropping availability for {}/{}", month.month, month.year);
                        return;
                    }
                    match result {
                        Ok(days) => availability.set(days),
                        Err(e) => report_failure(&auth, &toast, "Could not load availability", e),
                    }
                });
            }
            guard.canceller()
        });
    }

    // Appointments of the selected day
    {
        let auth = auth.clone();
        let toast = toast.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();

        use_effect_with(*selected_date, move |date| {
            let date = *date;
            let guard = EffectGuard::new();
            let task = guard.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = auth.api().appointments_for_date(date).await;
                if task.is_cancelled() {
                    tracing::debug!("Dropping appointments for {}", date);
                    return;
                }
                match result {
                    Ok(data) => appointments.set(data),
                    Err(e) => {
                        appointments.set(Vec::new());
                        report_failure(&auth, &toast, "Could not load appointments", e);
                    }
                }
                loading.set(false);
            });
            guard.canceller()
        });
    }

    let on_select = {
        let selected_date = selected_date.clone();
        let availability = availability.clone();
        Callback::from(move |date: NaiveDate| {
            if is_selectable(date, &availability) {
                selected_date.set(date);
            }
        })
    };

    let on_month_change = {
        let current_month = current_month.clone();
        Callback::from(move |month: YearMonth| current_month.set(month))
    };

    let on_sign_out = {
        let auth = auth.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            auth.sign_out();
            toast.add(Toast::info("Signed out", "See you next time"));
        })
    };

    let Some(user) = auth.user() else {
        return html! { <Redirect<Route> to={Route::SignIn} /> };
    };

    let schedule = partition(&appointments, &Local);
    let morning: Vec<Appointment> = schedule.morning.into_iter().cloned().collect();
    let afternoon: Vec<Appointment> = schedule.afternoon.into_iter().cloned().collect();
    let next = next_appointment(&appointments, *selected_date, &Local::now()).cloned();
    let label = format_selected_date_label(*selected_date, today, locale);

    html! {
        <div class="dashboard">
            <Header user={user} on_sign_out={on_sign_out} />
            <main class="dashboard-content">
                <div class="schedule">
                    <h1>{ "Scheduled appointments" }</h1>
                    <p class="schedule-date">
                        if label.is_today {
                            <span class="today">{ locale.today_word() }</span>
                        }
                        <span>{ &label.day_and_month }</span>
                        <span>{ &label.weekday }</span>
                    </p>

                    if let Some(appointment) = next {
                        <NextAppointment appointment={appointment} />
                    }

                    if *loading {
                        <p class="loading">{ "Loading appointments..." }</p>
                    } else {
                        <ScheduleSection title="Morning" appointments={morning} />
                        <ScheduleSection title="Afternoon" appointments={afternoon} />
                    }
                </div>
                <aside>
                    <Calendar
                        month={*current_month}
                        from={YearMonth::of(today)}
                        selected={*selected_date}
                        today={today}
                        availability={(*availability).clone()}
                        locale={locale}
                        on_select={on_select}
                        on_month_change={on_month_change}
                    />
                </aside>
            </main>
        </div>
    }
}

fn report_failure(auth: &AuthContext, toast: &ToastContext, title: &str, err: ApiError) {
    tracing::error!("{}: {}", title, err);
    if err.is_unauthorized() {
        auth.sign_out();
        toast.add(Toast::error(
            "Session expired",
            "Sign in again to see your schedule",
        ));
    } else {
        toast.add(Toast::error(title, err.to_string()));
    }
}
