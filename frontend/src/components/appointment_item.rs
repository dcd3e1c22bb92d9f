use chrono::Local;
use shared::schedule::format_hour;
use shared::Appointment;
use yew::prelude::*;

use crate::components::header::Avatar;

#[derive(Properties, PartialEq)]
pub struct AppointmentItemProps {
    pub appointment: Appointment,
}

#[function_component(AppointmentItem)]
pub fn appointment_item(props: &AppointmentItemProps) -> Html {
    let appointment = &props.appointment;

    html! {
        <div class="appointment">
            <span class="appointment-hour">{ format_hour(appointment, &Local) }</span>
            <div class="appointment-client">
                <Avatar url={appointment.client.avatar_url.clone()} name={appointment.client.name.clone()} />
                <strong>{ &appointment.client.name }</strong>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NextAppointmentProps {
    pub appointment: Appointment,
}

/// Highlighted card for the appointment coming up today
#[function_component(NextAppointment)]
pub fn next_appointment(props: &NextAppointmentProps) -> Html {
    let appointment = &props.appointment;

    html! {
        <div class="next-appointment">
            <strong>{ "Up next" }</strong>
            <div>
                <Avatar url={appointment.client.avatar_url.clone()} name={appointment.client.name.clone()} />
                <strong>{ &appointment.client.name }</strong>
                <span class="appointment-hour">{ format_hour(appointment, &Local) }</span>
            </div>
        </div>
    }
}
