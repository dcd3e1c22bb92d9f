use shared::Appointment;
use yew::prelude::*;

use crate::components::appointment_item::AppointmentItem;

#[derive(Properties, PartialEq)]
pub struct ScheduleSectionProps {
    pub title: AttrValue,
    pub appointments: Vec<Appointment>,
}

/// One period of the day (morning or afternoon)
#[function_component(ScheduleSection)]
pub fn schedule_section(props: &ScheduleSectionProps) -> Html {
    html! {
        <section class="schedule-section">
            <strong>{ &props.title }</strong>
            if props.appointments.is_empty() {
                <p class="empty-state">{ "No appointments in this period" }</p>
            } else {
                { for props.appointments.iter().map(|appointment| html! {
                    <AppointmentItem key={appointment.id.to_string()} appointment={appointment.clone()} />
                })}
            }
        </section>
    }
}
