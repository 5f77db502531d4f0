use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use shared::api::{format_timestamp, MessageResponse, NewTicketRequest, Ticket, TicketsResponse};
use shared::constants::{SUPPORT_TICKETS_ENDPOINT, TICKET_CREATED, TICKET_FIELDS_REQUIRED};
use shared::dashboard::ticket_url;

use crate::api::{get_json, post_json};
use crate::base::Base;
use crate::hooks::use_alerts;
use crate::styles;

fn ticket_card(ticket: &Ticket) -> Html {
    let badge = match ticket.status.as_str() {
        "open" => styles::BADGE_SUCCESS,
        "closed" => styles::BADGE_DANGER,
        _ => styles::BADGE_WARNING,
    };

    html! {
        <a key={ticket.id} href={ticket_url(ticket.id)} class={classes!(styles::CARD_HOVER, "block")}>
            <div class="flex items-center justify-between">
                <h3 class={styles::TEXT_H3}>{format!("#{} {}", ticket.id, ticket.subject)}</h3>
                <span class={badge}>{&ticket.status}</span>
            </div>
            <div class={classes!(styles::TEXT_SMALL, "mt-2", "flex", "justify-between")}>
                <span>{format_timestamp(&ticket.created_at)}</span>
                if ticket.unread_messages > 0 {
                    <span>{format!("{} unread", ticket.unread_messages)}</span>
                }
            </div>
        </a>
    }
}

#[function_component(Support)]
pub fn support() -> Html {
    let alerts = use_alerts();
    let tickets = use_state(Vec::<Ticket>::new);
    let sending = use_state(|| false);
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();

    let load_tickets = {
        let tickets = tickets.clone();
        let alerts = alerts.clone();
        Callback::from(move |_: ()| {
            let tickets = tickets.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                match get_json::<TicketsResponse>(SUPPORT_TICKETS_ENDPOINT).await {
                    Ok(response) => tickets.set(response.tickets),
                    Err(err) => {
                        alerts.error(err.user_message());
                    }
                }
            });
        })
    };

    {
        let load_tickets = load_tickets.clone();
        use_effect_with((), move |_| {
            load_tickets.emit(());
            || ()
        });
    }

    let onsubmit = {
        let alerts = alerts.clone();
        let sending = sending.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let subject_input = subject_ref.cast::<HtmlInputElement>();
            let message_input = message_ref.cast::<HtmlTextAreaElement>();
            let subject = subject_input.as_ref().map(|i| i.value()).unwrap_or_default();
            let message = message_input.as_ref().map(|i| i.value()).unwrap_or_default();
            if subject.trim().is_empty() || message.trim().is_empty() {
                alerts.error(TICKET_FIELDS_REQUIRED);
                return;
            }
            sending.set(true);

            let request = NewTicketRequest { subject, message };
            let alerts = alerts.clone();
            let sending = sending.clone();
            let load_tickets = load_tickets.clone();
            spawn_local(async move {
                match post_json::<_, MessageResponse>(SUPPORT_TICKETS_ENDPOINT, &request, false).await {
                    Ok(_) => {
                        alerts.success(TICKET_CREATED);
                        if let Some(input) = subject_input {
                            input.set_value("");
                        }
                        if let Some(input) = message_input {
                            input.set_value("");
                        }
                        load_tickets.emit(());
                    }
                    Err(err) => {
                        alerts.error(err.user_message());
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <h1 class={classes!(styles::TEXT_H2, "mb-6")}>{"Support"}</h1>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 space-y-4">
                        if tickets.is_empty() {
                            <p class={styles::TEXT_SECONDARY}>{"No tickets yet"}</p>
                        } else {
                            { for tickets.iter().map(ticket_card) }
                        }
                    </div>
                    <div class={styles::CARD}>
                        <h2 class={styles::TEXT_H3}>{"New Ticket"}</h2>
                        <form {onsubmit} class={styles::FORM}>
                            <div>
                                <label for="subject" class={styles::TEXT_LABEL}>{"Subject"}</label>
                                <input id="subject" type="text" ref={subject_ref} class={styles::INPUT} disabled={*sending} />
                            </div>
                            <div>
                                <label for="message" class={styles::TEXT_LABEL}>{"Message"}</label>
                                <textarea id="message" rows="5" ref={message_ref} class={styles::INPUT} disabled={*sending} />
                            </div>
                            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={*sending}>
                                { if *sending { "Sending..." } else { "Create Ticket" } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </Base>
    }
}
