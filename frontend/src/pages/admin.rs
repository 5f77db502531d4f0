use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use shared::api::{AdminUser, DashboardStats, UsersPage};
use shared::bet::format_money;
use shared::constants::{ADMIN_STATS_ENDPOINT, STATS_POLL_INTERVAL_MS};
use shared::dashboard::{
    report_export_url, status_badge, user_edit_url, user_view_url, users_page_url,
    users_search_url, ReportKind,
};

use crate::api::{get_json, navigate_to, open_in_new_tab};
use crate::base::Base;
use crate::components::Pagination;
use crate::hooks::{use_alerts, use_polling};
use crate::styles;

fn stat_card(label: &str, value: String) -> Html {
    html! {
        <div class={styles::CARD}>
            <p class={styles::TEXT_SMALL}>{label}</p>
            <p class="mt-1 text-2xl font-bold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}

fn stats_cards(stats: &DashboardStats) -> Html {
    let mut cards = Vec::new();
    if let Some(users) = &stats.users {
        cards.push(stat_card("Total Users", users.total.to_string()));
        cards.push(stat_card("New Users", users.new.to_string()));
        cards.push(stat_card("Active Users", users.active.to_string()));
        cards.push(stat_card("Pending KYC", users.pending_kyc.to_string()));
    }
    if let Some(financial) = &stats.financial {
        cards.push(stat_card("Deposits", format_money(financial.deposits)));
        cards.push(stat_card("Withdrawals", format_money(financial.withdrawals)));
        cards.push(stat_card("Bets", format_money(financial.bets)));
        cards.push(stat_card("Wins", format_money(financial.wins)));
        cards.push(stat_card("Gross Revenue", format_money(financial.gross_revenue)));
        cards.push(stat_card("Net Profit", format_money(financial.net_profit)));
    }
    if let Some(support) = &stats.support {
        cards.push(stat_card("Open Tickets", support.open_tickets.to_string()));
        cards.push(stat_card("Pending Payouts", support.pending_payouts.to_string()));
    }
    html! { <div class={styles::SECTION_GRID}>{ for cards }</div> }
}

fn user_row(user: &AdminUser) -> Html {
    let badge = match status_badge(&user.status) {
        "success" => styles::BADGE_SUCCESS,
        _ => styles::BADGE_WARNING,
    };
    let edit = user_edit_url(user.id);
    let view = user_view_url(user.id);

    html! {
        <tr key={user.id}>
            <td class={styles::TABLE_CELL}>{user.id}</td>
            <td class={styles::TABLE_CELL}>{&user.username}</td>
            <td class={styles::TABLE_CELL}>{&user.email}</td>
            <td class={styles::TABLE_CELL}><span class={badge}>{&user.status}</span></td>
            <td class={styles::TABLE_CELL}>{format_money(user.balance)}</td>
            <td class={classes!(styles::TABLE_CELL, "space-x-2")}>
                <button class={classes!(styles::BUTTON_SMALL, "bg-blue-600", "text-white")} onclick={move |_| navigate_to(&edit)}>
                    {"Edit"}
                </button>
                <button class={classes!(styles::BUTTON_SMALL, "bg-gray-600", "text-white")} onclick={move |_| navigate_to(&view)}>
                    {"View"}
                </button>
            </td>
        </tr>
    }
}

#[function_component(Admin)]
pub fn admin() -> Html {
    let alerts = use_alerts();
    let stats = use_state(|| None::<DashboardStats>);
    let users = use_state(|| None::<UsersPage>);
    let report = use_state(|| ReportKind::Users);
    let format = use_state(|| "csv".to_string());

    let refresh_stats = {
        let stats = stats.clone();
        let alerts = alerts.clone();
        Callback::from(move |_: ()| {
            let stats = stats.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                match get_json::<DashboardStats>(ADMIN_STATS_ENDPOINT).await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(err) => {
                        alerts.error(err.user_message());
                    }
                }
            });
        })
    };
    use_polling(STATS_POLL_INTERVAL_MS, refresh_stats);

    let fetch_users = {
        let users = users.clone();
        let alerts = alerts.clone();
        Callback::from(move |url: String| {
            let users = users.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                match get_json::<UsersPage>(&url).await {
                    Ok(page) => users.set(Some(page)),
                    Err(err) => {
                        alerts.error(err.user_message());
                    }
                }
            });
        })
    };

    let load_page = {
        let fetch_users = fetch_users.clone();
        Callback::from(move |page: u32| fetch_users.emit(users_page_url(page)))
    };

    let on_search = {
        let fetch_users = fetch_users.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(url) = users_search_url(&input.value()) {
                fetch_users.emit(url);
            }
        })
    };

    let on_report = {
        let report = report.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            report.set(ReportKind::parse(&select.value()));
        })
    };
    let on_format = {
        let format = format.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            format.set(select.value());
        })
    };
    let on_export = {
        let report = report.clone();
        let format = format.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&report_export_url(*report, &format)))
    };

    let (pages, current) = (*users)
        .as_ref()
        .map(|u| (u.pages, u.page))
        .unwrap_or((0, 1));

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <h1 class={styles::TEXT_H2}>{"Admin Dashboard"}</h1>
                {
                    match &*stats {
                        Some(stats) => stats_cards(stats),
                        None => html! { <p class={classes!(styles::TEXT_SECONDARY, "py-8")}>{"Loading stats..."}</p> },
                    }
                }

                <div class={styles::CARD}>
                    <div class="flex flex-wrap items-center justify-between gap-4 mb-4">
                        <h2 class={styles::TEXT_H3}>{"Users"}</h2>
                        <div class="flex items-center gap-2">
                            <input
                                type="search"
                                placeholder="Search users"
                                class={classes!(styles::INPUT, "mt-0", "w-64")}
                                oninput={on_search}
                            />
                            <button class={styles::BUTTON_PRIMARY} onclick={let load_page = load_page.clone(); move |_| load_page.emit(1)}>
                                {"Load users"}
                            </button>
                        </div>
                    </div>
                    if let Some(page) = &*users {
                        <table class={styles::TABLE}>
                            <thead>
                                <tr>
                                    <th class={styles::TABLE_HEAD}>{"ID"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Username"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Email"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Status"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Balance"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>{ for page.users.iter().map(user_row) }</tbody>
                        </table>
                        <Pagination {pages} {current} on_select={load_page.clone()} />
                    }
                </div>

                <div class={classes!(styles::CARD, "mt-8")}>
                    <h2 class={classes!(styles::TEXT_H3, "mb-4")}>{"Reports"}</h2>
                    <div class="flex flex-wrap items-center gap-2">
                        <select class={classes!(styles::INPUT, "mt-0", "w-48")} onchange={on_report}>
                            { for ReportKind::ALL.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={*kind == *report}>{kind.as_str()}</option>
                            }) }
                        </select>
                        <select class={classes!(styles::INPUT, "mt-0", "w-32")} onchange={on_format}>
                            { for ["csv", "xlsx", "pdf"].iter().map(|f| html! {
                                <option value={*f} selected={*f == format.as_str()}>{f.to_uppercase()}</option>
                            }) }
                        </select>
                        <button class={styles::BUTTON_SECONDARY} onclick={on_export}>{"Export"}</button>
                    </div>
                </div>
            </div>
        </Base>
    }
}
