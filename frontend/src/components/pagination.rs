use shared::dashboard::page_links;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub pages: u32,
    pub current: u32,
    pub on_select: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <ul class="flex gap-2 mt-4">
            { for page_links(props.pages, props.current).into_iter().map(|link| {
                let on_select = props.on_select.clone();
                let page = link.page;
                html! {
                    <li key={page}>
                        <button
                            class={if link.active { styles::PAGE_LINK_ACTIVE } else { styles::PAGE_LINK }}
                            onclick={move |_| on_select.emit(page)}
                        >
                            {page}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}
