use url::form_urlencoded;

use crate::constants::{ADMIN_REPORT_EXPORT_ENDPOINT, ADMIN_USERS_ENDPOINT, MIN_SEARCH_LENGTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub page: u32,
    pub active: bool,
}

/// One link per page, `1..=pages`, with the current one marked.
pub fn page_links(pages: u32, current: u32) -> Vec<PageLink> {
    (1..=pages)
        .map(|page| PageLink { page, active: page == current })
        .collect()
}

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{}?{}", path, query)
}

pub fn users_page_url(page: u32) -> String {
    let page = page.to_string();
    with_query(ADMIN_USERS_ENDPOINT, &[("page", page.as_str())])
}

/// Search-as-you-type; queries too short to be useful produce no request.
pub fn users_search_url(query: &str) -> Option<String> {
    if query.chars().count() < MIN_SEARCH_LENGTH {
        return None;
    }
    Some(with_query(ADMIN_USERS_ENDPOINT, &[("search", query)]))
}

pub fn user_edit_url(id: i64) -> String {
    format!("{}/{}/edit", ADMIN_USERS_ENDPOINT, id)
}

pub fn user_view_url(id: i64) -> String {
    format!("{}/{}", ADMIN_USERS_ENDPOINT, id)
}

pub fn ticket_url(id: i64) -> String {
    format!("/support/ticket/{}", id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Users,
    Transactions,
    Financial,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Users, ReportKind::Transactions, ReportKind::Financial];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Users => "users",
            ReportKind::Transactions => "transactions",
            ReportKind::Financial => "financial",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .unwrap_or(ReportKind::Users)
    }
}

pub fn report_export_url(kind: ReportKind, format: &str) -> String {
    let format = if format.is_empty() { "csv" } else { format };
    with_query(ADMIN_REPORT_EXPORT_ENDPOINT, &[("type", kind.as_str()), ("format", format)])
}

/// Badge colour for a user's account status.
pub fn status_badge(status: &str) -> &'static str {
    if status == "active" {
        "success"
    } else {
        "warning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_marks_current_page() {
        let links = page_links(3, 2);
        assert_eq!(links.len(), 3);
        assert_eq!(links.iter().filter(|l| l.active).count(), 1);
        assert!(links[1].active);
        assert!(page_links(0, 1).is_empty());
    }

    #[test]
    fn search_needs_two_characters() {
        assert_eq!(users_search_url("a"), None);
        assert_eq!(users_search_url(""), None);
        assert_eq!(users_search_url("jo").as_deref(), Some("/admin/users?search=jo"));
        assert_eq!(
            users_search_url("john doe&co").as_deref(),
            Some("/admin/users?search=john+doe%26co")
        );
    }

    #[test]
    fn urls() {
        assert_eq!(users_page_url(4), "/admin/users?page=4");
        assert_eq!(user_edit_url(7), "/admin/users/7/edit");
        assert_eq!(user_view_url(7), "/admin/users/7");
        assert_eq!(ticket_url(12), "/support/ticket/12");
        assert_eq!(
            report_export_url(ReportKind::parse("bogus"), ""),
            "/admin/reports/export?type=users&format=csv"
        );
        assert_eq!(
            report_export_url(ReportKind::Transactions, "csv"),
            "/admin/reports/export?type=transactions&format=csv"
        );
    }

    #[test]
    fn badges() {
        assert_eq!(status_badge("active"), "success");
        assert_eq!(status_badge("suspended"), "warning");
    }
}
