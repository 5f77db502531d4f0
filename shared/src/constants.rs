pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

pub const AUTH_STATUS_ENDPOINT: &str = "/auth/status";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const GAMES_AVAILABLE_ENDPOINT: &str = "/games/available";
pub const GAMES_HISTORY_ENDPOINT: &str = "/games/history";
pub const ADMIN_STATS_ENDPOINT: &str = "/admin/dashboard/stats";
pub const ADMIN_USERS_ENDPOINT: &str = "/admin/users";
pub const ADMIN_REPORT_EXPORT_ENDPOINT: &str = "/admin/reports/export";
pub const SUPPORT_TICKETS_ENDPOINT: &str = "/api/support/tickets";

pub const DEFAULT_REDIRECT: &str = "/dashboard";
pub const GAME_PLACEHOLDER_IMAGE: &str = "/static/images/game-placeholder.jpg";
pub const DEFAULT_GAME_DESCRIPTION: &str = "Exciting casino game";

pub const CSRF_META_NAME: &str = "csrf-token";
pub const CSRF_FIELD_NAME: &str = "csrf_token";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const NETWORK_ERROR: &str = "Network error occurred";
pub const SERVER_ERROR: &str = "Server error";
pub const DECODE_ERROR: &str = "Unexpected server response";
pub const CSRF_MISSING_ERROR: &str = "CSRF token not found!";
pub const PASSWORD_MISMATCH_ERROR: &str = "Passwords do not match!";
pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub const REGISTER_SUCCESS: &str = "Registration successful! Redirecting...";
pub const LOGOUT_FAILED: &str = "Logout failed";
pub const TICKET_CREATED: &str = "Ticket created!";
pub const TICKET_FIELDS_REQUIRED: &str = "Subject and message are required";
pub const NO_GAMES_PLAYED: &str = "No games played yet";
pub const NO_WINNING_LINES: &str = "No winning lines";

pub const ALERT_DISMISS_MS: u32 = 5000;
pub const AUTH_REDIRECT_DELAY_MS: u32 = 1000;
pub const STATS_POLL_INTERVAL_MS: u32 = 30_000;
pub const WIN_POPUP_MS: u32 = 3000;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Window event carrying the new balance after a game round.
pub const BALANCE_UPDATE_EVENT: &str = "balanceUpdate";
