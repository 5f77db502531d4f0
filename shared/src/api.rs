use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::constants::{
    CSRF_MISSING_ERROR, DECODE_ERROR, DEFAULT_GAME_DESCRIPTION, DEFAULT_REDIRECT,
    GAME_PLACEHOLDER_IMAGE, NETWORK_ERROR, SERVER_ERROR,
};
use crate::symbols::Symbol;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("csrf token not found")]
    MissingCsrf,
}

impl ApiError {
    /// Text for the alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR.to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Decode(_) => DECODE_ERROR.to_string(),
            ApiError::MissingCsrf => CSRF_MISSING_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Classifies a raw response: 2xx bodies decode into `T`, anything else
/// becomes `ApiError::Server` carrying the server's `error` field.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| SERVER_ERROR.to_string());
    Err(ApiError::Server { status, message })
}

// === Auth ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.trim().to_string(), password: password.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub kyc_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl AuthResponse {
    pub fn redirect_target(&self) -> &str {
        self.redirect
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REDIRECT)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// === Games ===

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub min_bet: f64,
    pub max_bet: f64,
    #[serde(default)]
    pub rtp: f64,
    #[serde(default)]
    pub volatility: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl GameInfo {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_GAME_DESCRIPTION)
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(GAME_PLACEHOLDER_IMAGE)
    }

    pub fn bet_limits(&self) -> crate::bet::BetLimits {
        crate::bet::BetLimits::new(self.min_bet, self.max_bet)
    }

    pub fn is_slot(&self) -> bool {
        self.category == "slots"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub games: Vec<GameInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Loss,
    #[serde(other)]
    Other,
}

impl RoundResult {
    pub fn label(self) -> &'static str {
        match self {
            RoundResult::Win => "win",
            RoundResult::Loss => "loss",
            RoundResult::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayResponse {
    #[serde(default)]
    pub success: bool,
    pub result: RoundResult,
    #[serde(default)]
    pub bet_amount: f64,
    #[serde(default)]
    pub win_amount: f64,
    #[serde(default)]
    pub multiplier: f64,
    #[serde(default)]
    pub new_balance: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Slot outcome, one symbol per reel, when the server supplies one.
    #[serde(default)]
    pub reels: Option<Vec<Symbol>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BetRecord {
    pub id: i64,
    #[serde(default)]
    pub game_title: String,
    pub amount: f64,
    #[serde(default)]
    pub multiplier: f64,
    pub result: RoundResult,
    #[serde(default)]
    pub win_amount: f64,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GameHistory {
    #[serde(default)]
    pub bets: Vec<BetRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub page: u32,
}

// === Admin ===

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub new: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub pending_kyc: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FinancialTotals {
    #[serde(default)]
    pub deposits: f64,
    #[serde(default)]
    pub withdrawals: f64,
    #[serde(default)]
    pub bets: f64,
    #[serde(default)]
    pub wins: f64,
    #[serde(default)]
    pub gross_revenue: f64,
    #[serde(default)]
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SupportCounts {
    #[serde(default)]
    pub open_tickets: u64,
    #[serde(default)]
    pub pending_payouts: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub users: Option<UserCounts>,
    #[serde(default)]
    pub financial: Option<FinancialTotals>,
    #[serde(default)]
    pub support: Option<SupportCounts>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub registered_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub page: u32,
}

// === Support ===

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub unread_messages: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TicketsResponse {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicketRequest {
    pub subject: String,
    pub message: String,
}

/// Formats a server ISO timestamp for display; unparseable input is returned as is.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_responses() {
        let ok: Result<MessageResponse, _> = decode_response(200, r#"{"message":"Logged out"}"#);
        assert_eq!(ok.unwrap().message.as_deref(), Some("Logged out"));

        let err = decode_response::<MessageResponse>(400, r#"{"error":"Insufficient balance"}"#).unwrap_err();
        assert_eq!(err, ApiError::Server { status: 400, message: "Insufficient balance".into() });
        assert_eq!(err.user_message(), "Insufficient balance");

        let html = decode_response::<MessageResponse>(500, "<html>oops</html>").unwrap_err();
        assert_eq!(html.user_message(), "Server error");

        let garbage = decode_response::<GamesResponse>(200, "not json").unwrap_err();
        assert!(matches!(garbage, ApiError::Decode(_)));
        assert_eq!(garbage.user_message(), "Unexpected server response");

        assert_eq!(ApiError::Network("timeout".into()).user_message(), "Network error occurred");
        assert_eq!(ApiError::MissingCsrf.user_message(), "CSRF token not found!");
    }

    #[test]
    fn play_response_with_and_without_reels() {
        let body = r#"{"success":true,"result":"win","bet_amount":10,"win_amount":25.5,
            "multiplier":2.55,"new_balance":115.5,"timestamp":"2024-05-01T12:00:00.123456",
            "reels":["cherry","cherry","lemon","lemon","orange"]}"#;
        let play: PlayResponse = decode_response(200, body).unwrap();
        assert_eq!(play.result, RoundResult::Win);
        assert_eq!(play.reels.as_ref().map(|r| r.len()), Some(5));

        let plain: PlayResponse =
            decode_response(200, r#"{"success":true,"result":"loss","win_amount":0,"extra":1}"#).unwrap();
        assert_eq!(plain.result, RoundResult::Loss);
        assert!(plain.reels.is_none());
        assert!(plain.new_balance.is_none());
    }

    #[test]
    fn request_fields_are_trimmed() {
        let req = RegisterRequest::new("  player ", " p@x.io ", " pass ");
        assert_eq!(req.username, "player");
        assert_eq!(req.email, "p@x.io");
        assert_eq!(req.password, " pass ");
        assert_eq!(
            serde_json::to_string(&LoginRequest::new(" a ", "b")).unwrap(),
            r#"{"username":"a","password":"b"}"#
        );
    }

    #[test]
    fn game_defaults() {
        let game: GameInfo =
            serde_json::from_str(r#"{"id":1,"title":"Lucky","min_bet":1,"max_bet":50,"description":""}"#).unwrap();
        assert_eq!(game.description_or_default(), "Exciting casino game");
        assert_eq!(game.image_or_placeholder(), "/static/images/game-placeholder.jpg");
        assert_eq!(game.bet_limits().clamp("999"), 50.0);
    }

    #[test]
    fn auth_redirect_defaults_to_dashboard() {
        let resp: AuthResponse = serde_json::from_str(r#"{"message":"Login successful"}"#).unwrap();
        assert_eq!(resp.redirect_target(), "/dashboard");
        let resp: AuthResponse = serde_json::from_str(r#"{"redirect":"/admin"}"#).unwrap();
        assert_eq!(resp.redirect_target(), "/admin");
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp("2024-05-01T12:30:05.123456"), "2024-05-01 12:30:05");
        assert_eq!(format_timestamp("2024-05-01T12:30:05+00:00"), "2024-05-01 12:30:05");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
