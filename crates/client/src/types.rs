//! Wire types for the GreenMind REST API.
//!
//! Field names follow the backend's camelCase JSON. Entity ids are
//! server-assigned integers; the draft types used for create/update never
//! carry one.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use greenmind_core::Role;
use greenmind_core::validation::form::SignupForm;

// =============================================================================
// Auth
// =============================================================================

/// Login credentials. Transient: consumed by the login request and never
/// persisted.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from raw form input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration payload for `POST /auth/register`.
///
/// Consumed once by registration, then discarded.
#[derive(Clone)]
pub struct SignupData {
    pub name: String,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub email: String,
    pub password: SecretString,
}

impl SignupData {
    /// Build the payload from a validated signup form.
    ///
    /// Blank optional fields are dropped rather than sent as empty
    /// strings.
    #[must_use]
    pub fn from_form(form: &SignupForm) -> Self {
        Self {
            name: form.name.clone(),
            surname: non_blank(&form.surname),
            address: non_blank(&form.address),
            email: form.email.clone(),
            password: SecretString::from(form.password.clone()),
        }
    }
}

impl std::fmt::Debug for SignupData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupData")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("address", &self.address)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Response shape shared by register, login, and verify-email.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token; absent until the email is verified.
    pub token: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub message: Option<String>,
    /// Server-issued role claim; treated as `user` when absent.
    #[serde(default)]
    pub role: Option<Role>,
}

// =============================================================================
// Users
// =============================================================================

/// A user record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub co2_reduced: f64,
    pub created_at: DateTime<Utc>,
}

/// Admin-editable user fields for create/update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Per-user aggregate statistics.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub missions_completed: i64,
    pub quizzes_completed: i64,
    pub current_streak: i64,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

/// An achievement badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Quizzes
// =============================================================================

/// A quiz with its questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub points: i64,
    pub co2_impact: f64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: i64,
}

/// Admin-editable quiz fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub points: i64,
    pub co2_impact: f64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl From<&Quiz> for QuizDraft {
    fn from(quiz: &Quiz) -> Self {
        Self {
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            difficulty: quiz.difficulty.clone(),
            points: quiz.points,
            co2_impact: quiz.co2_impact,
            questions: quiz.questions.clone(),
        }
    }
}

/// Result of submitting quiz answers.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: i64,
    pub passed: bool,
    pub points_earned: i64,
    pub co2_reduced: f64,
}

// =============================================================================
// Missions
// =============================================================================

/// A mission with the caller's progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub points: i64,
    pub co2_impact: f64,
    pub difficulty: String,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub total: i64,
}

/// Admin-editable mission fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub difficulty: String,
    pub points: i64,
    pub co2_impact: f64,
    pub total: i64,
}

impl From<&Mission> for MissionDraft {
    fn from(mission: &Mission) -> Self {
        Self {
            title: mission.title.clone(),
            description: mission.description.clone(),
            category: mission.category.clone(),
            duration: mission.duration.clone(),
            difficulty: mission.difficulty.clone(),
            points: mission.points,
            co2_impact: mission.co2_impact,
            total: mission.total,
        }
    }
}

/// Result of completing a mission.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionResult {
    pub success: bool,
    pub points_earned: i64,
    pub co2_reduced: f64,
}

// =============================================================================
// Tips
// =============================================================================

/// An eco tip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub impact: String,
    #[serde(default)]
    pub likes: i64,
}

/// Admin-editable tip fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TipDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub impact: String,
}

impl From<&Tip> for TipDraft {
    fn from(tip: &Tip) -> Self {
        Self {
            title: tip.title.clone(),
            content: tip.content.clone(),
            category: tip.category.clone(),
            impact: tip.impact.clone(),
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Collective CO2 counter from `GET /stats/global-co2`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct GlobalCo2 {
    #[serde(rename = "totalCO2Reduced")]
    pub total_co2_reduced: f64,
}

/// Aggregated dashboard numbers from `GET /stats/dashboard`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub user_points: i64,
    #[serde(rename = "globalCO2Reduced")]
    pub global_co2_reduced: f64,
    #[serde(default)]
    pub weekly_data: Vec<WeeklyData>,
}

/// One day of dashboard history.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyData {
    pub day: String,
    pub points: i64,
    pub co2: f64,
}

// =============================================================================
// Misc
// =============================================================================

/// Marker for endpoints whose success response carries no body
/// (`204 No Content` or an empty object).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Empty {}

/// Serialize the password for a request body.
pub(crate) fn expose_password<S>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(password.expose_secret())
}
