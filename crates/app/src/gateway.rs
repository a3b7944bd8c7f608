//! Gateway traits seaming the controllers from the HTTP client.
//!
//! Each trait captures exactly the calls one controller makes, so tests
//! can substitute an in-memory stub for the network. The real
//! implementation delegates to [`ApiClient`].

use greenmind_client::types::{
    AuthResponse, Credentials, Mission, MissionDraft, Quiz, QuizDraft, SignupData, Tip, TipDraft,
    User, UserDraft,
};
use greenmind_client::{ApiClient, ApiError};

/// Network operations of the auth flow.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn register(&self, data: &SignupData) -> Result<AuthResponse, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
    async fn verify_email(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError>;
}

/// Network operations of the content CRUD controller.
#[allow(async_fn_in_trait)]
pub trait ContentGateway {
    async fn list_missions(&self) -> Result<Vec<Mission>, ApiError>;
    async fn create_mission(&self, draft: &MissionDraft) -> Result<Mission, ApiError>;
    async fn update_mission(&self, id: i64, draft: &MissionDraft) -> Result<Mission, ApiError>;
    async fn delete_mission(&self, id: i64) -> Result<(), ApiError>;

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError>;
    async fn create_quiz(&self, draft: &QuizDraft) -> Result<Quiz, ApiError>;
    async fn update_quiz(&self, id: i64, draft: &QuizDraft) -> Result<Quiz, ApiError>;
    async fn delete_quiz(&self, id: i64) -> Result<(), ApiError>;

    async fn list_tips(&self) -> Result<Vec<Tip>, ApiError>;
    async fn create_tip(&self, draft: &TipDraft) -> Result<Tip, ApiError>;
    async fn update_tip(&self, id: i64, draft: &TipDraft) -> Result<Tip, ApiError>;
    async fn delete_tip(&self, id: i64) -> Result<(), ApiError>;
}

/// Network operations of the user CRUD controller.
#[allow(async_fn_in_trait)]
pub trait UserGateway {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError>;
    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError>;
    async fn delete_user(&self, id: i64) -> Result<(), ApiError>;
}

impl AuthGateway for ApiClient {
    async fn register(&self, data: &SignupData) -> Result<AuthResponse, ApiError> {
        Self::register(self, data).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        Self::login(self, credentials).await
    }

    async fn verify_email(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError> {
        Self::verify_email(self, email, code).await
    }
}

impl ContentGateway for ApiClient {
    async fn list_missions(&self) -> Result<Vec<Mission>, ApiError> {
        Self::list_missions(self).await
    }

    async fn create_mission(&self, draft: &MissionDraft) -> Result<Mission, ApiError> {
        Self::create_mission(self, draft).await
    }

    async fn update_mission(&self, id: i64, draft: &MissionDraft) -> Result<Mission, ApiError> {
        Self::update_mission(self, id, draft).await
    }

    async fn delete_mission(&self, id: i64) -> Result<(), ApiError> {
        Self::delete_mission(self, id).await.map(|_| ())
    }

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        Self::list_quizzes(self).await
    }

    async fn create_quiz(&self, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        Self::create_quiz(self, draft).await
    }

    async fn update_quiz(&self, id: i64, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        Self::update_quiz(self, id, draft).await
    }

    async fn delete_quiz(&self, id: i64) -> Result<(), ApiError> {
        Self::delete_quiz(self, id).await.map(|_| ())
    }

    async fn list_tips(&self) -> Result<Vec<Tip>, ApiError> {
        Self::list_tips(self).await
    }

    async fn create_tip(&self, draft: &TipDraft) -> Result<Tip, ApiError> {
        Self::create_tip(self, draft).await
    }

    async fn update_tip(&self, id: i64, draft: &TipDraft) -> Result<Tip, ApiError> {
        Self::update_tip(self, id, draft).await
    }

    async fn delete_tip(&self, id: i64) -> Result<(), ApiError> {
        Self::delete_tip(self, id).await.map(|_| ())
    }
}

impl UserGateway for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Self::list_users(self).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        Self::create_user(self, draft).await
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError> {
        Self::update_user(self, id, draft).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        Self::delete_user(self, id).await.map(|_| ())
    }
}
