//! Quiz endpoints.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{Empty, Quiz, QuizDraft, QuizResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitQuizRequest<'a> {
    quiz_id: i64,
    answers: &'a [i64],
}

impl ApiClient {
    /// List all quizzes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.execute(Method::GET, "/quizzes").await
    }

    /// Get one quiz with its questions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the quiz does not exist.
    #[instrument(skip(self))]
    pub async fn get_quiz(&self, id: i64) -> Result<Quiz, ApiError> {
        self.execute(Method::GET, &format!("/quizzes/{id}")).await
    }

    /// Create a quiz.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_quiz(&self, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        self.execute_with_body(Method::POST, "/quizzes", draft).await
    }

    /// Update a quiz.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_quiz(&self, id: i64, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        self.execute_with_body(Method::PUT, &format!("/quizzes/{id}"), draft)
            .await
    }

    /// Delete a quiz.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_quiz(&self, id: i64) -> Result<Empty, ApiError> {
        self.execute(Method::DELETE, &format!("/quizzes/{id}"))
            .await
    }

    /// Submit answers for a quiz; `answers[i]` is the chosen option index
    /// for question `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, answers))]
    pub async fn submit_quiz(&self, quiz_id: i64, answers: &[i64]) -> Result<QuizResult, ApiError> {
        self.execute_with_body(
            Method::POST,
            "/quizzes/submit",
            &SubmitQuizRequest { quiz_id, answers },
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_wire_format() {
        let request = SubmitQuizRequest {
            quiz_id: 7,
            answers: &[0, 2, 1],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["quizId"], 7);
        assert_eq!(value["answers"], serde_json::json!([0, 2, 1]));
    }
}
