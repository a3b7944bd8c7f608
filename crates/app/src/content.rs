//! Admin content management: one create/edit/delete cycle shared by
//! missions, quizzes, and tips.
//!
//! The controller never mutates its list locally. Every successful
//! mutation bumps [`ContentAdmin::reload_counter`], and the shell
//! re-fetches with [`ContentAdmin::reload`]; the rendered list is always
//! the last fetch result. Deletion is two-step: a delete request must be
//! confirmed before the gateway is touched.

use tracing::{error, info, instrument};

use greenmind_client::types::{
    Mission, MissionDraft, Quiz, QuizDraft, Tip, TipDraft,
};
use greenmind_core::ContentKind;

use crate::AdminError;
use crate::gateway::ContentGateway;

/// The form being edited, one variant per content kind.
///
/// A tagged union instead of a bag of optional fields: submitting
/// dispatches exhaustively on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentForm {
    Mission(MissionDraft),
    Quiz(QuizDraft),
    Tip(TipDraft),
}

impl ContentForm {
    /// An empty form for the given kind.
    #[must_use]
    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Missions => Self::Mission(MissionDraft::default()),
            ContentKind::Quizzes => Self::Quiz(QuizDraft::default()),
            ContentKind::Tips => Self::Tip(TipDraft::default()),
        }
    }

    /// The kind this form belongs to.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Mission(_) => ContentKind::Missions,
            Self::Quiz(_) => ContentKind::Quizzes,
            Self::Tip(_) => ContentKind::Tips,
        }
    }
}

/// One content item of any kind, as selected for editing.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Mission(Mission),
    Quiz(Quiz),
    Tip(Tip),
}

impl ContentItem {
    /// The item's kind.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Mission(_) => ContentKind::Missions,
            Self::Quiz(_) => ContentKind::Quizzes,
            Self::Tip(_) => ContentKind::Tips,
        }
    }

    /// The server-assigned id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Mission(mission) => mission.id,
            Self::Quiz(quiz) => quiz.id,
            Self::Tip(tip) => tip.id,
        }
    }

    fn to_form(&self) -> ContentForm {
        match self {
            Self::Mission(mission) => ContentForm::Mission(MissionDraft::from(mission)),
            Self::Quiz(quiz) => ContentForm::Quiz(QuizDraft::from(quiz)),
            Self::Tip(tip) => ContentForm::Tip(TipDraft::from(tip)),
        }
    }
}

/// A fetched list for the active kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentList {
    Missions(Vec<Mission>),
    Quizzes(Vec<Quiz>),
    Tips(Vec<Tip>),
}

impl ContentList {
    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Missions(items) => items.len(),
            Self::Quizzes(items) => items.len(),
            Self::Tips(items) => items.len(),
        }
    }

    /// True when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Admin content CRUD controller.
pub struct ContentAdmin<G> {
    gateway: G,
    active_kind: ContentKind,
    editing_id: Option<i64>,
    form: ContentForm,
    reload_counter: u64,
    pending_delete: Option<(ContentKind, i64)>,
}

impl<G: ContentGateway> ContentAdmin<G> {
    /// Create a controller opened on the missions tab with an empty form.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        let active_kind = ContentKind::default();
        Self {
            gateway,
            active_kind,
            editing_id: None,
            form: ContentForm::empty(active_kind),
            reload_counter: 0,
            pending_delete: None,
        }
    }

    /// The currently selected content kind.
    #[must_use]
    pub const fn active_kind(&self) -> ContentKind {
        self.active_kind
    }

    /// Id of the item being edited, or `None` when creating.
    #[must_use]
    pub const fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// The current form values.
    #[must_use]
    pub const fn form(&self) -> &ContentForm {
        &self.form
    }

    /// Mutable access to the form for the shell to fill in.
    pub const fn form_mut(&mut self) -> &mut ContentForm {
        &mut self.form
    }

    /// Monotonic re-fetch signal: bumped after every successful mutation.
    #[must_use]
    pub const fn reload_counter(&self) -> u64 {
        self.reload_counter
    }

    /// The deletion awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<(ContentKind, i64)> {
        self.pending_delete
    }

    /// Switch the active kind, discarding any in-progress edit.
    pub fn select_kind(&mut self, kind: ContentKind) {
        self.active_kind = kind;
        self.reset_form();
        self.pending_delete = None;
    }

    /// Begin editing an existing item; switches to its kind and copies it
    /// into the form.
    pub fn start_edit(&mut self, item: &ContentItem) {
        self.active_kind = item.kind();
        self.editing_id = Some(item.id());
        self.form = item.to_form();
    }

    /// Discard the in-progress edit, returning to an empty create form.
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Submit the form: update when an edit is in progress, create
    /// otherwise.
    ///
    /// On success the form resets and the reload counter is bumped. On
    /// failure the form keeps its values so the operator can retry.
    ///
    /// # Errors
    ///
    /// Returns the gateway error after logging it.
    #[instrument(skip(self), fields(kind = %self.form.kind(), editing = ?self.editing_id))]
    pub async fn submit(&mut self) -> Result<(), AdminError> {
        let result = match (&self.form, self.editing_id) {
            (ContentForm::Mission(draft), Some(id)) => {
                self.gateway.update_mission(id, draft).await.map(|_| ())
            }
            (ContentForm::Mission(draft), None) => {
                self.gateway.create_mission(draft).await.map(|_| ())
            }
            (ContentForm::Quiz(draft), Some(id)) => {
                self.gateway.update_quiz(id, draft).await.map(|_| ())
            }
            (ContentForm::Quiz(draft), None) => self.gateway.create_quiz(draft).await.map(|_| ()),
            (ContentForm::Tip(draft), Some(id)) => {
                self.gateway.update_tip(id, draft).await.map(|_| ())
            }
            (ContentForm::Tip(draft), None) => self.gateway.create_tip(draft).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                info!(kind = %self.active_kind, "Content saved");
                self.reset_form();
                self.reload_counter += 1;
                Ok(())
            }
            Err(e) => {
                error!(kind = %self.active_kind, "Failed to save content: {e}");
                Err(e.into())
            }
        }
    }

    /// Record a deletion for confirmation. No network call happens until
    /// [`Self::confirm_delete`].
    pub fn request_delete(&mut self, kind: ContentKind, id: i64) {
        self.pending_delete = Some((kind, id));
    }

    /// Drop the pending deletion without touching the gateway.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Execute the confirmed deletion and bump the reload counter.
    ///
    /// The pending record is consumed either way; a failed delete must be
    /// re-requested.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoPendingDelete`] when nothing awaits
    /// confirmation, or the gateway error after logging it.
    #[instrument(skip(self), fields(pending = ?self.pending_delete))]
    pub async fn confirm_delete(&mut self) -> Result<(), AdminError> {
        let (kind, id) = self.pending_delete.take().ok_or(AdminError::NoPendingDelete)?;

        let result = match kind {
            ContentKind::Missions => self.gateway.delete_mission(id).await,
            ContentKind::Quizzes => self.gateway.delete_quiz(id).await,
            ContentKind::Tips => self.gateway.delete_tip(id).await,
        };

        match result {
            Ok(()) => {
                info!(%kind, id, "Content deleted");
                self.reload_counter += 1;
                Ok(())
            }
            Err(e) => {
                error!(%kind, id, "Failed to delete content: {e}");
                Err(e.into())
            }
        }
    }

    /// Fetch the current list for the active kind.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; the shell keeps showing the previous
    /// list in that case.
    #[instrument(skip(self), fields(kind = %self.active_kind))]
    pub async fn reload(&self) -> Result<ContentList, AdminError> {
        let list = match self.active_kind {
            ContentKind::Missions => ContentList::Missions(self.gateway.list_missions().await?),
            ContentKind::Quizzes => ContentList::Quizzes(self.gateway.list_quizzes().await?),
            ContentKind::Tips => ContentList::Tips(self.gateway.list_tips().await?),
        };
        Ok(list)
    }

    fn reset_form(&mut self) {
        self.editing_id = None;
        self.form = ContentForm::empty(self.active_kind);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::cell::{Cell, RefCell};

    use greenmind_client::ApiError;

    #[derive(Default)]
    struct Calls {
        create: Cell<u32>,
        update: Cell<u32>,
        delete: Cell<u32>,
        last_update_id: Cell<Option<i64>>,
        last_delete: RefCell<Option<(ContentKind, i64)>>,
    }

    /// Stub gateway recording call counts; fails every mutation when
    /// `fail` is set.
    #[derive(Default)]
    struct StubGateway {
        fail: bool,
        calls: Calls,
        tips: Vec<Tip>,
    }

    impl StubGateway {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            if self.fail {
                Err(ApiError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn sample_mission() -> Mission {
        Mission {
            id: 7,
            title: "Car-free week".to_string(),
            description: "Commute without a car".to_string(),
            category: "transport".to_string(),
            duration: "7 days".to_string(),
            points: 100,
            co2_impact: 12.5,
            difficulty: "Moyen".to_string(),
            progress: 0,
            total: 7,
        }
    }

    fn sample_tip() -> Tip {
        Tip {
            id: 3,
            title: "Shorter showers".to_string(),
            content: "Five minutes saves water".to_string(),
            category: "water".to_string(),
            impact: "high".to_string(),
            likes: 0,
        }
    }

    impl ContentGateway for StubGateway {
        async fn list_missions(&self) -> Result<Vec<Mission>, ApiError> {
            self.check()?;
            Ok(vec![sample_mission()])
        }

        async fn create_mission(&self, _draft: &MissionDraft) -> Result<Mission, ApiError> {
            self.calls.create.set(self.calls.create.get() + 1);
            self.check()?;
            Ok(sample_mission())
        }

        async fn update_mission(&self, id: i64, _draft: &MissionDraft) -> Result<Mission, ApiError> {
            self.calls.update.set(self.calls.update.get() + 1);
            self.calls.last_update_id.set(Some(id));
            self.check()?;
            Ok(sample_mission())
        }

        async fn delete_mission(&self, id: i64) -> Result<(), ApiError> {
            self.calls.delete.set(self.calls.delete.get() + 1);
            *self.calls.last_delete.borrow_mut() = Some((ContentKind::Missions, id));
            self.check()
        }

        async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn create_quiz(&self, _draft: &QuizDraft) -> Result<Quiz, ApiError> {
            self.calls.create.set(self.calls.create.get() + 1);
            self.check()?;
            Ok(Quiz {
                id: 1,
                title: String::new(),
                description: String::new(),
                difficulty: String::new(),
                points: 0,
                co2_impact: 0.0,
                questions: Vec::new(),
            })
        }

        async fn update_quiz(&self, id: i64, _draft: &QuizDraft) -> Result<Quiz, ApiError> {
            self.calls.update.set(self.calls.update.get() + 1);
            self.calls.last_update_id.set(Some(id));
            self.check()?;
            Ok(Quiz {
                id,
                title: String::new(),
                description: String::new(),
                difficulty: String::new(),
                points: 0,
                co2_impact: 0.0,
                questions: Vec::new(),
            })
        }

        async fn delete_quiz(&self, id: i64) -> Result<(), ApiError> {
            self.calls.delete.set(self.calls.delete.get() + 1);
            *self.calls.last_delete.borrow_mut() = Some((ContentKind::Quizzes, id));
            self.check()
        }

        async fn list_tips(&self) -> Result<Vec<Tip>, ApiError> {
            self.check()?;
            Ok(self.tips.clone())
        }

        async fn create_tip(&self, _draft: &TipDraft) -> Result<Tip, ApiError> {
            self.calls.create.set(self.calls.create.get() + 1);
            self.check()?;
            Ok(sample_tip())
        }

        async fn update_tip(&self, id: i64, _draft: &TipDraft) -> Result<Tip, ApiError> {
            self.calls.update.set(self.calls.update.get() + 1);
            self.calls.last_update_id.set(Some(id));
            self.check()?;
            Ok(sample_tip())
        }

        async fn delete_tip(&self, id: i64) -> Result<(), ApiError> {
            self.calls.delete.set(self.calls.delete.get() + 1);
            *self.calls.last_delete.borrow_mut() = Some((ContentKind::Tips, id));
            self.check()
        }
    }

    #[tokio::test]
    async fn test_submit_without_edit_creates_once() {
        let mut admin = ContentAdmin::new(StubGateway::default());

        admin.submit().await.unwrap();

        assert_eq!(admin.gateway.calls.create.get(), 1);
        assert_eq!(admin.gateway.calls.update.get(), 0);
        assert_eq!(admin.reload_counter(), 1);
        assert!(admin.editing_id().is_none());
    }

    #[tokio::test]
    async fn test_submit_with_edit_updates_that_id() {
        let mut admin = ContentAdmin::new(StubGateway::default());
        admin.start_edit(&ContentItem::Mission(sample_mission()));
        assert_eq!(admin.editing_id(), Some(7));

        admin.submit().await.unwrap();

        assert_eq!(admin.gateway.calls.update.get(), 1);
        assert_eq!(admin.gateway.calls.create.get(), 0);
        assert_eq!(admin.gateway.calls.last_update_id.get(), Some(7));
        assert_eq!(admin.reload_counter(), 1);
        // Edit state is cleared for the next entry.
        assert!(admin.editing_id().is_none());
        assert_eq!(admin.form(), &ContentForm::empty(ContentKind::Missions));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form_and_counter() {
        let mut admin = ContentAdmin::new(StubGateway::failing());
        if let ContentForm::Mission(draft) = admin.form_mut() {
            draft.title = "Typed but not saved".to_string();
        }

        let result = admin.submit().await;

        assert!(result.is_err());
        assert_eq!(admin.reload_counter(), 0);
        match admin.form() {
            ContentForm::Mission(draft) => assert_eq!(draft.title, "Typed but not saved"),
            other => panic!("unexpected form variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_select_kind_discards_edit_in_progress() {
        let mut admin = ContentAdmin::new(StubGateway::default());
        admin.start_edit(&ContentItem::Tip(sample_tip()));
        assert_eq!(admin.active_kind(), ContentKind::Tips);

        admin.select_kind(ContentKind::Quizzes);

        assert_eq!(admin.active_kind(), ContentKind::Quizzes);
        assert!(admin.editing_id().is_none());
        assert_eq!(admin.form(), &ContentForm::empty(ContentKind::Quizzes));
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let mut admin = ContentAdmin::new(StubGateway::default());

        // No confirmation yet: the gateway must not have been called.
        admin.request_delete(ContentKind::Tips, 3);
        assert_eq!(admin.gateway.calls.delete.get(), 0);

        admin.confirm_delete().await.unwrap();

        assert_eq!(admin.gateway.calls.delete.get(), 1);
        assert_eq!(
            *admin.gateway.calls.last_delete.borrow(),
            Some((ContentKind::Tips, 3))
        );
        assert_eq!(admin.reload_counter(), 1);
        assert!(admin.pending_delete().is_none());
    }

    #[tokio::test]
    async fn test_confirm_without_request_is_rejected() {
        let mut admin = ContentAdmin::new(StubGateway::default());

        let result = admin.confirm_delete().await;

        assert!(matches!(result, Err(AdminError::NoPendingDelete)));
        assert_eq!(admin.gateway.calls.delete.get(), 0);
        assert_eq!(admin.reload_counter(), 0);
    }

    #[tokio::test]
    async fn test_cancel_delete_blocks_gateway() {
        let mut admin = ContentAdmin::new(StubGateway::default());
        admin.request_delete(ContentKind::Missions, 7);
        admin.cancel_delete();

        let result = admin.confirm_delete().await;

        assert!(matches!(result, Err(AdminError::NoPendingDelete)));
        assert_eq!(admin.gateway.calls.delete.get(), 0);
    }

    #[tokio::test]
    async fn test_failed_delete_does_not_bump_counter() {
        let mut admin = ContentAdmin::new(StubGateway::failing());
        admin.request_delete(ContentKind::Quizzes, 2);

        let result = admin.confirm_delete().await;

        assert!(result.is_err());
        assert_eq!(admin.reload_counter(), 0);
    }

    #[tokio::test]
    async fn test_reload_reflects_server_state() {
        let gateway = StubGateway {
            tips: vec![sample_tip()],
            ..StubGateway::default()
        };
        let mut admin = ContentAdmin::new(gateway);
        admin.select_kind(ContentKind::Tips);

        let list = admin.reload().await.unwrap();

        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        match list {
            ContentList::Tips(tips) => assert_eq!(tips.first().unwrap().id, 3),
            other => panic!("unexpected list variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_start_edit_switches_kind_and_copies_item() {
        let mut admin = ContentAdmin::new(StubGateway::default());
        let tip = sample_tip();

        admin.start_edit(&ContentItem::Tip(tip.clone()));

        assert_eq!(admin.active_kind(), ContentKind::Tips);
        match admin.form() {
            ContentForm::Tip(draft) => {
                assert_eq!(draft.title, tip.title);
                assert_eq!(draft.content, tip.content);
            }
            other => panic!("unexpected form variant: {other:?}"),
        }
    }
}
