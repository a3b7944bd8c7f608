//! Admin content management commands.

use clap::Subcommand;
use tracing::{info, warn};

use greenmind_app::{ContentAdmin, ContentForm, ContentItem, ContentList};
use greenmind_core::ContentKind;

use super::{CliError, context};

/// Field values for one content kind.
///
/// Every field is optional so the same arguments serve `create` (missing
/// fields stay blank) and `update` (missing fields keep the item's
/// current value).
#[derive(Subcommand)]
pub enum ContentFields {
    /// Mission fields
    Mission {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        points: Option<i64>,
        #[arg(long)]
        co2_impact: Option<f64>,
        #[arg(long)]
        total: Option<i64>,
    },
    /// Quiz fields
    Quiz {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        points: Option<i64>,
        #[arg(long)]
        co2_impact: Option<f64>,
    },
    /// Eco-tip fields
    Tip {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        impact: Option<String>,
    },
}

impl ContentFields {
    /// The content kind these fields belong to.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Mission { .. } => ContentKind::Missions,
            Self::Quiz { .. } => ContentKind::Quizzes,
            Self::Tip { .. } => ContentKind::Tips,
        }
    }

    /// Overlay the provided values onto a form of the matching kind.
    fn apply(self, form: &mut ContentForm) -> Result<(), CliError> {
        match (self, form) {
            (
                Self::Mission {
                    title,
                    description,
                    category,
                    duration,
                    difficulty,
                    points,
                    co2_impact,
                    total,
                },
                ContentForm::Mission(draft),
            ) => {
                overlay_string(&mut draft.title, title);
                overlay_string(&mut draft.description, description);
                overlay_string(&mut draft.category, category);
                overlay_string(&mut draft.duration, duration);
                overlay_string(&mut draft.difficulty, difficulty);
                overlay(&mut draft.points, points);
                overlay(&mut draft.co2_impact, co2_impact);
                overlay(&mut draft.total, total);
                Ok(())
            }
            (
                Self::Quiz {
                    title,
                    description,
                    difficulty,
                    points,
                    co2_impact,
                },
                ContentForm::Quiz(draft),
            ) => {
                overlay_string(&mut draft.title, title);
                overlay_string(&mut draft.description, description);
                overlay_string(&mut draft.difficulty, difficulty);
                overlay(&mut draft.points, points);
                overlay(&mut draft.co2_impact, co2_impact);
                Ok(())
            }
            (
                Self::Tip {
                    title,
                    content,
                    category,
                    impact,
                },
                ContentForm::Tip(draft),
            ) => {
                overlay_string(&mut draft.title, title);
                overlay_string(&mut draft.content, content);
                overlay_string(&mut draft.category, category);
                overlay_string(&mut draft.impact, impact);
                Ok(())
            }
            (fields, form) => Err(CliError::KindMismatch {
                given: fields.kind(),
                expected: form.kind(),
            }),
        }
    }
}

fn overlay_string(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn overlay<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// List all items of one kind.
pub async fn list(kind: ContentKind) -> Result<(), CliError> {
    let (client, _session) = context()?;
    let mut admin = ContentAdmin::new(client);
    admin.select_kind(kind);

    let items = admin.reload().await?;
    info!("{} {kind} item(s)", items.len());
    print_list(&items);
    Ok(())
}

/// Create a new item from the given fields.
pub async fn create(item: ContentFields) -> Result<(), CliError> {
    let (client, _session) = context()?;
    let mut admin = ContentAdmin::new(client);
    admin.select_kind(item.kind());

    item.apply(admin.form_mut())?;
    admin.submit().await?;

    info!("Created {} item", admin.active_kind());
    Ok(())
}

/// Update an existing item: fetch it, overlay the given fields, submit.
pub async fn update(kind: ContentKind, id: i64, item: ContentFields) -> Result<(), CliError> {
    if item.kind() != kind {
        return Err(CliError::KindMismatch {
            given: item.kind(),
            expected: kind,
        });
    }

    let (client, _session) = context()?;
    let mut admin = ContentAdmin::new(client);
    admin.select_kind(kind);

    let existing = find_item(&admin.reload().await?, id).ok_or(CliError::NotFound { kind, id })?;
    admin.start_edit(&existing);
    item.apply(admin.form_mut())?;
    admin.submit().await?;

    info!("Updated {kind} item {id}");
    Ok(())
}

/// Delete an item. Refuses to touch the backend without `--yes`.
pub async fn delete(kind: ContentKind, id: i64, yes: bool) -> Result<(), CliError> {
    let (client, _session) = context()?;
    let mut admin = ContentAdmin::new(client);
    admin.select_kind(kind);
    admin.request_delete(kind, id);

    if !yes {
        admin.cancel_delete();
        warn!("Not deleting {kind} item {id}; pass --yes to confirm");
        return Ok(());
    }

    admin.confirm_delete().await?;
    info!("Deleted {kind} item {id}");
    Ok(())
}

fn find_item(list: &ContentList, id: i64) -> Option<ContentItem> {
    match list {
        ContentList::Missions(items) => items
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .map(ContentItem::Mission),
        ContentList::Quizzes(items) => items
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .map(ContentItem::Quiz),
        ContentList::Tips(items) => items
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .map(ContentItem::Tip),
    }
}

fn print_list(list: &ContentList) {
    match list {
        ContentList::Missions(items) => {
            for mission in items {
                info!(
                    "  #{} {} [{} / {}] {} pts",
                    mission.id, mission.title, mission.category, mission.difficulty, mission.points
                );
            }
        }
        ContentList::Quizzes(items) => {
            for quiz in items {
                info!(
                    "  #{} {} [{}] {} pts",
                    quiz.id, quiz.title, quiz.difficulty, quiz.points
                );
            }
        }
        ContentList::Tips(items) => {
            for tip in items {
                info!(
                    "  #{} {} [{}] {} like(s)",
                    tip.id, tip.title, tip.category, tip.likes
                );
            }
        }
    }
}
