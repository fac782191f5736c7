use sea_orm::DatabaseConnection;

use crate::server::{
    data::small_talk::SmallTalkRepository,
    error::AppError,
    model::{
        small_talk::{
            CreateSmallSubjectParams, CreateSubjectOutcome, RandomSubject, SmallSubject,
            SmallSubjectDetail,
        },
        Ownership,
    },
};

pub struct SmallTalkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SmallTalkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subject unless its title is already taken
    pub async fn create_subject(
        &self,
        params: CreateSmallSubjectParams,
    ) -> Result<CreateSubjectOutcome, AppError> {
        let repo = SmallTalkRepository::new(self.db);

        if repo.title_exists(&params.title).await? {
            return Ok(CreateSubjectOutcome::DuplicateTitle);
        }

        let subject = repo.create_subject(params).await?;

        Ok(CreateSubjectOutcome::Created(subject))
    }

    /// Soft-deletes a subject if the caller created it
    pub async fn delete_subject(&self, id: i32, user_id: i32) -> Result<Ownership<()>, AppError> {
        let repo = SmallTalkRepository::new(self.db);

        let subject = repo
            .find_subject(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subject not found".to_string()))?;

        if subject.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        repo.soft_delete_subject(subject).await?;

        Ok(Ownership::Owner(()))
    }

    pub async fn list_subjects(&self, title: Option<&str>) -> Result<Vec<SmallSubject>, AppError> {
        Ok(SmallTalkRepository::new(self.db)
            .list_subjects(title)
            .await?)
    }

    /// Gets a subject together with its talks
    pub async fn get_subject(&self, id: i32) -> Result<SmallSubjectDetail, AppError> {
        let repo = SmallTalkRepository::new(self.db);

        let subject = repo
            .get_subject(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subject not found".to_string()))?;
        let talks = repo.get_talks(id).await?;

        Ok(SmallSubjectDetail { subject, talks })
    }

    /// Posts a talk under an existing subject
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the stored talk
    /// - `Err(AppError::NotFound)` - Subject missing or deleted
    pub async fn create_talk(
        &self,
        small_subject_id: i32,
        user_id: i32,
        contents: String,
    ) -> Result<i32, AppError> {
        let repo = SmallTalkRepository::new(self.db);

        if repo.find_subject(small_subject_id).await?.is_none() {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        let talk = repo.create_talk(small_subject_id, user_id, contents).await?;

        Ok(talk.id)
    }

    pub async fn random_subject(&self) -> Result<RandomSubject, AppError> {
        SmallTalkRepository::new(self.db)
            .random_subject()
            .await?
            .ok_or_else(|| AppError::NotFound("No random subjects available".to_string()))
    }
}
