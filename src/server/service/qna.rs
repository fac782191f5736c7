use sea_orm::DatabaseConnection;

use crate::server::{
    data::qna::QnaRepository,
    error::AppError,
    model::{
        page::{Page, PageRequest},
        qna::{CreateQnaParams, Qna, UpdateQnaParams},
        Ownership,
    },
};

pub struct QnaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QnaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<Qna>, AppError> {
        let (items, total) = QnaRepository::new(self.db).get_paginated(&page).await?;

        Ok(Page::new(total, page.page_size, items))
    }

    pub async fn create(&self, params: CreateQnaParams) -> Result<Qna, AppError> {
        Ok(QnaRepository::new(self.db).create(params).await?)
    }

    async fn find(&self, id: i32) -> Result<entity::qna::Model, AppError> {
        QnaRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))
    }

    /// Gets an entry; secret entries are only visible to their author
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<Ownership<Qna>, AppError> {
        let qna = Qna::from_entity(self.find(id).await?);

        if !qna.is_visible_to(user_id) {
            return Ok(Ownership::NotOwner);
        }

        Ok(Ownership::Owner(qna))
    }

    /// Gets any entry regardless of secrecy, for admins
    pub async fn get_by_id_as_admin(&self, id: i32) -> Result<Qna, AppError> {
        Ok(Qna::from_entity(self.find(id).await?))
    }

    /// Gets an entry for editing, only for its author
    pub async fn get_for_update(&self, id: i32, user_id: i32) -> Result<Ownership<Qna>, AppError> {
        let qna = self.find(id).await?;

        if qna.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        Ok(Ownership::Owner(Qna::from_entity(qna)))
    }

    pub async fn update(
        &self,
        params: UpdateQnaParams,
        user_id: i32,
    ) -> Result<Ownership<Qna>, AppError> {
        let qna = self.find(params.id).await?;

        if qna.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        let updated = QnaRepository::new(self.db).update(qna, params).await?;

        Ok(Ownership::Owner(updated))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<Ownership<()>, AppError> {
        let qna = self.find(id).await?;

        if qna.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        QnaRepository::new(self.db).soft_delete(qna).await?;

        Ok(Ownership::Owner(()))
    }
}
