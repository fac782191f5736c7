//! Board reports and bans.
//!
//! Generic over `ConnectionTrait` so a ban and the resolution of its report commit
//! or roll back together.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::notify::Notify;

pub struct NotifyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotifyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Files a report against a board.
    pub async fn create(
        &self,
        board_id: i32,
        user_id: i32,
        reason: String,
    ) -> Result<entity::board_notify::Model, DbErr> {
        entity::board_notify::ActiveModel {
            reason: ActiveValue::Set(reason),
            date_time: ActiveValue::Set(Utc::now()),
            board_id: ActiveValue::Set(board_id),
            user_id: ActiveValue::Set(user_id),
            is_checked: ActiveValue::Set(false),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets unresolved reports, oldest first, with the reported board's title.
    pub async fn get_pending(&self) -> Result<Vec<Notify>, DbErr> {
        let notifies = entity::prelude::BoardNotify::find()
            .filter(entity::board_notify::Column::IsDeleted.eq(false))
            .order_by_asc(entity::board_notify::Column::Id)
            .all(self.db)
            .await?;

        let board_ids: Vec<i32> = notifies.iter().map(|n| n.board_id).collect();
        let boards: HashMap<i32, entity::board::Model> = if board_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Board::find()
                .filter(entity::board::Column::Id.is_in(board_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|b| (b.id, b))
                .collect()
        };

        Ok(notifies
            .into_iter()
            .map(|n| {
                let board = boards.get(&n.board_id);
                Notify::from_entity(n, board)
            })
            .collect())
    }

    /// Finds a report that has not been resolved.
    pub async fn find_pending(
        &self,
        id: i32,
    ) -> Result<Option<entity::board_notify::Model>, DbErr> {
        entity::prelude::BoardNotify::find_by_id(id)
            .filter(entity::board_notify::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Finds a board that has not been deleted, banned or not.
    pub async fn find_board(&self, board_id: i32) -> Result<Option<entity::board::Model>, DbErr> {
        entity::prelude::Board::find_by_id(board_id)
            .filter(entity::board::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Sets `ban = true` on a board.
    pub async fn ban_board(&self, board: entity::board::Model) -> Result<(), DbErr> {
        let mut active: entity::board::ActiveModel = board.into();
        active.ban = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }

    /// Marks a report as checked and removes it from the pending list.
    pub async fn resolve(&self, notify: entity::board_notify::Model) -> Result<(), DbErr> {
        let mut active: entity::board_notify::ActiveModel = notify.into();
        active.is_checked = ActiveValue::Set(true);
        active.is_deleted = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }
}
