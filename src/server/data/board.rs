//! Board data repository.
//!
//! Listings only include boards that are neither soft-deleted nor banned, newest first.
//! Rows are enriched with the category name, author nickname and recommend count.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{recommend::RecommendRepository, user::UserRepository},
    model::{
        board::{BoardCategory, BoardDetail, BoardListItem, CreateBoardParams, UpdateBoardParams},
        page::PageRequest,
    },
};

/// Number of boards returned by `latest`.
pub const LATEST_BOARD_COUNT: u64 = 5;

pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Boards that are neither deleted nor banned.
    fn visible() -> Select<entity::board::Entity> {
        entity::prelude::Board::find()
            .filter(entity::board::Column::IsDeleted.eq(false))
            .filter(entity::board::Column::Ban.eq(false))
    }

    /// Gets one page of visible boards matching `condition`, newest first.
    ///
    /// # Returns
    /// - `Ok((items, total))` - Page items and the total number of matching boards
    /// - `Err(DbErr)` - Database error during query
    async fn get_paginated_where(
        &self,
        condition: Condition,
        page: &PageRequest,
    ) -> Result<(Vec<BoardListItem>, u64), DbErr> {
        let total = Self::visible()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let boards = Self::visible()
            .filter(condition)
            .order_by_desc(entity::board::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db)
            .await?;

        Ok((self.to_list_items(boards).await?, total))
    }

    /// Gets paginated visible boards.
    pub async fn get_paginated(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<BoardListItem>, u64), DbErr> {
        self.get_paginated_where(Condition::all(), page).await
    }

    /// Gets paginated visible boards in one category.
    pub async fn get_paginated_by_category(
        &self,
        board_category_id: i32,
        page: &PageRequest,
    ) -> Result<(Vec<BoardListItem>, u64), DbErr> {
        self.get_paginated_where(
            Condition::all().add(entity::board::Column::BoardCategoryId.eq(board_category_id)),
            page,
        )
        .await
    }

    /// Gets paginated visible boards written by one user.
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: &PageRequest,
    ) -> Result<(Vec<BoardListItem>, u64), DbErr> {
        self.get_paginated_where(
            Condition::all().add(entity::board::Column::UserId.eq(user_id)),
            page,
        )
        .await
    }

    /// Gets paginated visible boards matching a search condition.
    ///
    /// # Arguments
    /// - `condition` - Keyword condition built by `util::search`
    /// - `page` - Page to fetch
    pub async fn search(
        &self,
        condition: Condition,
        page: &PageRequest,
    ) -> Result<(Vec<BoardListItem>, u64), DbErr> {
        self.get_paginated_where(condition, page).await
    }

    /// Gets paginated boards the user currently recommends.
    ///
    /// Ordered by most recent recommendation. Boards deleted or banned since they were
    /// recommended are skipped.
    pub async fn get_liked_by_user(
        &self,
        user_id: i32,
        page: &PageRequest,
    ) -> Result<(Vec<BoardListItem>, u64), DbErr> {
        let liked_ids = RecommendRepository::new(self.db)
            .liked_board_ids(user_id)
            .await?;
        if liked_ids.is_empty() {
            return Ok((Vec::new(), 0));
        }

        let boards: HashMap<i32, entity::board::Model> = Self::visible()
            .filter(entity::board::Column::Id.is_in(liked_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        let ordered: Vec<entity::board::Model> = liked_ids
            .into_iter()
            .filter_map(|id| boards.get(&id).cloned())
            .collect();
        let total = ordered.len() as u64;

        let page_boards = ordered
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok((self.to_list_items(page_boards).await?, total))
    }

    /// Gets the newest visible boards.
    pub async fn latest(&self) -> Result<Vec<BoardListItem>, DbErr> {
        let boards = Self::visible()
            .order_by_desc(entity::board::Column::Id)
            .limit(LATEST_BOARD_COUNT)
            .all(self.db)
            .await?;

        self.to_list_items(boards).await
    }

    /// Finds a visible board by ID.
    pub async fn find_visible(&self, id: i32) -> Result<Option<entity::board::Model>, DbErr> {
        Self::visible()
            .filter(entity::board::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    /// Gets a visible board with its category, author and recommend count.
    ///
    /// # Returns
    /// - `Ok(Some(BoardDetail))` - Board found
    /// - `Ok(None)` - Board missing, deleted or banned
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_detail(&self, id: i32) -> Result<Option<BoardDetail>, DbErr> {
        let Some(board) = self.find_visible(id).await? else {
            return Ok(None);
        };

        let category = entity::prelude::BoardCategory::find_by_id(board.board_category_id)
            .one(self.db)
            .await?;
        let user = UserRepository::new(self.db)
            .find_by_id(board.user_id)
            .await?;
        let recommend_count = RecommendRepository::new(self.db).count(board.id).await?;

        Ok(Some(BoardDetail {
            id: board.id,
            title: board.title,
            contents: board.contents,
            date_time: board.date_time,
            is_modified: board.is_modified,
            board_category_id: board.board_category_id,
            category: category.map(|c| c.category).unwrap_or_default(),
            user_id: board.user_id,
            nickname: user.as_ref().map(|u| u.nickname.clone()).unwrap_or_default(),
            img: user.and_then(|u| u.img),
            recommend_count,
        }))
    }

    /// Creates a new board.
    pub async fn create(&self, params: CreateBoardParams) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            title: ActiveValue::Set(params.title),
            contents: ActiveValue::Set(params.contents),
            date_time: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(params.user_id),
            board_category_id: ActiveValue::Set(params.board_category_id),
            ban: ActiveValue::Set(false),
            is_deleted: ActiveValue::Set(false),
            is_modified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates title, contents and category, marking the board as modified.
    pub async fn update(
        &self,
        board: entity::board::Model,
        params: UpdateBoardParams,
    ) -> Result<entity::board::Model, DbErr> {
        let mut active: entity::board::ActiveModel = board.into();
        active.title = ActiveValue::Set(params.title);
        active.contents = ActiveValue::Set(params.contents);
        active.board_category_id = ActiveValue::Set(params.board_category_id);
        active.is_modified = ActiveValue::Set(true);
        active.update(self.db).await
    }

    /// Soft-deletes a board.
    pub async fn soft_delete(&self, board: entity::board::Model) -> Result<(), DbErr> {
        let mut active: entity::board::ActiveModel = board.into();
        active.is_deleted = ActiveValue::Set(true);
        active.update(self.db).await?;
        Ok(())
    }

    /// Gets every board category ordered by ID.
    pub async fn categories(&self) -> Result<Vec<BoardCategory>, DbErr> {
        Ok(entity::prelude::BoardCategory::find()
            .order_by_asc(entity::board_category::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(BoardCategory::from_entity)
            .collect())
    }

    /// Whether a category exists.
    pub async fn category_exists(&self, board_category_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::BoardCategory::find_by_id(board_category_id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Attaches category names, nicknames and recommend counts to boards.
    async fn to_list_items(
        &self,
        boards: Vec<entity::board::Model>,
    ) -> Result<Vec<BoardListItem>, DbErr> {
        if boards.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = boards.iter().map(|b| b.board_category_id).collect();
        let categories: HashMap<i32, String> = entity::prelude::BoardCategory::find()
            .filter(entity::board_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.category))
            .collect();

        let users = UserRepository::new(self.db)
            .find_map(boards.iter().map(|b| b.user_id).collect())
            .await?;

        let recommend_repo = RecommendRepository::new(self.db);
        let mut items = Vec::with_capacity(boards.len());
        for board in boards {
            let recommend_count = recommend_repo.count(board.id).await?;

            items.push(BoardListItem {
                id: board.id,
                title: board.title,
                date_time: board.date_time,
                category: categories
                    .get(&board.board_category_id)
                    .cloned()
                    .unwrap_or_default(),
                nickname: users
                    .get(&board.user_id)
                    .map(|u| u.nickname.clone())
                    .unwrap_or_default(),
                recommend_count,
            });
        }

        Ok(items)
    }
}
