use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::{
        board::{
            BoardCategory, BoardDetail, BoardListItem, CreateBoardParams, SearchScope,
            UpdateBoardParams,
        },
        page::{Page, PageRequest},
        Ownership,
    },
    util::search::any_word_matches,
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated visible boards
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<BoardListItem>, AppError> {
        let (items, total) = BoardRepository::new(self.db).get_paginated(&page).await?;

        Ok(Page::new(total, page.page_size, items))
    }

    /// Gets paginated visible boards in one category
    pub async fn get_paginated_by_category(
        &self,
        board_category_id: i32,
        page: PageRequest,
    ) -> Result<Page<BoardListItem>, AppError> {
        let (items, total) = BoardRepository::new(self.db)
            .get_paginated_by_category(board_category_id, &page)
            .await?;

        Ok(Page::new(total, page.page_size, items))
    }

    /// Searches visible boards; any keyword word matching any scoped column is a hit
    pub async fn search(
        &self,
        scope: SearchScope,
        page: PageRequest,
    ) -> Result<Page<BoardListItem>, AppError> {
        let condition = any_word_matches(scope.columns(), page.keyword());

        let (items, total) = BoardRepository::new(self.db)
            .search(condition, &page)
            .await?;

        Ok(Page::new(total, page.page_size, items))
    }

    /// Gets a visible board's details
    pub async fn get_by_id(&self, id: i32) -> Result<BoardDetail, AppError> {
        BoardRepository::new(self.db)
            .get_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))
    }

    /// Gets a board's details for editing, only for its author
    pub async fn get_for_update(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Ownership<BoardDetail>, AppError> {
        let board = self.get_by_id(id).await?;

        if board.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        Ok(Ownership::Owner(board))
    }

    /// Creates a board in an existing category
    pub async fn create(&self, params: CreateBoardParams) -> Result<(), AppError> {
        let repo = BoardRepository::new(self.db);

        if !repo.category_exists(params.board_category_id).await? {
            return Err(AppError::BadRequest("Unknown board category".to_string()));
        }

        let board = repo.create(params).await?;
        tracing::debug!("User {} created board {}", board.user_id, board.id);

        Ok(())
    }

    /// Updates a board if the caller wrote it
    pub async fn update(
        &self,
        params: UpdateBoardParams,
        user_id: i32,
    ) -> Result<Ownership<()>, AppError> {
        let repo = BoardRepository::new(self.db);

        let board = repo
            .find_visible(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        if board.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }
        if !repo.category_exists(params.board_category_id).await? {
            return Err(AppError::BadRequest("Unknown board category".to_string()));
        }

        repo.update(board, params).await?;

        Ok(Ownership::Owner(()))
    }

    /// Soft-deletes a board if the caller wrote it
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<Ownership<()>, AppError> {
        let repo = BoardRepository::new(self.db);

        let board = repo
            .find_visible(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        if board.user_id != user_id {
            return Ok(Ownership::NotOwner);
        }

        repo.soft_delete(board).await?;

        Ok(Ownership::Owner(()))
    }

    /// Gets the caller's own boards
    pub async fn get_mine(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Page<BoardListItem>, AppError> {
        let (items, total) = BoardRepository::new(self.db)
            .get_paginated_by_user(user_id, &page)
            .await?;

        Ok(Page::new(total, page.page_size, items))
    }

    /// Gets boards the caller currently recommends
    pub async fn get_liked(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Page<BoardListItem>, AppError> {
        let (items, total) = BoardRepository::new(self.db)
            .get_liked_by_user(user_id, &page)
            .await?;

        Ok(Page::new(total, page.page_size, items))
    }

    /// Gets the newest boards
    pub async fn latest(&self) -> Result<Vec<BoardListItem>, AppError> {
        Ok(BoardRepository::new(self.db).latest().await?)
    }

    pub async fn categories(&self) -> Result<Vec<BoardCategory>, AppError> {
        Ok(BoardRepository::new(self.db).categories().await?)
    }
}
