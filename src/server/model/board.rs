//! Board domain models and parameters.
//!
//! Boards are listed with their category name, author nickname and the number of
//! users currently recommending them. Recommendation counts are always derived from
//! `board_recommend`, never stored on the board row.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::model::board::{
    BoardCategoryDto, BoardDetailDto, BoardListItemDto, CreateBoardDto, RecommendDto,
    UpdateBoardDto,
};

/// Board row as shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardListItem {
    pub id: i32,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub category: String,
    pub nickname: String,
    pub recommend_count: u64,
}

impl BoardListItem {
    pub fn into_dto(self) -> BoardListItemDto {
        BoardListItemDto {
            id: self.id,
            title: self.title,
            date_time: self.date_time,
            category: self.category,
            nickname: self.nickname,
            recommend_count: self.recommend_count,
        }
    }
}

/// Full board with author and category details.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardDetail {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub date_time: DateTime<Utc>,
    pub is_modified: bool,
    pub board_category_id: i32,
    pub category: String,
    pub user_id: i32,
    pub nickname: String,
    pub img: Option<String>,
    pub recommend_count: u64,
}

impl BoardDetail {
    pub fn into_dto(self) -> BoardDetailDto {
        BoardDetailDto {
            id: self.id,
            title: self.title,
            contents: self.contents,
            date_time: self.date_time,
            is_modified: self.is_modified,
            board_category_id: self.board_category_id,
            category: self.category,
            user_id: self.user_id,
            nickname: self.nickname,
            img: self.img,
            recommend_count: self.recommend_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardCategory {
    pub id: i32,
    pub category: String,
}

impl BoardCategory {
    pub fn from_entity(entity: entity::board_category::Model) -> Self {
        Self {
            id: entity.id,
            category: entity.category,
        }
    }

    pub fn into_dto(self) -> BoardCategoryDto {
        BoardCategoryDto {
            id: self.id,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    pub user_id: i32,
    pub title: String,
    pub contents: String,
    pub board_category_id: i32,
}

impl CreateBoardParams {
    pub fn from_dto(user_id: i32, dto: CreateBoardDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            contents: dto.contents,
            board_category_id: dto.board_category_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBoardParams {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub board_category_id: i32,
}

impl From<UpdateBoardDto> for UpdateBoardParams {
    fn from(dto: UpdateBoardDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            contents: dto.contents,
            board_category_id: dto.board_category_id,
        }
    }
}

/// Which columns a board search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Title,
    Contents,
}

impl SearchScope {
    pub fn columns(self) -> &'static [entity::board::Column] {
        use entity::board::Column;

        match self {
            Self::All => &[Column::Title, Column::Contents],
            Self::Title => &[Column::Title],
            Self::Contents => &[Column::Contents],
        }
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "title" => Ok(Self::Title),
            "contents" => Ok(Self::Contents),
            other => Err(format!("Unknown search scope '{}'", other)),
        }
    }
}

/// Transition applied by the recommend toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendAction {
    /// No row existed; one was inserted with `check = true`.
    Created,
    /// `check` went from true to false.
    Cancelled,
    /// `check` went from false to true.
    Restored,
}

impl RecommendAction {
    /// Message reported to the client for this transition.
    pub fn message(self) -> &'static str {
        match self {
            Self::Created => "create recommend",
            Self::Cancelled => "cancel recommend",
            Self::Restored => "reRecommend",
        }
    }
}

/// Result of a recommend toggle: the transition and the board's new count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendOutcome {
    pub action: RecommendAction,
    pub recommend_count: u64,
}

impl RecommendOutcome {
    pub fn into_dto(self) -> RecommendDto {
        RecommendDto {
            success: true,
            msg: self.action.message().to_string(),
            recommend: self.recommend_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_search_scopes() {
        assert_eq!("all".parse::<SearchScope>(), Ok(SearchScope::All));
        assert_eq!("title".parse::<SearchScope>(), Ok(SearchScope::Title));
        assert_eq!("contents".parse::<SearchScope>(), Ok(SearchScope::Contents));
        assert!("author".parse::<SearchScope>().is_err());
    }

    #[test]
    fn recommend_messages_match_transitions() {
        assert_eq!(RecommendAction::Created.message(), "create recommend");
        assert_eq!(RecommendAction::Cancelled.message(), "cancel recommend");
        assert_eq!(RecommendAction::Restored.message(), "reRecommend");
    }
}
