//! SeaORM entity models for the community platform schema.

pub mod prelude;

pub mod board;
pub mod board_category;
pub mod board_comment;
pub mod board_notify;
pub mod board_recommend;
pub mod ebook;
pub mod ebook_series;
pub mod ebook_star_rate;
pub mod qna;
pub mod random_subject;
pub mod small_subject;
pub mod small_talk;
pub mod user;
