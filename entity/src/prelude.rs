pub use super::board::Entity as Board;
pub use super::board_category::Entity as BoardCategory;
pub use super::board_comment::Entity as BoardComment;
pub use super::board_notify::Entity as BoardNotify;
pub use super::board_recommend::Entity as BoardRecommend;
pub use super::ebook::Entity as Ebook;
pub use super::ebook_series::Entity as EbookSeries;
pub use super::ebook_star_rate::Entity as EbookStarRate;
pub use super::qna::Entity as Qna;
pub use super::random_subject::Entity as RandomSubject;
pub use super::small_subject::Entity as SmallSubject;
pub use super::small_talk::Entity as SmallTalk;
pub use super::user::Entity as User;
