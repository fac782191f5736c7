mod board;
mod comment;
mod ebook;
mod notify;
mod qna;
mod recommend;
mod small_talk;
