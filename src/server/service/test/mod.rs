mod ebook;
mod notify;
mod recommend;
