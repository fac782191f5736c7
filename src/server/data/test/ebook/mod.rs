use crate::server::{data::ebook::EbookRepository, model::page::PageRequest};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod rating;
mod series;
