use crate::server::data::recommend::RecommendRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, board::BoardFactory},
};

mod insert_if_absent;
mod queries;
