use crate::server::{
    data::board::{BoardRepository, LATEST_BOARD_COUNT},
    model::{
        board::{CreateBoardParams, SearchScope, UpdateBoardParams},
        page::PageRequest,
    },
    util::search::any_word_matches,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, board::BoardFactory},
};

mod create;
mod get_detail;
mod get_liked_by_user;
mod get_paginated;
mod search;
