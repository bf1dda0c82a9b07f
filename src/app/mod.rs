//! Repository operations, one module per entity.

mod news;
mod player;

pub use news::{news_add, news_get, news_list, NewsCreateReq, NewsDto};
pub use player::{player_add, player_list, PlayerCreateReq, PlayerDto};
