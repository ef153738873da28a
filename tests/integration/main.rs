//! Integration tests for anime-presenter

mod cli_test;
mod helpers;
mod player_test;
