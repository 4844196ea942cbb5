//! Integration tests against a mock backend

mod blocks_test;
mod gallery_test;
mod users_test;
mod viewmodel_test;
