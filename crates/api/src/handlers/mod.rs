pub mod analytics;
pub mod auth;
pub mod contact;
pub mod courses;
pub mod members;
pub mod news;
pub mod packages;
pub mod requests;
pub mod reviews;
pub mod teachers;
