pub mod access;
pub mod activity;
pub mod answer;
pub mod evaluation;
pub mod level;
pub mod question;
pub mod user;
