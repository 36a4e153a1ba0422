pub mod access;
pub mod auth;
pub mod company;
pub mod pages;
