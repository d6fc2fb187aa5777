pub mod db;
pub mod orm;
pub mod web;
