pub mod db;
pub mod document;
