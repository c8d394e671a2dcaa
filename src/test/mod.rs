pub mod utils;

mod db;
mod mail;
