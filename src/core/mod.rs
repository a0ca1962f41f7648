pub mod config;
pub mod dump;
pub mod epoch;
pub mod printer;
