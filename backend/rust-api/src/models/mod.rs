pub mod assistant;
pub mod attempt;
pub mod catalog;
pub mod search;
pub mod timer;
pub mod user;
