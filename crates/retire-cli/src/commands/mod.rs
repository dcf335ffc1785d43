pub mod budget;
pub mod inflation;
pub mod investment;
pub mod loan;
pub mod savings;
