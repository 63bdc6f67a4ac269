pub mod amount;
pub mod canonical;
pub mod currency;
