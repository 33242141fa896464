pub mod balance;
pub mod decimals;
pub mod prefix;
