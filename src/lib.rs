pub mod error;
pub mod mass;
pub mod quantity;
pub mod storage;
pub mod unit;
pub mod utils;

mod hash;
mod parser;

#[cfg(test)]
mod test_utils;
