#[cfg(test)]
pub mod marketplace;
