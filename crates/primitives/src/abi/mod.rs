pub mod erc20;
pub mod pancake_pair;
