use alloy::sol;

sol! {
    interface IPancakePair {
        function token0() external view returns (address);
        function token1() external view returns (address);
    }
}
