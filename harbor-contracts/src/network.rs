use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborNetworkBalances {
        event BalancesSubmitted(address indexed from, uint256 block, uint256 totalEth, uint256 stakingEth, uint256 sethSupply, uint256 time);
        event BalancesUpdated(uint256 block, uint256 totalEth, uint256 stakingEth, uint256 sethSupply, uint256 time);

        function getBalancesBlock() external view returns (uint256);
        function getLatestReportableBlock() external view returns (uint256);
        function getTotalETHBalance() external view returns (uint256);
        function getStakingETHBalance() external view returns (uint256);
        function getTotalSETHSupply() external view returns (uint256);
        function getETHUtilizationRate() external view returns (uint256);

        function submitBalances(uint256 _block, uint256 _totalEth, uint256 _stakingEth, uint256 _sethSupply) external;
        function executeUpdateBalances(uint256 _block, uint256 _totalEth, uint256 _stakingEth, uint256 _sethSupply) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborNetworkPrices {
        event PricesSubmitted(address indexed from, uint256 block, uint256 hbrPrice, uint256 time);
        event PricesUpdated(uint256 block, uint256 hbrPrice, uint256 time);

        function getPricesBlock() external view returns (uint256);
        function getLatestReportableBlock() external view returns (uint256);
        function getHBRPrice() external view returns (uint256);

        function submitPrices(uint256 _block, uint256 _hbrPrice) external;
        function executeUpdatePrices(uint256 _block, uint256 _hbrPrice) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborNetworkFees {
        function getNodeDemand() external view returns (int256);
        function getNodeFee() external view returns (uint256);
        function getNodeFeeByDemand(int256 _nodeDemand) external view returns (uint256);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborNetworkPenalties {
        event PenaltySubmitted(address indexed from, address minipoolAddress, uint256 block, uint256 time);
        event PenaltyUpdated(address indexed minipoolAddress, uint256 penalty, uint256 time);

        function getPenaltyCount(address _minipoolAddress) external view returns (uint256);
        function submitPenalty(address _minipoolAddress, uint256 _block) external;
        function executeUpdatePenalty(address _minipoolAddress, uint256 _block) external;
    }
);
