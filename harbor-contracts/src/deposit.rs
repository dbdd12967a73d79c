use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborDepositPool {
        constructor(address _harborStorageAddress);

        event DepositReceived(address indexed from, uint256 amount, uint256 time);
        event DepositRecycled(address indexed from, uint256 amount, uint256 time);
        event DepositAssigned(address indexed minipool, uint256 amount, uint256 time);
        event ExcessWithdrawn(address indexed to, uint256 amount, uint256 time);

        function getBalance() external view returns (uint256);
        function getNodeBalance() external view returns (uint256);
        function getUserBalance() external view returns (int256);
        function getExcessBalance() external view returns (uint256);
        function getMaximumDepositAmount() external view returns (uint256);

        function deposit() external payable;
        function nodeDeposit(uint256 _totalAmount) external payable;
        function nodeCreditWithdrawal(uint256 _amount) external;

        function recycleDissolvedDeposit() external payable;
        function recycleExcessCollateral() external payable;

        function assignDeposits() external;
        function maybeAssignDeposits() external returns (bool);

        function withdrawExcessBalance(uint256 _amount) external;
    }
);
