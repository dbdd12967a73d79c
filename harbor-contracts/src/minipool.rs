use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborMinipoolManager {
        event MinipoolCreated(address indexed minipool, address indexed node, uint256 time);
        event MinipoolDestroyed(address indexed minipool, address indexed node, uint256 time);
        event BeginBondReduction(address indexed minipool, uint256 time);
        event CancelReductionVoted(address indexed minipool, address indexed member, uint256 time);
        event ReductionCancelled(address indexed minipool, uint256 time);

        function getMinipoolCount() external view returns (uint256);
        function getStakingMinipoolCount() external view returns (uint256);
        function getFinalisedMinipoolCount() external view returns (uint256);
        function getActiveMinipoolCount() external view returns (uint256);
        function getMinipoolCountPerStatus(uint256 _offset, uint256 _limit) external view
            returns (uint256 initialisedCount, uint256 prelaunchCount, uint256 stakingCount, uint256 withdrawableCount, uint256 dissolvedCount);
        function getPrelaunchMinipools(uint256 _offset, uint256 _limit) external view returns (address[] memory);

        function getMinipoolAt(uint256 _index) external view returns (address);
        function getNodeMinipoolCount(address _nodeAddress) external view returns (uint256);
        function getNodeActiveMinipoolCount(address _nodeAddress) external view returns (uint256);
        function getNodeFinalisedMinipoolCount(address _nodeAddress) external view returns (uint256);
        function getNodeStakingMinipoolCount(address _nodeAddress) external view returns (uint256);
        function getNodeMinipoolAt(address _nodeAddress, uint256 _index) external view returns (address);

        function getMinipoolByPubkey(bytes memory _pubkey) external view returns (address);
        function getMinipoolExists(address _minipoolAddress) external view returns (bool);
        function getMinipoolDestroyed(address _minipoolAddress) external view returns (bool);
        function getMinipoolPubkey(address _minipoolAddress) external view returns (bytes memory);
        function getMinipoolWithdrawalCredentials(address _minipoolAddress) external pure returns (bytes memory);

        function createMinipool(address _nodeAddress, uint256 _salt) external returns (address);
        function destroyMinipool() external;
        function incrementNodeStakingMinipoolCount(address _nodeAddress) external;
        function decrementNodeStakingMinipoolCount(address _nodeAddress) external;
        function setMinipoolPubkey(bytes calldata _pubkey) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborMinipoolQueue {
        event MinipoolEnqueued(address indexed minipool, uint256 time);
        event MinipoolDequeued(address indexed minipool, uint256 time);
        event MinipoolRemoved(address indexed minipool, uint256 time);

        function getTotalLength() external view returns (uint256);
        function getLength() external view returns (uint256);
        function getTotalCapacity() external view returns (uint256);
        function getEffectiveCapacity() external view returns (uint256);
        function getNextCapacity() external view returns (uint256);
        function getNextDeposit() external view returns (address, uint256);
        function getMinipoolAt(uint256 _index) external view returns (address);
        function getMinipoolPosition(address _minipool) external view returns (int256);

        function enqueueMinipool(address _minipool) external;
        function dequeueMinipools(uint256 _maxToDequeue) external returns (address[] memory);
        function removeMinipool(address _minipool) external;
    }
);

sol!(
    #[allow(missing_docs, clippy::too_many_arguments)]
    #[sol(rpc)]
    contract HarborMinipool {
        // Lifecycle: 0 initialised, 1 prelaunch, 2 staking,
        // 3 withdrawable, 4 dissolved.
        type MinipoolStatus is uint8;

        event StatusUpdated(uint8 indexed status, uint256 time);
        event ScrubVoted(address indexed member, uint256 time);
        event MinipoolScrubbed(uint256 time);
        event MinipoolPrestaked(bytes validatorPubkey, bytes validatorSignature, bytes32 depositDataRoot, uint256 amount, bytes withdrawalCredentials, uint256 time);
        event MinipoolPromoted(uint256 time);
        event MinipoolVacancyPrepared(uint256 bondAmount, uint256 currentBalance, uint256 time);
        event EtherDeposited(address indexed from, uint256 amount, uint256 time);
        event EtherWithdrawn(address indexed to, uint256 amount, uint256 time);

        error OnlyMinipoolOwner(address caller);
        error InvalidMinipoolStatus();
        error MinipoolNotDissolved();

        function getStatus() external view returns (MinipoolStatus);
        function getFinalised() external view returns (bool);
        function getStatusBlock() external view returns (uint256);
        function getStatusTime() external view returns (uint256);
        function getScrubVoted(address _member) external view returns (bool);
        function getVacant() external view returns (bool);

        function getNodeAddress() external view returns (address);
        function getNodeFee() external view returns (uint256);
        function getNodeDepositBalance() external view returns (uint256);
        function getNodeRefundBalance() external view returns (uint256);
        function getNodeDepositAssigned() external view returns (bool);
        function getUserDepositBalance() external view returns (uint256);
        function getUserDepositAssigned() external view returns (bool);
        function getUserDepositAssignedTime() external view returns (uint256);

        function calculateNodeShare(uint256 _balance) external view returns (uint256);
        function calculateUserShare(uint256 _balance) external view returns (uint256);

        function preDeposit(uint256 _bondValue, bytes calldata _validatorPubkey, bytes calldata _validatorSignature, bytes32 _depositDataRoot) external payable;
        function deposit() external payable;
        function userDeposit() external payable;

        function stake(bytes calldata _validatorSignature, bytes32 _depositDataRoot) external;
        function promote() external;

        function refund() external;
        function slash() external;
        function finalise() external;

        function beginUserDistribute() external;
        function userDistributeAllowed() external view returns (bool);
        function distributeBalance(bool _rewardsOnly) external;

        function voteScrub() external;
        function dissolve() external;
        function close() external;
    }
);
