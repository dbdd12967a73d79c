use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborNodeManager {
        struct NodeDetails {
            bool exists;
            uint256 registrationTime;
            string timezoneLocation;
            address withdrawalAddress;
            address pendingWithdrawalAddress;
            uint256 hbrStake;
            uint256 effectiveHBRStake;
            uint256 minimumHBRStake;
            uint256 maximumHBRStake;
            uint256 minipoolCount;
            uint256 balanceETH;
            uint256 balanceHBR;
            uint256 depositCreditBalance;
            bool smoothingPoolRegistrationState;
            uint256 smoothingPoolRegistrationChanged;
            address nodeAddress;
        }

        event NodeRegistered(address indexed node, uint256 time);
        event NodeTimezoneLocationSet(address indexed node, uint256 time);
        event NodeSmoothingPoolStateChanged(address indexed node, bool state);

        function getNodeCount() external view returns (uint256);
        function getNodeAt(uint256 _index) external view returns (address);
        function getNodeExists(address _nodeAddress) external view returns (bool);
        function getNodeWithdrawalAddress(address _nodeAddress) external view returns (address);
        function getNodePendingWithdrawalAddress(address _nodeAddress) external view returns (address);
        function getNodeTimezoneLocation(address _nodeAddress) external view returns (string memory);
        function getNodeRegistrationTime(address _nodeAddress) external view returns (uint256);
        function getNodeDetails(address _nodeAddress) external view returns (NodeDetails memory);

        function registerNode(string calldata _timezoneLocation) external;
        function setTimezoneLocation(string calldata _timezoneLocation) external;

        function getSmoothingPoolRegistrationState(address _nodeAddress) external view returns (bool);
        function getSmoothingPoolRegistrationChanged(address _nodeAddress) external view returns (uint256);
        function getSmoothingPoolRegisteredNodeCount(uint256 _offset, uint256 _limit) external view returns (uint256);
        function setSmoothingPoolRegistrationState(bool _state) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborNodeStaking {
        event HBRStaked(address indexed from, uint256 amount, uint256 time);
        event HBRWithdrawn(address indexed to, uint256 amount, uint256 time);
        event HBRSlashed(address indexed node, uint256 amount, uint256 ethValue, uint256 time);
        event StakeHBRForAllowed(address indexed node, address indexed caller, bool allowed, uint256 time);

        function getTotalHBRStake() external view returns (uint256);
        function getNodeHBRStake(address _nodeAddress) external view returns (uint256);
        function getNodeHBRStakedTime(address _nodeAddress) external view returns (uint256);
        function getNodeEffectiveHBRStake(address _nodeAddress) external view returns (uint256);
        function getNodeMinimumHBRStake(address _nodeAddress) external view returns (uint256);
        function getNodeMaximumHBRStake(address _nodeAddress) external view returns (uint256);
        function getNodeETHMatched(address _nodeAddress) external view returns (uint256);
        function getNodeETHMatchedLimit(address _nodeAddress) external view returns (uint256);
        function getNodeETHProvided(address _nodeAddress) external view returns (uint256);
        function getNodeETHCollateralisationRatio(address _nodeAddress) external view returns (uint256);

        function stakeHBR(uint256 _amount) external;
        function stakeHBRFor(address _nodeAddress, uint256 _amount) external;
        function setStakeHBRForAllowed(address _caller, bool _allowed) external;
        function withdrawHBR(uint256 _amount) external;
        function slashHBR(address _nodeAddress, uint256 _ethSlashAmount) external;
    }
);

sol!(
    #[allow(missing_docs, clippy::too_many_arguments)]
    #[sol(rpc)]
    contract HarborNodeDeposit {
        event DepositReceived(address indexed from, uint256 amount, uint256 time);

        error BadBondAmount();
        error ZeroAddressError();
        error DepositsDisabled();
        error InsufficientBalance(uint256 requested, uint256 available);
        error PubkeyAlreadyUsed(bytes pubkey);

        function getNodeDepositCredit(address _nodeOperator) external view returns (uint256);
        function increaseDepositCreditBalance(address _nodeOperator, uint256 _amount) external;

        function isValidDepositAmount(uint256 _amount) external pure returns (bool);
        function getDepositAmounts() external pure returns (uint256[] memory);

        function deposit(
            uint256 _bondAmount,
            uint256 _minimumNodeFee,
            bytes calldata _validatorPubkey,
            bytes calldata _validatorSignature,
            bytes32 _depositDataRoot,
            uint256 _salt,
            address _expectedMinipoolAddress
        ) external payable;

        function depositWithCredit(
            uint256 _bondAmount,
            uint256 _minimumNodeFee,
            bytes calldata _validatorPubkey,
            bytes calldata _validatorSignature,
            bytes32 _depositDataRoot,
            uint256 _salt,
            address _expectedMinipoolAddress
        ) external payable;
    }
);
