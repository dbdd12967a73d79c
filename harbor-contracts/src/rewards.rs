use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborRewardsPool {
        struct RewardSubmission {
            uint256 rewardIndex;
            uint256 executionBlock;
            uint256 consensusBlock;
            bytes32 merkleRoot;
            string merkleTreeCID;
            uint256 intervalsPassed;
            uint256 treasuryHBR;
            uint256[] trustedNodeHBR;
            uint256[] nodeHBR;
            uint256[] nodeETH;
            uint256 userETH;
        }

        event RewardSnapshotSubmitted(address indexed from, uint256 indexed rewardIndex, RewardSubmission submission, uint256 time);
        event RewardSnapshot(uint256 indexed rewardIndex, RewardSubmission submission, uint256 intervalStartTime, uint256 intervalEndTime, uint256 time);

        function getRewardIndex() external view returns (uint256);
        function getHBRBalance() external view returns (uint256);
        function getPendingHBRRewards() external view returns (uint256);
        function getPendingETHRewards() external view returns (uint256);
        function getClaimIntervalTimeStart() external view returns (uint256);
        function getClaimIntervalTime() external view returns (uint256);
        function getClaimIntervalsPassed() external view returns (uint256);
        function getClaimIntervalExecutionBlock(uint256 _interval) external view returns (uint256);
        function getTrustedNodeSubmitted(address _trustedNodeAddress, uint256 _rewardIndex) external view returns (bool);
        function getSubmissionCount(RewardSubmission memory _submission) external view returns (uint256);

        function submitRewardSnapshot(RewardSubmission calldata _submission) external;
        function executeRewardSnapshot(RewardSubmission calldata _submission) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborMerkleDistributor {
        event RewardsClaimed(address indexed claimer, uint256[] rewardIndex, uint256[] amountHBR, uint256[] amountETH);

        function isClaimed(uint256 _rewardIndex, address _nodeAddress) external view returns (bool);
        function getMerkleRoot(uint256 _rewardIndex) external view returns (bytes32);

        function claim(
            address _nodeAddress,
            uint256[] calldata _rewardIndex,
            uint256[] calldata _amountHBR,
            uint256[] calldata _amountETH,
            bytes32[][] calldata _merkleProof
        ) external;

        function claimAndStake(
            address _nodeAddress,
            uint256[] calldata _rewardIndex,
            uint256[] calldata _amountHBR,
            uint256[] calldata _amountETH,
            bytes32[][] calldata _merkleProof,
            uint256 _stakeAmount
        ) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborClaimDAO {
        struct PaymentContract {
            address recipient;
            uint256 amountPerPeriod;
            uint256 periodLength;
            uint256 lastPaymentTime;
            uint256 numPeriods;
            uint256 periodsPaid;
        }

        event HBRTokensSentByDAOProtocol(string invoiceID, address indexed from, address indexed to, uint256 amount, uint256 time);
        event HBRTreasuryContractCreated(string contractName, address indexed recipient, uint256 amountPerPeriod, uint256 startTime, uint256 numPeriods);
        event HBRTreasuryContractPayment(string contractName, address indexed recipient, uint256 amount, uint256 time);
        event HBRTreasuryContractClaimed(address indexed recipient, uint256 amount, uint256 time);

        function getContractExists(string calldata _contractName) external view returns (bool);
        function getContract(string calldata _contractName) external view returns (PaymentContract memory);
        function getBalance(address _recipientAddress) external view returns (uint256);

        function spend(string calldata _invoiceID, address _recipientAddress, uint256 _amount) external;
        function newContract(string calldata _contractName, address _recipientAddress, uint256 _amountPerPeriod, uint256 _periodLength, uint256 _startTime, uint256 _numPeriods) external;
        function updateContract(string calldata _contractName, address _recipientAddress, uint256 _amountPerPeriod, uint256 _periodLength, uint256 _numPeriods) external;
        function payOutContracts() external;
        function withdrawBalance(address _recipientAddress) external;
    }
);
