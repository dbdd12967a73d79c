use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborDAONodeTrusted {
        event MemberJoined(address indexed node, uint256 hbrBondAmount, uint256 time);
        event MemberLeft(address indexed node, uint256 hbrBondAmount, uint256 time);
        event MemberChallengeMade(address indexed node, address indexed challenger, uint256 time);
        event MemberChallengeDecided(address indexed node, address indexed member, bool success, uint256 time);

        function getMemberCount() external view returns (uint256);
        function getMemberMinRequired() external view returns (uint256);
        function getMemberAt(uint256 _index) external view returns (address);
        function getMemberIsValid(address _nodeAddress) external view returns (bool);
        function getMemberID(address _nodeAddress) external view returns (string memory);
        function getMemberUrl(address _nodeAddress) external view returns (string memory);
        function getMemberJoinedTime(address _nodeAddress) external view returns (uint256);
        function getMemberLastProposalTime(address _nodeAddress) external view returns (uint256);
        function getMemberHBRBondAmount(address _nodeAddress) external view returns (uint256);
        function getMemberIsChallenged(address _nodeAddress) external view returns (bool);

        function bootstrapMember(string memory _id, string memory _url, address _nodeAddress) external;
        function bootstrapSettingUint(string memory _settingContractName, string memory _settingPath, uint256 _value) external;
        function bootstrapSettingBool(string memory _settingContractName, string memory _settingPath, bool _value) external;
        function bootstrapDisable(bool _confirmDisableBootstrapMode) external;

        function memberJoinRequired(string memory _id, string memory _url) external;
        function actionJoin() external;
        function actionLeave(address _hbrBondRefundAddress) external;
        function actionChallengeMake(address _nodeAddress) external payable;
        function actionChallengeDecide(address _nodeAddress) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborDAOProposal {
        // 0 pending, 1 active, 2 cancelled, 3 defeated, 4 succeeded,
        // 5 expired, 6 executed.
        type ProposalState is uint8;

        event ProposalAdded(address indexed proposer, string indexed proposalDAO, uint256 indexed proposalID, bytes payload, uint256 time);
        event ProposalVoted(uint256 indexed proposalID, address indexed voter, bool supported, uint256 time);
        event ProposalExecuted(uint256 indexed proposalID, address indexed executer, uint256 time);
        event ProposalCancelled(uint256 indexed proposalID, address indexed canceller, uint256 time);

        function getTotal() external view returns (uint256);
        function getDAO(uint256 _proposalID) external view returns (string memory);
        function getProposer(uint256 _proposalID) external view returns (address);
        function getMessage(uint256 _proposalID) external view returns (string memory);
        function getStart(uint256 _proposalID) external view returns (uint256);
        function getEnd(uint256 _proposalID) external view returns (uint256);
        function getExpires(uint256 _proposalID) external view returns (uint256);
        function getCreated(uint256 _proposalID) external view returns (uint256);
        function getVotesFor(uint256 _proposalID) external view returns (uint256);
        function getVotesAgainst(uint256 _proposalID) external view returns (uint256);
        function getVotesRequired(uint256 _proposalID) external view returns (uint256);
        function getCancelled(uint256 _proposalID) external view returns (bool);
        function getExecuted(uint256 _proposalID) external view returns (bool);
        function getPayload(uint256 _proposalID) external view returns (bytes memory);
        function getReceiptHasVoted(uint256 _proposalID, address _nodeAddress) external view returns (bool);
        function getReceiptSupported(uint256 _proposalID, address _nodeAddress) external view returns (bool);
        function getState(uint256 _proposalID) external view returns (ProposalState);

        function propose(string memory _proposalMessage, bytes memory _payload) external returns (uint256);
        function vote(uint256 _proposalID, bool _support) external;
        function execute(uint256 _proposalID) external;
        function cancel(uint256 _proposalID) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborDAOProtocolSettings {
        function getDepositEnabled() external view returns (bool);
        function getAssignDepositsEnabled() external view returns (bool);
        function getMinimumDeposit() external view returns (uint256);
        function getMaximumDepositPoolSize() external view returns (uint256);
        function getMaximumDepositAssignments() external view returns (uint256);

        function getLaunchBalance() external view returns (uint256);
        function getPreLaunchValue() external view returns (uint256);
        function getLaunchTimeout() external view returns (uint256);
        function getBondReductionEnabled() external view returns (bool);

        function getMinimumPerMinipoolStake() external view returns (uint256);
        function getMaximumPerMinipoolStake() external view returns (uint256);

        function getMinimumNodeFee() external view returns (uint256);
        function getTargetNodeFee() external view returns (uint256);
        function getMaximumNodeFee() external view returns (uint256);
        function getNodeFeeDemandRange() external view returns (uint256);

        function getRewardsClaimIntervalTime() external view returns (uint256);
        function getInflationIntervalRate() external view returns (uint256);
        function getInflationIntervalStartTime() external view returns (uint256);
    }
);
