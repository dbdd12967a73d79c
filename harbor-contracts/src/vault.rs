use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborVault {
        event EtherDeposited(string indexed by, uint256 amount, uint256 time);
        event EtherWithdrawn(string indexed by, uint256 amount, uint256 time);
        event TokenDeposited(bytes32 indexed by, address indexed tokenAddress, uint256 amount, uint256 time);
        event TokenWithdrawn(bytes32 indexed by, address indexed tokenAddress, uint256 amount, uint256 time);
        event TokenBurned(bytes32 indexed by, address indexed tokenAddress, uint256 amount, uint256 time);
        event TokenTransfer(bytes32 indexed by, bytes32 indexed to, address indexed tokenAddress, uint256 amount, uint256 time);

        function balanceOf(string memory _networkContractName) external view returns (uint256);
        function balanceOfToken(string memory _networkContractName, address _tokenAddress) external view returns (uint256);

        function depositEther() external payable;
        function withdrawEther(uint256 _amount) external;

        function depositToken(string memory _networkContractName, address _tokenContract, uint256 _amount) external;
        function withdrawToken(address _withdrawalAddress, address _tokenAddress, uint256 _amount) external;
        function transferToken(string memory _networkContractName, address _tokenAddress, uint256 _amount) external;
        function burnToken(address _tokenAddress, uint256 _amount) external;
    }
);
