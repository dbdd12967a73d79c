use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborTokenSETH {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);
        event EtherDeposited(address indexed from, uint256 amount, uint256 time);
        event TokensMinted(address indexed to, uint256 amount, uint256 ethAmount, uint256 time);
        event TokensBurned(address indexed from, uint256 amount, uint256 ethAmount, uint256 time);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address _account) external view returns (uint256);
        function transfer(address _to, uint256 _amount) external returns (bool);
        function allowance(address _owner, address _spender) external view returns (uint256);
        function approve(address _spender, uint256 _amount) external returns (bool);
        function transferFrom(address _from, address _to, uint256 _amount) external returns (bool);

        function getEthValue(uint256 _sethAmount) external view returns (uint256);
        function getSethValue(uint256 _ethAmount) external view returns (uint256);
        function getExchangeRate() external view returns (uint256);
        function getTotalCollateral() external view returns (uint256);
        function getCollateralRate() external view returns (uint256);

        function depositExcess() external payable;
        function mint(uint256 _ethAmount, address _to) external;
        function burn(uint256 _sethAmount) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborTokenHBR {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);
        event HBRInflationLog(address sender, uint256 value, uint256 inflationCalcTime);
        event HBRFixedSupplyBurn(address indexed from, uint256 amount, uint256 time);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address _account) external view returns (uint256);
        function transfer(address _to, uint256 _amount) external returns (bool);
        function allowance(address _owner, address _spender) external view returns (uint256);
        function approve(address _spender, uint256 _amount) external returns (bool);
        function transferFrom(address _from, address _to, uint256 _amount) external returns (bool);

        function getInflationCalcTime() external view returns (uint256);
        function getInflationIntervalTime() external view returns (uint256);
        function getInflationIntervalRate() external view returns (uint256);
        function getInflationIntervalsPassed() external view returns (uint256);
        function getInflationIntervalStartTime() external view returns (uint256);
        function inflationCalculate() external view returns (uint256);

        function inflationMintTokens() external returns (uint256);
        function swapTokens(uint256 _amount) external;
    }
);
