use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HarborStorage {
        event NodeWithdrawalAddressSet(address indexed node, address indexed withdrawalAddress, uint256 time);
        event GuardianChanged(address oldGuardian, address newGuardian);

        function getDeployedStatus() external view returns (bool);

        function getGuardian() external view returns (address);
        function setGuardian(address _newAddress) external;
        function confirmGuardian() external;

        function getAddress(bytes32 _key) external view returns (address);
        function getUint(bytes32 _key) external view returns (uint256);
        function getString(bytes32 _key) external view returns (string memory);
        function getBytes(bytes32 _key) external view returns (bytes memory);
        function getBool(bytes32 _key) external view returns (bool);
        function getInt(bytes32 _key) external view returns (int256);
        function getBytes32(bytes32 _key) external view returns (bytes32);

        function setAddress(bytes32 _key, address _value) external;
        function setUint(bytes32 _key, uint256 _value) external;
        function setString(bytes32 _key, string calldata _value) external;
        function setBytes(bytes32 _key, bytes calldata _value) external;
        function setBool(bytes32 _key, bool _value) external;
        function setInt(bytes32 _key, int256 _value) external;
        function setBytes32(bytes32 _key, bytes32 _value) external;

        function deleteAddress(bytes32 _key) external;
        function deleteUint(bytes32 _key) external;
        function deleteString(bytes32 _key) external;
        function deleteBytes(bytes32 _key) external;
        function deleteBool(bytes32 _key) external;
        function deleteInt(bytes32 _key) external;
        function deleteBytes32(bytes32 _key) external;

        function addUint(bytes32 _key, uint256 _amount) external;
        function subUint(bytes32 _key, uint256 _amount) external;

        function getNodeWithdrawalAddress(address _nodeAddress) external view returns (address);
        function getNodePendingWithdrawalAddress(address _nodeAddress) external view returns (address);
        function setWithdrawalAddress(address _nodeAddress, address _newWithdrawalAddress, bool _confirm) external;
        function confirmWithdrawalAddress(address _nodeAddress) external;
    }
);
