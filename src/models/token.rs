//! Token descriptors handed to the external swap widget.

use serde::Serialize;

/// A swappable token on Base, in the shape the swap widget expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub contract_address: &'static str,
    pub chain_id: u32,
    pub decimals: u8,
    pub name: &'static str,
    pub symbol: &'static str,
    pub icon_url: &'static str,
}

/// Base mainnet chain ID.
pub const BASE_CHAIN_ID: u32 = 8453;

/// The fixed token set offered by the swap UI: ETH, USDC, WETH on Base.
pub fn swap_tokens() -> &'static [Token] {
    const TOKENS: &[Token] = &[
        Token {
            contract_address: "",
            chain_id: BASE_CHAIN_ID,
            decimals: 18,
            name: "Ethereum",
            symbol: "ETH",
            icon_url: "https://dynamic-assets.coinbase.com/dbb4b4983bde81309ddab83eb598358eb44375b930b94687ebe38bc22e52c3b2125258ffb8477a5ef22e33d6bd72e32a506c391caa13af64c00e46613c3e5806/asset_icons/4113b082d21cc5fab17fc8f2d19fb996165bcce635e6900f7fc2d57c4ef33ae9.png",
        },
        Token {
            contract_address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            chain_id: BASE_CHAIN_ID,
            decimals: 6,
            name: "USDC",
            symbol: "USDC",
            icon_url: "https://dynamic-assets.coinbase.com/3c15df5e2ac7d4abbe9499ed9335041f00c620f28e8de2f93474a9f432058742cdf4674bd43f309e69778a26969372310135be97eb183d91c492154176d455b8/asset_icons/9d67b728b6c8f457717154b3a35f9ddc702eae7e76c4684ee39302c4d7fd0bb8.png",
        },
        Token {
            contract_address: "0x4200000000000000000000000000000000000006",
            chain_id: BASE_CHAIN_ID,
            decimals: 18,
            name: "Wrapped Ether",
            symbol: "WETH",
            icon_url: "https://dynamic-assets.coinbase.com/dbb4b4983bde81309ddab83eb598358eb44375b930b94687ebe38bc22e52c3b2125258ffb8477a5ef22e33d6bd72e32a506c391caa13af64c00e46613c3e5806/asset_icons/4113b082d21cc5fab17fc8f2d19fb996165bcce635e6900f7fc2d57c4ef33ae9.png",
        },
    ];
    TOKENS
}
