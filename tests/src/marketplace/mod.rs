// =============================================================================
// NFT Marketplace Integration Tests
// =============================================================================
// Runs the marketplace against the mock-nft registry in a sandbox.
// Build both wasm files with cargo-near first; `NFT_MARKETPLACE_WASM_PATH`
// and `MOCK_NFT_WASM_PATH` override their locations.
