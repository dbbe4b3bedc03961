use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::dataset_store::{dataset_exists, load_dataset, save_dataset, DatasetError};
use crate::generator::ContractGenerator;
use crate::types::PromptExample;

pub const DEFAULT_EXAMPLES: usize = 10;

/// Pause after each successful call, to stay under the provider's rate limit.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

pub const CATALOG: [&str; 15] = [
    "Generate an ERC-20 token contract with burn functionality",
    "Generate an ERC-721 NFT contract with metadata storage",
    "Create a simple crowdfunding contract with a time limit and minimum contribution",
    "Develop a staking contract that rewards users with tokens over time",
    "Create a multi-signature wallet contract that requires 2 of 3 signatures",
    "Design a DAO governance contract with proposal and voting mechanisms",
    "Create a decentralized exchange contract for swapping ERC-20 tokens",
    "Develop a time-locked vault contract that releases funds on a schedule",
    "Create an auction contract for NFTs with bidding functionality",
    "Design a yield farming contract that rewards liquidity providers",
    "Create a lending protocol with collateral and interest calculation",
    "Develop a prediction market contract with outcome resolution",
    "Create a supply chain tracking contract with product verification",
    "Design a token vesting contract with cliff and linear release",
    "Create a lottery contract with random winner selection",
];

/// Generates one example per catalog prompt, in catalog order, for the first
/// `count` prompts. Failed prompts are logged and skipped.
pub async fn create_dataset(
    generator: &ContractGenerator,
    count: usize,
    delay: Duration,
) -> Vec<PromptExample> {
    let mut dataset = Vec::new();

    for prompt in CATALOG.iter().take(count) {
        info!("Generating contract for: {prompt}");
        match generator.generate(prompt).await {
            Ok(output) => {
                dataset.push(PromptExample {
                    prompt: prompt.to_string(),
                    output,
                });
                tokio::time::sleep(delay).await;
            }
            Err(e) => warn!(kind = e.kind(), "Failed to generate output for: {prompt}"),
        }
    }

    dataset
}

/// An existing file is authoritative and never regenerated.
pub async fn build_or_load(
    generator: &ContractGenerator,
    path: &Path,
    count: usize,
    delay: Duration,
) -> Result<Vec<PromptExample>, DatasetError> {
    if dataset_exists(path).await? {
        info!("Dataset already exists");
        let dataset = load_dataset(path).await?;
        info!("Loaded {} examples from existing dataset", dataset.len());
        return Ok(dataset);
    }

    info!("Generating dataset...");
    let dataset = create_dataset(generator, count, delay).await;
    save_dataset(path, &dataset).await?;
    info!(examples = dataset.len(), "Dataset saved to {}", path.display());
    Ok(dataset)
}
