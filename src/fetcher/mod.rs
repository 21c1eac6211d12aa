pub mod fetcher;
pub mod ethereum_fetcher;

pub use fetcher::BlockFetcher;
pub use ethereum_fetcher::EthereumFetcher;
