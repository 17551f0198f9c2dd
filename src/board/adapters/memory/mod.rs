//! In-memory adapters for the board context.

mod catalog;

pub use catalog::InMemoryBoardCatalogRepository;
