//! Divi Catalog Common Library
//!
//! スクレイプCSVからのDivi抽出、旧一覧表との統合、出力生成（I/Oなし）

pub mod types;
pub mod error;
pub mod vocabulary;
pub mod splitter;
pub mod extractor;
pub mod category;
pub mod scrape;
pub mod legacy;
pub mod catalog;
pub mod export;

pub use types::{CategorySet, CategorySource, Item};
pub use error::{Error, Result};
pub use vocabulary::{Vocabulary, VocabularyFile};
pub use splitter::{split_records, RawRecord};
pub use extractor::{extract_record, ExtractedRecord, ExtractionRules};
pub use category::{AcceptMode, CategoryNormalizer};
pub use scrape::{extract_scrape, ScrapeOutcome, ScrapeStats};
pub use legacy::{LegacyEntry, LegacyOverview};
pub use catalog::Catalog;
pub use export::Table;
