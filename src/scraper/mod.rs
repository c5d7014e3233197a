mod tigertag_scraper;

pub use tigertag_scraper::{Collection, TigerTagScraper};
