//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `farhang_core` linkage.
//! - Print a deterministic first-page summary of the built-in feed.

use farhang_core::{FeedSession, MemoryKvStore, MockIdentityCycle};

fn main() {
    println!("farhang_core ping={}", farhang_core::ping());
    println!("farhang_core version={}", farhang_core::core_version());

    let session = FeedSession::open(
        MemoryKvStore::new(),
        MockIdentityCycle::new(farhang_core::fixtures::mock_users()),
    );
    let page = session.page();
    println!(
        "feed visible={} total={} has_more={}",
        page.items.len(),
        page.total,
        page.has_more
    );
    for article in &page.items {
        println!(
            "  #{} [{}] {}",
            article.id,
            article.category.as_str(),
            article.title
        );
    }
}
