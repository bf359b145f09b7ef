use linkedin_scraper::{
    DomElement, ElementWaiter, Locator, SearchSession, SessionOptions,
};
use std::time::Duration;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_launch_and_query_by_class() {
    init_logs();
    let session = SearchSession::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .navigate("data:text/html,<html><body><div class='job-card-list'><a class='job-card-list__title--link' href='https://example.com/job/1'>Rust Developer</a></div></body></html>")
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timed out");

    let page = session.page();
    let waiter = ElementWaiter::new();

    let card = waiter
        .wait_for(&page, &Locator::class("job-card-list"))
        .expect("Query failed")
        .expect("Card not found");

    let link = waiter
        .wait_for(&card, &Locator::class("job-card-list__title--link"))
        .expect("Query failed")
        .expect("Title link not found");

    assert_eq!(link.text().expect("No text"), "Rust Developer");
    assert_eq!(
        link.attribute("href").expect("Attribute access failed"),
        Some("https://example.com/job/1".to_string())
    );
}

#[test]
#[ignore]
fn test_missing_element_times_out_to_none() {
    init_logs();
    let session = SearchSession::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .navigate("data:text/html,<html><body><p>Nothing here</p></body></html>")
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timed out");

    let page = session.page();
    let waiter = ElementWaiter::new().with_timeout(Duration::from_millis(500));

    let found = waiter
        .wait_for(&page, &Locator::class("jobs-search-results-list"))
        .expect("Query failed");
    assert!(found.is_none());
}

#[test]
#[ignore]
fn test_xpath_query() {
    init_logs();
    let session = SearchSession::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .navigate("data:text/html,<html><body><ul><li class='jobs-search-results__list-item'>One</li><li class='jobs-search-results__list-item'>Two</li></ul></body></html>")
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timed out");

    let page = session.page();
    let waiter = ElementWaiter::new();

    let items = waiter
        .wait_for_all(
            &page,
            &Locator::xpath("//li[contains(@class, 'jobs-search-results__list-item')]"),
        )
        .expect("Query failed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text().expect("No text"), "One");
    assert_eq!(items[1].text().expect("No text"), "Two");
}

#[test]
#[ignore]
fn test_scroll_actions_evaluate_cleanly() {
    use linkedin_scraper::PageActions;

    init_logs();

    let session = SearchSession::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .navigate("data:text/html,<html><body><div class='search-marvel-srp' style='height:100px;overflow:scroll'><div style='height:1000px'>tall</div></div></body></html>")
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timed out");

    let page = session.page();
    page.scroll_to_bottom().expect("scroll_to_bottom failed");
    page.scroll_to_half().expect("scroll_to_half failed");
    for stop in [0.3, 0.6, 1.0] {
        page.scroll_element_to_percent("search-marvel-srp", stop)
            .expect("scroll_element_to_percent failed");
    }
}

#[test]
#[ignore]
fn test_card_order_preserved_on_live_dom() {
    init_logs();
    let session = SearchSession::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    let html = concat!(
        "<html><body><div class='jobs-search-results-list'>",
        "<div class='job-card-list'><a class='job-card-list__title--link' href='/1'>First</a></div>",
        "<div class='job-card-list'><a class='job-card-list__title--link' href='/2'>Second</a></div>",
        "<div class='job-card-list'><a class='job-card-list__title--link' href='/3'>Third</a></div>",
        "</div></body></html>"
    );
    session
        .navigate(&format!("data:text/html,{}", html))
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timed out");

    let page = session.page();
    let waiter = ElementWaiter::new();

    let cards = waiter
        .wait_for_all(&page, &Locator::class("job-card-list"))
        .expect("Query failed");
    assert_eq!(cards.len(), 3);

    let mut titles = Vec::new();
    for card in &cards {
        let link = waiter
            .wait_for(&card, &Locator::class("job-card-list__title--link"))
            .expect("Query failed")
            .expect("Title link not found");
        titles.push(link.text().expect("No text"));
    }
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}
