//! Integration tests for the filter button bar.

use webnovels_model::{Item, PageSize};
use webnovels_pager::{PagerConfig, PaginationFilterEngine, TagBar, TagButtonKind};

fn articles() -> Vec<Item> {
    let mut items = Vec::new();
    for i in 1..=24 {
        let attr = match i % 3 {
            0 => "ai openai",
            1 => "ai google",
            _ => "ai openai google",
        };
        items.push(Item::from_tag_attr(format!("/posts/{i}"), format!("Post {i}"), attr));
    }
    items
}

#[test]
fn topic_click_resets_to_first_page() {
    let config = PagerConfig::with_page_size(PageSize::new(5).unwrap());
    let mut engine = PaginationFilterEngine::from_config(&config);
    engine.load(articles());
    let mut bar = TagBar::from_engine(&config, &engine);

    engine.set_page(4);
    bar.click(&mut engine, "openai");
    assert_eq!(engine.current_page(), 1);
    assert_eq!(engine.filtered_count(), 16);

    bar.click(&mut engine, "google");
    assert_eq!(engine.filtered_count(), 8);
    assert_eq!(engine.total_pages(), 2);
}

#[test]
fn custom_reserved_names_are_honoured() {
    let config = PagerConfig::from_toml_str(
        "page_size = 4\nall_tag = \"everything\"\nlatest_tag = \"new\"\n",
    )
    .expect("parse config");
    let mut engine = PaginationFilterEngine::from_config(&config);
    engine.load(articles());
    let mut bar = TagBar::from_engine(&config, &engine);

    let buttons = bar.buttons(&engine);
    assert_eq!(buttons[0].tag, "everything");
    assert_eq!(buttons[0].kind, TagButtonKind::All);
    assert!(buttons[0].active);
    assert_eq!(buttons[1].tag, "new");
    assert_eq!(buttons[1].kind, TagButtonKind::Latest);

    bar.click(&mut engine, "ai");
    assert!(!bar.is_active(&engine, "everything"));
    bar.click(&mut engine, "everything");
    assert!(engine.is_all_mode());
    assert_eq!(engine.total_pages(), 6);
}

#[test]
fn buttons_serialize_for_renderers() {
    let config = PagerConfig::default();
    let mut engine = PaginationFilterEngine::from_config(&config);
    engine.load(articles());
    let mut bar = TagBar::from_engine(&config, &engine);
    bar.click(&mut engine, "google");

    let json = serde_json::to_value(bar.buttons(&engine)).expect("serialize buttons");
    assert_eq!(json[0]["kind"], "all");
    assert_eq!(json[0]["active"], false);
    let google = json
        .as_array()
        .and_then(|buttons| buttons.iter().find(|b| b["tag"] == "google"))
        .expect("google button");
    assert_eq!(google["active"], true);
    assert_eq!(google["kind"], "topic");
}

#[test]
fn latest_keeps_every_article_listed() {
    let config = PagerConfig::default();
    let mut engine = PaginationFilterEngine::from_config(&config);
    engine.load((1..=25).map(|i| {
        Item::from_tag_attr(format!("/posts/{i}"), format!("Post {i}"), "ai openai")
    }));
    let mut bar = TagBar::from_engine(&config, &engine);
    engine.set_page(3);

    bar.click(&mut engine, "latest");
    assert!(engine.selected_tags().is_empty());
    assert_eq!(engine.filtered_count(), 25);
    assert_eq!(engine.current_page(), 1);
    assert_eq!(engine.visible_items().len(), 10);
    assert!(bar.is_active(&engine, "latest"));
    assert!(bar.is_active(&engine, "all"));
}
