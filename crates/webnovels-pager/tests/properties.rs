//! Property tests for engine invariants.

use proptest::prelude::*;
use webnovels_model::{Item, PageSize};
use webnovels_pager::{PagerMessage, PaginationFilterEngine};

const TAGS: [&str; 4] = ["ai", "openai", "google", "latest"];

fn arb_item() -> impl Strategy<Value = Item> {
    (
        any::<u16>(),
        prop_oneof![Just(String::new()), "[a-z ]{1,12}"],
        proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
    )
        .prop_map(|(id, title, tags)| Item::new(id.to_string(), title, tags))
}

fn arb_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(TAGS.to_vec()).prop_map(str::to_string),
        "[a-z]{1,6}",
    ]
}

fn arb_message() -> impl Strategy<Value = PagerMessage> {
    prop_oneof![
        arb_tag().prop_map(PagerMessage::ToggleTag),
        Just(PagerMessage::ClearFilter),
        (-5i64..50).prop_map(PagerMessage::GoToPage),
        any::<i64>().prop_map(PagerMessage::GoToPage),
        "[0-9a-z -]{0,4}".prop_map(PagerMessage::PageInput),
        Just(PagerMessage::NextPage),
        Just(PagerMessage::PreviousPage),
    ]
}

proptest! {
    #[test]
    fn prop_page_stays_in_bounds(
        page_size in 1usize..8,
        items in proptest::collection::vec(arb_item(), 0..40),
        messages in proptest::collection::vec(arb_message(), 0..40),
    ) {
        let mut engine = PaginationFilterEngine::new(PageSize::new(page_size).unwrap());
        engine.load(items);
        prop_assert_eq!(engine.current_page(), 1);

        for msg in messages {
            engine.handle(msg);
            let page = engine.current_page();
            prop_assert!(page >= 1);
            prop_assert!(page <= engine.total_pages());
            prop_assert!(engine.visible_items().len() <= page_size);
            prop_assert_eq!(engine.is_first_page(), page == 1);
            prop_assert_eq!(engine.is_last_page(), page == engine.total_pages());
        }
    }

    #[test]
    fn prop_double_toggle_is_identity(
        items in proptest::collection::vec(arb_item(), 0..20),
        setup in proptest::collection::vec(arb_tag(), 0..4),
        tag in arb_tag(),
    ) {
        let mut engine = PaginationFilterEngine::default();
        engine.load(items);
        for t in &setup {
            engine.toggle_tag(t);
        }
        let before = engine.selected_tags().clone();
        let count = engine.filtered_count();

        engine.toggle_tag(&tag);
        engine.toggle_tag(&tag);
        prop_assert_eq!(engine.selected_tags(), &before);
        prop_assert_eq!(engine.filtered_count(), count);
    }

    #[test]
    fn prop_pages_partition_filtered_items(
        page_size in 1usize..8,
        items in proptest::collection::vec(arb_item(), 0..40),
        tag in proptest::option::of(arb_tag()),
    ) {
        let mut engine = PaginationFilterEngine::new(PageSize::new(page_size).unwrap());
        engine.load(items);
        if let Some(tag) = tag {
            engine.toggle_tag(&tag);
        }

        let expected: Vec<Item> = engine.filtered_items().cloned().collect();
        let mut seen = Vec::new();
        for page in 1..=engine.total_pages() {
            engine.set_page(i64::try_from(page).unwrap());
            seen.extend(engine.visible_items().into_iter().cloned());
        }
        prop_assert_eq!(seen, expected);
        prop_assert!(engine.items().iter().all(Item::has_title));
    }
}
