//! Behavioural tests for page-number pagination.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use pagination::{Page, PageRequest, paginate};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the result set and the computed page.
#[derive(Default, ScenarioState)]
struct World {
    items: Slot<Vec<usize>>,
    page: Slot<Page<usize>>,
}

impl World {
    fn page(&self) -> Page<usize> {
        self.page.get().expect("page should be computed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("an ordered result set of {count:usize} items")]
fn an_ordered_result_set(world: &World, count: usize) {
    world.items.set((0..count).collect());
}

#[when("page {number:usize} is requested with {size:usize} items per page")]
fn page_is_requested(world: &World, number: usize, size: usize) {
    let items = world.items.get().expect("items should be set");
    let request = PageRequest::new(number, size).expect("valid page request");
    world.page.set(paginate(items, request));
}

#[then("the page holds {count:usize} items")]
fn the_page_holds(world: &World, count: usize) {
    assert_eq!(world.page().len(), count);
}

#[then("the listing reports {count:usize} total pages")]
fn the_listing_reports_total_pages(world: &World, count: usize) {
    assert_eq!(world.page().meta().total_pages(), count);
}

#[then("the first item on the page is {value:usize}")]
fn the_first_item_is(world: &World, value: usize) {
    assert_eq!(world.page().items().first(), Some(&value));
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Fifty matches split into pages of ten"
)]
fn fifty_matches_split_into_pages_of_ten(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Requesting a page past the last one"
)]
fn requesting_a_page_past_the_last_one(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "An empty result set has no pages"
)]
fn an_empty_result_set_has_no_pages(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "The last page holds the remainder"
)]
fn the_last_page_holds_the_remainder(world: World) {
    let _ = world;
}
